//! Markup → widget tree instantiation.
//!
//! # Overview
//!
//! The loader parses markup, then walks the element tree depth-first. For
//! each element it asks the [`WidgetFactory`] for a widget of that tag name,
//! applies attributes, and recurses into children:
//!
//! - `Uppercase` attribute names are attached properties, resolved through
//!   the factory and applied with [`AttachedProperty::set`].
//! - every other attribute (including `data-*`) is copied verbatim onto the
//!   widget's host node.
//! - text and comment children are copied onto the host node.
//! - element children are instantiated and appended to the widget's child
//!   container. A child that fails is dropped with a warning; its siblings
//!   are still built.
//!
//! ## Usage
//!
//! ```rust
//! use pam_ui::prelude::*;
//!
//! let factory = WidgetFactory::with_defaults();
//! let loader = MarkupLoader::new(&factory);
//! let report = loader
//!     .load_with_report(r#"<BoxPanel><Label BoxLayout.Stretch="2">Hi</Label><Bogus/></BoxPanel>"#)
//!     .unwrap();
//! assert_eq!(report.root.children().len(), 1);
//! assert_eq!(report.diagnostics.len(), 1);
//! ```
//!
//! [`AttachedProperty::set`]: crate::property::AttachedProperty::set

use std::fmt;

use pam_host::logging::LOADER_TARGET as LOG_TARGET;
use pam_markup::{parse_with, Document, Element as MarkupElement, Node, ParseMode};

use crate::error::LoadError;
use crate::property::is_attached_name;
use crate::registry::WidgetFactory;
use crate::widget::Element;

// ── LoaderConfig ──────────────────────────────────────────────────────────

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// How the markup parser treats structural errors. Either way a broken
    /// document fails the load; `Recover` only changes how the parser
    /// reports it.
    pub parse_mode: ParseMode,
    /// Deepest element nesting that will be instantiated. The root is depth 0.
    pub max_depth: usize,
}

impl LoaderConfig {
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { parse_mode: ParseMode::Strict, max_depth: 256 }
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Notice,
    Warning,
}

/// A non-fatal problem recorded while building the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A child node that is neither element, text, nor comment was skipped.
    UnsupportedNode { parent: String, kind: &'static str },
    /// `parent` has no child container, so element `child` and its subtree
    /// were dropped.
    ChildrenNotAccepted { parent: String, child: String },
    /// Building element `child` failed; it and its subtree were dropped.
    ChildFailed { parent: String, child: String, error: LoadError },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::ChildrenNotAccepted { .. } => Severity::Notice,
            Diagnostic::UnsupportedNode { .. } | Diagnostic::ChildFailed { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedNode { parent, kind } => {
                write!(f, "unsupported {kind} node in <{parent}> was not copied")
            }
            Diagnostic::ChildrenNotAccepted { parent, child } => {
                write!(f, "<{parent}> does not accept children; skipped <{child}>")
            }
            Diagnostic::ChildFailed { parent, child, error } => {
                write!(f, "failed to create child <{child}> of <{parent}>: {error}")
            }
        }
    }
}

/// A successful load: the root widget plus everything that was skipped.
#[derive(Debug)]
pub struct LoadReport {
    pub root: Element,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity() == Severity::Warning)
    }
}

// ── MarkupLoader ──────────────────────────────────────────────────────────

/// Builds widget trees from markup using one registry.
pub struct MarkupLoader<'f> {
    factory: &'f WidgetFactory,
    config: LoaderConfig,
}

impl<'f> MarkupLoader<'f> {
    pub fn new(factory: &'f WidgetFactory) -> Self {
        Self::with_config(factory, LoaderConfig::default())
    }

    pub fn with_config(factory: &'f WidgetFactory, config: LoaderConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parse `text` and build its widget tree, returning the root.
    pub fn load(&self, text: &str) -> Result<Element, LoadError> {
        self.load_with_report(text).map(|report| report.root)
    }

    /// Like [`load`](Self::load), also returning the recorded diagnostics.
    pub fn load_with_report(&self, text: &str) -> Result<LoadReport, LoadError> {
        let doc = parse_with(text, self.config.parse_mode).inspect_err(|e| {
            log::error!(target: LOG_TARGET, "failed to load markup: could not parse: {e}");
        })?;
        self.load_document(&doc)
    }

    /// Build the widget tree for an already parsed document.
    ///
    /// A document carrying an embedded parser-error marker is rejected the
    /// same way as one that failed to parse.
    pub fn load_document(&self, doc: &Document) -> Result<LoadReport, LoadError> {
        if let Some(e) = doc.first_error() {
            log::error!(target: LOG_TARGET, "failed to load markup: markup error: {e}");
            return Err(LoadError::Parse(e.clone()));
        }
        let mut diagnostics = Vec::new();
        let root = self.instantiate(&doc.root, 0, &mut diagnostics)?;
        Ok(LoadReport { root, diagnostics })
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn instantiate(
        &self,
        el: &MarkupElement,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Element, LoadError> {
        if depth > self.config.max_depth {
            return Err(LoadError::DepthExceeded { max_depth: self.config.max_depth });
        }

        let mut widget = self.factory.create_widget(&el.name)?;

        for attr in &el.attributes {
            if is_attached_name(&attr.name) {
                let prop = self.factory.get_property(&attr.name)?;
                prop.set(widget.widget_mut(), &attr.value).map_err(|source| LoadError::Property {
                    name: attr.name.clone(),
                    source,
                })?;
            } else {
                widget.node_mut().set_attribute(attr.name.as_str(), attr.value.as_str());
            }
        }

        for child in &el.children {
            match child {
                Node::Text(text) => widget.node_mut().append_text(text.as_str()),
                Node::Comment(text) => widget.node_mut().append_comment(text.as_str()),
                Node::Element(child_el) => {
                    self.instantiate_child(&mut widget, el, child_el, depth, diagnostics);
                }
                Node::ProcessingInstruction { .. } | Node::ParserError(_) => {
                    let d = Diagnostic::UnsupportedNode {
                        parent: el.name.clone(),
                        kind: child.kind_name(),
                    };
                    log::warn!(target: LOG_TARGET, "{d}");
                    diagnostics.push(d);
                }
            }
        }

        Ok(widget)
    }

    /// The recovery boundary: a failing child is logged and dropped, never
    /// propagated.
    fn instantiate_child(
        &self,
        parent: &mut Element,
        parent_el: &MarkupElement,
        child_el: &MarkupElement,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(container) = parent.widget_mut().container_mut() else {
            let d = Diagnostic::ChildrenNotAccepted {
                parent: parent_el.name.clone(),
                child: child_el.name.clone(),
            };
            log::info!(target: LOG_TARGET, "{d}");
            diagnostics.push(d);
            return;
        };

        match self.instantiate(child_el, depth + 1, diagnostics) {
            Ok(child) => container.add_widget(child),
            Err(error) => {
                let d = Diagnostic::ChildFailed {
                    parent: parent_el.name.clone(),
                    child: child_el.name.clone(),
                    error,
                };
                log::warn!(target: LOG_TARGET, "{d}");
                diagnostics.push(d);
            }
        }
    }
}

/// Load `text` using the process-wide registry.
///
/// Holds a read lock on [`WidgetFactory::global`] for the whole load.
pub fn load_markup(text: &str) -> Result<Element, LoadError> {
    let factory = WidgetFactory::global();
    MarkupLoader::new(&factory).load(text)
}
