//! Markup parsing on top of `roxmltree`.
//!
//! roxmltree checks well-formedness and namespaces; this module converts its
//! borrowed tree into the owned [`Document`] the loader walks.

use roxmltree::{ExpandedName, NodeType, ParsingOptions};

use crate::ast::{Attribute, Document, Element, Node};
use crate::error::ParseError;

/// Deepest element nesting accepted, counting the root as 1.
///
/// Deeper documents are rejected so that walking the owned tree never
/// exhausts the stack.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Tag of the element standing in for a document that failed to parse in
/// [`ParseMode::Recover`].
pub const PARSER_ERROR_TAG: &str = "parsererror";

// ── ParseMode ─────────────────────────────────────────────────────────────

/// How the parser reports a well-formedness error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Any error aborts the parse with `Err`.
    #[default]
    Strict,
    /// Errors are reported in-band: the result is a document whose root is a
    /// `<parsererror>` element holding a [`Node::ParserError`] marker.
    Recover,
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse markup in [`ParseMode::Strict`].
pub fn parse_str(src: &str) -> Result<Document, ParseError> {
    parse_with(src, ParseMode::Strict)
}

/// Parse markup with an explicit [`ParseMode`].
pub fn parse_with(src: &str, mode: ParseMode) -> Result<Document, ParseError> {
    match (parse_strict(src), mode) {
        (Ok(doc), _) => Ok(doc),
        (Err(e), ParseMode::Strict) => Err(e),
        (Err(e), ParseMode::Recover) => {
            let mut root = Element::new(PARSER_ERROR_TAG);
            root.children.push(Node::ParserError(e));
            Ok(Document { root })
        }
    }
}

fn parse_strict(src: &str) -> Result<Document, ParseError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let xml = roxmltree::Document::parse_with_options(src, options)?;
    let root = convert_element(&xml, xml.root_element(), 1)?;
    Ok(Document { root })
}

// ── Conversion ────────────────────────────────────────────────────────────

fn convert_element(
    xml: &roxmltree::Document<'_>,
    node: roxmltree::Node<'_, '_>,
    depth: usize,
) -> Result<Element, ParseError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::at(
            xml.text_pos_at(node.range().start),
            format!("elements nested deeper than {MAX_NESTING_DEPTH} levels"),
        ));
    }

    let mut el = Element::new(qualified_name(node, node.tag_name()));
    el.attributes = node
        .attributes()
        .map(|a| {
            let name = match a.namespace().and_then(|ns| node.lookup_prefix(ns)) {
                Some(prefix) => format!("{prefix}:{}", a.name()),
                None => a.name().to_string(),
            };
            Attribute { name, value: a.value().to_string() }
        })
        .collect();

    for child in node.children() {
        let converted = match child.node_type() {
            NodeType::Element => Node::Element(convert_element(xml, child, depth + 1)?),
            NodeType::Text => Node::Text(child.text().unwrap_or_default().to_string()),
            NodeType::Comment => Node::Comment(child.text().unwrap_or_default().to_string()),
            NodeType::PI => match child.pi() {
                Some(pi) => Node::ProcessingInstruction {
                    target: pi.target.to_string(),
                    data: pi.value.unwrap_or_default().to_string(),
                },
                None => continue,
            },
            NodeType::Root => continue,
        };
        el.children.push(converted);
    }
    Ok(el)
}

/// `prefix:local` as written in the source, or the bare local name.
fn qualified_name(node: roxmltree::Node<'_, '_>, name: ExpandedName<'_, '_>) -> String {
    match name.namespace().and_then(|ns| node.lookup_prefix(ns)) {
        Some(prefix) => format!("{prefix}:{}", name.name()),
        None => name.name().to_string(),
    }
}
