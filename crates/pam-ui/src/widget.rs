use std::any::Any;
use std::fmt;

use pam_host::HostNode;

use crate::property::PropertyStore;

// ── AsAny ─────────────────────────────────────────────────────────────────

/// Upcast helper so `dyn Widget` can be downcast to its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── WidgetBase ────────────────────────────────────────────────────────────

/// State every widget carries: its host node and its attached-property values.
#[derive(Debug)]
pub struct WidgetBase {
    node: HostNode,
    properties: PropertyStore,
}

impl WidgetBase {
    /// A base rendering through a fresh `<tag>` node marked `pam-Widget`.
    pub fn new(tag: &str) -> Self {
        let mut node = HostNode::new(tag);
        node.add_class("pam-Widget");
        Self { node, properties: PropertyStore::default() }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.node.add_class(class);
        self
    }

    pub fn node(&self) -> &HostNode {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut HostNode {
        &mut self.node
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}

// ── ChildContainer ────────────────────────────────────────────────────────

/// The child-container capability: accepting and ordering child widgets.
pub trait ChildContainer {
    /// Append `child` after any existing children.
    fn add_widget(&mut self, child: Element);

    /// Children in insertion order.
    fn widgets(&self) -> &[Element];
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every widget implements.
///
/// Widgets are built with no arguments by a registered factory and then
/// configured entirely through their host node and attached properties.
///
/// # Implementing a custom widget
///
/// ```rust
/// use pam_ui::prelude::*;
///
/// pub struct Badge { base: WidgetBase }
///
/// impl Default for Badge {
///     fn default() -> Self { Self { base: WidgetBase::new("span").with_class("my-Badge") } }
/// }
///
/// impl Widget for Badge {
///     fn base(&self) -> &WidgetBase { &self.base }
///     fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
/// }
///
/// let mut factory = WidgetFactory::new();
/// factory.register_widget_type::<Badge>("Badge").unwrap();
/// ```
pub trait Widget: AsAny {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Short concrete type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// The child-container capability, if this widget has one.
    ///
    /// The default is `None`: element children of such widgets are skipped
    /// by the loader.
    fn container(&self) -> Option<&dyn ChildContainer> {
        None
    }

    fn container_mut(&mut self) -> Option<&mut dyn ChildContainer> {
        None
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// An owned, type-erased widget.
///
/// The loader returns the root as an `Element`; containers own their children
/// as `Element`s.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn widget(&self) -> &dyn Widget {
        &*self.0
    }

    #[inline]
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        &mut *self.0
    }

    pub fn is<W: Widget>(&self) -> bool {
        self.widget().as_any().is::<W>()
    }

    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.widget().as_any().downcast_ref::<W>()
    }

    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.widget_mut().as_any_mut().downcast_mut::<W>()
    }

    pub fn type_name(&self) -> &'static str {
        self.widget().type_name()
    }

    pub fn node(&self) -> &HostNode {
        self.widget().base().node()
    }

    pub fn node_mut(&mut self) -> &mut HostNode {
        self.widget_mut().base_mut().node_mut()
    }

    pub fn accepts_children(&self) -> bool {
        self.widget().container().is_some()
    }

    /// Child widgets, empty for widgets without a child container.
    pub fn children(&self) -> &[Element] {
        self.widget().container().map(|c| c.widgets()).unwrap_or(&[])
    }

    /// Render the host node with child widgets nested inside it, after the
    /// node's own content.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let node = self.node();
        node.write_start_tag(out);
        node.write_content(out);
        for child in self.children() {
            child.write_html(out);
        }
        node.write_end_tag(out);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("type", &self.type_name())
            .field("tag", &self.node().tag())
            .field("children", &self.children())
            .finish()
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
