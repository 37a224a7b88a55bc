use crate::widget::{ChildContainer, Element, Widget, WidgetBase};

// ── WidgetList ────────────────────────────────────────────────────────────

/// Ordered child storage shared by the panel widgets.
///
/// When a child class is set, every added child's node is marked with it.
#[derive(Debug, Default)]
pub struct WidgetList {
    children: Vec<Element>,
    child_class: Option<&'static str>,
}

impl WidgetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_child_class(class: &'static str) -> Self {
        Self { children: Vec::new(), child_class: Some(class) }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }
}

impl ChildContainer for WidgetList {
    fn add_widget(&mut self, mut child: Element) {
        if let Some(class) = self.child_class {
            child.node_mut().add_class(class);
        }
        self.children.push(child);
    }

    fn widgets(&self) -> &[Element] {
        &self.children
    }
}

// ── Panel ─────────────────────────────────────────────────────────────────

/// A plain `<div>` container; children render in insertion order.
#[derive(Debug)]
pub struct Panel {
    base: WidgetBase,
    children: WidgetList,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            base: WidgetBase::new("div").with_class("pam-Panel"),
            children: WidgetList::new(),
        }
    }
}

impl Widget for Panel {
    fn base(&self) -> &WidgetBase { &self.base }
    fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }

    fn container(&self) -> Option<&dyn ChildContainer> { Some(&self.children) }
    fn container_mut(&mut self) -> Option<&mut dyn ChildContainer> { Some(&mut self.children) }
}

// ── StackedPanel ──────────────────────────────────────────────────────────

/// A container whose children overlap in the same area.
#[derive(Debug)]
pub struct StackedPanel {
    base: WidgetBase,
    children: WidgetList,
}

impl Default for StackedPanel {
    fn default() -> Self {
        Self {
            base: WidgetBase::new("div").with_class("pam-StackedPanel"),
            children: WidgetList::with_child_class("pam-StackedPanel-child"),
        }
    }
}

impl Widget for StackedPanel {
    fn base(&self) -> &WidgetBase { &self.base }
    fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }

    fn container(&self) -> Option<&dyn ChildContainer> { Some(&self.children) }
    fn container_mut(&mut self) -> Option<&mut dyn ChildContainer> { Some(&mut self.children) }
}
