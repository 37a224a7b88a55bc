use crate::widget::{ChildContainer, Element, Widget, WidgetBase};
use crate::widgets::panel::WidgetList;

const HIDDEN_CLASS: &str = "pam-mod-hidden";

/// A container showing one child at a time.
///
/// The first child added becomes current; the others are marked hidden.
#[derive(Debug)]
pub struct TabPanel {
    base: WidgetBase,
    tabs: TabList,
}

#[derive(Debug)]
struct TabList {
    children: WidgetList,
    current: Option<usize>,
}

impl ChildContainer for TabList {
    fn add_widget(&mut self, mut child: Element) {
        if self.current.is_some() {
            child.node_mut().add_class(HIDDEN_CLASS);
        } else {
            self.current = Some(self.children.len());
        }
        self.children.add_widget(child);
    }

    fn widgets(&self) -> &[Element] {
        self.children.widgets()
    }
}

impl TabPanel {
    /// Index of the visible child, `None` while empty.
    pub fn current_index(&self) -> Option<usize> {
        self.tabs.current
    }

    /// Make child `index` the visible one. Out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: usize) {
        if index >= self.tabs.children.len() {
            return;
        }
        if let Some(old) = self.tabs.current.and_then(|i| self.tabs.children.get_mut(i)) {
            old.node_mut().add_class(HIDDEN_CLASS);
        }
        if let Some(new) = self.tabs.children.get_mut(index) {
            new.node_mut().remove_class(HIDDEN_CLASS);
        }
        self.tabs.current = Some(index);
    }
}

impl Default for TabPanel {
    fn default() -> Self {
        Self {
            base: WidgetBase::new("div").with_class("pam-TabPanel"),
            tabs: TabList {
                children: WidgetList::with_child_class("pam-TabPanel-child"),
                current: None,
            },
        }
    }
}

impl Widget for TabPanel {
    fn base(&self) -> &WidgetBase { &self.base }
    fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }

    fn container(&self) -> Option<&dyn ChildContainer> { Some(&self.tabs) }
    fn container_mut(&mut self) -> Option<&mut dyn ChildContainer> { Some(&mut self.tabs) }
}
