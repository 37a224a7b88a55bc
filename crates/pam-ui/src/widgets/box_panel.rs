use crate::widget::{ChildContainer, Widget, WidgetBase};
use crate::widgets::panel::WidgetList;

/// A container laying out its children in a row or column.
///
/// Per-child sizing comes from the `BoxLayout.SizeBasis` and
/// `BoxLayout.Stretch` attached properties.
#[derive(Debug)]
pub struct BoxPanel {
    base: WidgetBase,
    children: WidgetList,
}

impl Default for BoxPanel {
    fn default() -> Self {
        let mut base = WidgetBase::new("div").with_class("pam-BoxPanel");
        base.node_mut().set_attribute("data-direction", "top-to-bottom");
        Self { base, children: WidgetList::with_child_class("pam-BoxPanel-child") }
    }
}

impl Widget for BoxPanel {
    fn base(&self) -> &WidgetBase { &self.base }
    fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }

    fn container(&self) -> Option<&dyn ChildContainer> { Some(&self.children) }
    fn container_mut(&mut self) -> Option<&mut dyn ChildContainer> { Some(&mut self.children) }
}
