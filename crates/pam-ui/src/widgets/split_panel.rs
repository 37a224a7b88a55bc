use crate::widget::{ChildContainer, Widget, WidgetBase};
use crate::widgets::panel::WidgetList;

/// A container dividing its area between children, sized by the
/// `SplitLayout.Stretch` attached property.
#[derive(Debug)]
pub struct SplitPanel {
    base: WidgetBase,
    children: WidgetList,
}

impl Default for SplitPanel {
    fn default() -> Self {
        let mut base = WidgetBase::new("div").with_class("pam-SplitPanel");
        base.node_mut().set_attribute("data-orientation", "horizontal");
        Self { base, children: WidgetList::with_child_class("pam-SplitPanel-child") }
    }
}

impl Widget for SplitPanel {
    fn base(&self) -> &WidgetBase { &self.base }
    fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }

    fn container(&self) -> Option<&dyn ChildContainer> { Some(&self.children) }
    fn container_mut(&mut self) -> Option<&mut dyn ChildContainer> { Some(&mut self.children) }
}
