use crate::widget::{Element, Widget, WidgetBase};

/// A leaf widget wrapping a single host element of a fixed tag.
///
/// Registered by the defaults as `Image` (`<img>`) and `Label` (`<label>`).
/// Element children are not accepted; text and comments land on the node.
#[derive(Debug)]
pub struct DomWrapper {
    base: WidgetBase,
}

impl DomWrapper {
    pub fn new(tag: &str) -> Self {
        Self { base: WidgetBase::new(tag) }
    }
}

impl Widget for DomWrapper {
    fn base(&self) -> &WidgetBase { &self.base }
    fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
}

/// Constructor producing a fresh [`DomWrapper`] around `<tag>` on each call.
pub fn dom_wrapper(tag: &'static str) -> impl Fn() -> Element + Send + Sync + 'static {
    move || DomWrapper::new(tag).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_requested_tag() {
        let make = dom_wrapper("img");
        let el = make();
        assert!(el.is::<DomWrapper>());
        assert_eq!(el.node().tag(), "img");
        assert!(el.node().has_class("pam-Widget"));
        assert_eq!(el.outer_html(), r#"<img class="pam-Widget">"#);
    }

    #[test]
    fn each_call_builds_a_new_node() {
        let make = dom_wrapper("label");
        let mut a = make();
        let b = make();
        a.node_mut().append_text("a");
        assert_eq!(b.node().text_content(), "");
    }
}
