// ── HostContent ───────────────────────────────────────────────────────────

/// One piece of content inside a [`HostNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostContent {
    Element(HostNode),
    Text(String),
    Comment(String),
}

// ── HostNode ──────────────────────────────────────────────────────────────

/// A node in the host visual tree.
///
/// Widgets render through exactly one `HostNode`. The node knows nothing
/// about widgets: it is a tag, an ordered attribute list, and ordered content.
///
/// ```rust
/// use pam_host::HostNode;
///
/// let mut node = HostNode::new("div");
/// node.set_attribute("data-role", "sidebar");
/// node.append_text("Hello");
/// assert_eq!(node.outer_html(), r#"<div data-role="sidebar">Hello</div>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostNode {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Vec<HostContent>,
}

impl HostNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), content: Vec::new() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    // ── Attributes ────────────────────────────────────────────────────────

    /// Set `name` to `value`, replacing an existing value in place.
    ///
    /// No validation is performed on either string.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let idx = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(idx).1)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Value of the `data-<key>` attribute.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attribute(&format!("data-{key}"))
    }

    /// Add `class` to the space-separated `class` attribute if not present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attribute("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute("class", joined);
    }

    /// Remove `class` from the `class` attribute, dropping the attribute
    /// once it is empty.
    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attribute("class") else { return };
        let kept: Vec<&str> = existing.split_whitespace().filter(|c| *c != class).collect();
        if kept.is_empty() {
            self.remove_attribute("class");
        } else {
            let joined = kept.join(" ");
            self.set_attribute("class", joined);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    // ── Content ───────────────────────────────────────────────────────────

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.content.push(HostContent::Text(text.into()));
    }

    pub fn append_comment(&mut self, text: impl Into<String>) {
        self.content.push(HostContent::Comment(text.into()));
    }

    pub fn append_child(&mut self, child: HostNode) {
        self.content.push(HostContent::Element(child));
    }

    pub fn content(&self) -> &[HostContent] {
        &self.content
    }

    /// Concatenated text of this node and its descendant nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for item in &self.content {
            match item {
                HostContent::Text(t) => out.push_str(t),
                HostContent::Element(e) => e.collect_text(out),
                HostContent::Comment(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_replaces_in_place() {
        let mut node = HostNode::new("div");
        node.set_attribute("a", "1");
        node.set_attribute("b", "2");
        node.set_attribute("a", "3");
        let attrs: Vec<_> = node.attributes().collect();
        assert_eq!(attrs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn data_reads_prefixed_attribute() {
        let mut node = HostNode::new("div");
        node.set_attribute("data-foo", "I'm real!");
        assert_eq!(node.data("foo"), Some("I'm real!"));
        assert_eq!(node.data("bar"), None);
    }

    #[test]
    fn remove_attribute_returns_value() {
        let mut node = HostNode::new("div");
        node.set_attribute("x", "1");
        assert_eq!(node.remove_attribute("x").as_deref(), Some("1"));
        assert_eq!(node.attribute("x"), None);
    }

    #[test]
    fn add_class_is_deduplicated() {
        let mut node = HostNode::new("div");
        node.add_class("pam-Widget");
        node.add_class("pam-Panel");
        node.add_class("pam-Widget");
        assert_eq!(node.attribute("class"), Some("pam-Widget pam-Panel"));
        assert!(node.has_class("pam-Panel"));
    }

    #[test]
    fn remove_class_keeps_others() {
        let mut node = HostNode::new("div");
        node.add_class("a");
        node.add_class("b");
        node.remove_class("a");
        assert_eq!(node.attribute("class"), Some("b"));
        node.remove_class("b");
        assert_eq!(node.attribute("class"), None);
        node.remove_class("missing");
    }

    #[test]
    fn text_content_skips_comments() {
        let mut child = HostNode::new("span");
        child.append_text("world");
        let mut node = HostNode::new("div");
        node.append_text("Hello, ");
        node.append_comment("ignored");
        node.append_child(child);
        assert_eq!(node.text_content(), "Hello, world");
    }
}
