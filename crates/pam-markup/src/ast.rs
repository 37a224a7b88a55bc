use crate::error::ParseError;

// ── Attribute ─────────────────────────────────────────────────────────────

/// A single `name="value"` pair on an element, value already entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A child node inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data; CDATA sections are folded into text.
    Text(String),
    Comment(String),
    /// `<?target data?>` inside element content.
    ProcessingInstruction { target: String, data: String },
    /// In-band error marker emitted by [`ParseMode::Recover`](crate::ParseMode::Recover)
    /// in place of a document that failed to parse.
    ParserError(ParseError),
}

impl Node {
    /// Short, stable name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Comment(_) => "comment",
            Node::ProcessingInstruction { .. } => "processing-instruction",
            Node::ParserError(_) => "parser-error",
        }
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// An element node.
///
/// ```xml
/// <BoxPanel BoxLayout.Stretch="1" data-role="sidebar">
///     <Label>Hello</Label>
/// </BoxPanel>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name exactly as written: `"BoxPanel"`, `"Label"`.
    pub name: String,
    /// Attributes in source order. Names are unique per element.
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), children: Vec::new() }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|a| a.name == name).map(|a| a.value.as_str())
    }

    /// Iterate over the element children only, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// First embedded parser-error marker in this subtree, in document order.
    pub fn first_error(&self) -> Option<&ParseError> {
        let mut stack = vec![self.children.iter()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(Node::ParserError(e)) => return Some(e),
                Some(Node::Element(child)) => stack.push(child.children.iter()),
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }
        None
    }
}

fn collect_text(el: &Element, out: &mut String) {
    let mut stack = vec![el.children.iter()];
    while let Some(iter) = stack.last_mut() {
        match iter.next() {
            Some(Node::Text(t)) => out.push_str(t),
            Some(Node::Element(e)) => stack.push(e.children.iter()),
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// The top-level parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// First embedded parser-error marker anywhere in the tree.
    pub fn first_error(&self) -> Option<&ParseError> {
        self.root.first_error()
    }
}
