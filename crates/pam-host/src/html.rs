//! HTML serialisation of host nodes.
//!
//! Output follows `outerHTML` conventions: void elements have no end tag,
//! attribute values are double-quoted, text is minimally escaped.

use crate::node::{HostContent, HostNode};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

impl HostNode {
    /// Serialise this node and its content.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_start_tag(&mut out);
        self.write_content(&mut out);
        self.write_end_tag(&mut out);
        out
    }

    /// Serialise only this node's content.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.write_content(&mut out);
        out
    }

    pub fn write_start_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());
        for (name, value) in self.attributes() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        out.push('>');
    }

    pub fn write_content(&self, out: &mut String) {
        if is_void_element(self.tag()) {
            return;
        }
        for item in self.content() {
            match item {
                HostContent::Element(e) => {
                    e.write_start_tag(out);
                    e.write_content(out);
                    e.write_end_tag(out);
                }
                HostContent::Text(t) => escape_into(t, false, out),
                HostContent::Comment(c) => {
                    out.push_str("<!--");
                    out.push_str(c);
                    out.push_str("-->");
                }
            }
        }
    }

    pub fn write_end_tag(&self, out: &mut String) {
        if is_void_element(self.tag()) {
            return;
        }
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

fn escape_into(s: &str, attribute: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}
