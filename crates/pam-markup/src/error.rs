use std::fmt;

use roxmltree::TextPos;

/// A well-formedness error in PAM markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn at(pos: TextPos, msg: impl Into<String>) -> Self {
        Self { message: msg.into(), line: pos.row as usize, col: pos.col as usize }
    }
}

/// roxmltree appends " at row:col" to its messages; the position is kept in
/// `line`/`col` instead so `Display` does not repeat it.
impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        let full = err.to_string();
        let message = full
            .strip_suffix(&format!(" at {pos}"))
            .unwrap_or(full.as_str())
            .to_string();
        Self::at(pos, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "markup parse error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_not_repeated_in_message() {
        let xml_err = roxmltree::Document::parse("<a>").unwrap_err();
        let e = ParseError::from(xml_err);
        assert!(!e.message.ends_with(&format!(" at {}:{}", e.line, e.col)));
        assert!(e.to_string().starts_with(&format!("markup parse error at {}:{}: ", e.line, e.col)));
    }
}
