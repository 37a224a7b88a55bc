//! Parser and element tree for **PAM markup**, the XML the widget loader
//! consumes.
//!
//! Parsing is delegated to `roxmltree`, which enforces well-formedness and
//! namespace rules. The result is converted into an owned tree with no
//! widget or host code attached, so tooling can share it.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Element`, `Node`, `Attribute` |
//! | [`error`] | `ParseError` |
//! | [`parser`] | `parse_str` / `parse_with` entry points, `ParseMode`, nesting limit |
//!
//! # Quick start
//!
//! ```rust
//! use pam_markup::parse_str;
//!
//! let src = r#"
//!     <BoxPanel BoxLayout.Stretch="1">
//!         <Label data-role="title">Hello</Label>
//!     </BoxPanel>
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.name, "BoxPanel");
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{Attribute, Document, Element, Node};
pub use error::ParseError;
pub use parser::{parse_str, parse_with, ParseMode, MAX_NESTING_DEPTH, PARSER_ERROR_TAG};
