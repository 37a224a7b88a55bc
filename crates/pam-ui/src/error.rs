use std::fmt;

use pam_markup::ParseError;
use thiserror::Error;

/// Which registry table an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Widget,
    Property,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Widget => f.write_str("widget"),
            EntryKind::Property => f.write_str("property"),
        }
    }
}

/// Errors returned by [`WidgetFactory`](crate::registry::WidgetFactory).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{kind} '{name}' is already registered")]
    DuplicateName { kind: EntryKind, name: String },

    #[error("property name '{name}' must begin with an uppercase letter")]
    InvalidName { name: String },

    #[error("{kind} '{name}' not recognized")]
    UnknownName { kind: EntryKind, name: String },
}

/// A setter rejected the string it was given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value '{value}': {reason}")]
pub struct PropertyError {
    pub value: String,
    pub reason: String,
}

impl PropertyError {
    pub fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { value: value.into(), reason: reason.into() }
    }
}

/// Errors returned by [`MarkupLoader`](crate::loader::MarkupLoader).
///
/// When raised below the root element these are downgraded to
/// [`Diagnostic::ChildFailed`](crate::loader::Diagnostic::ChildFailed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to set property '{name}': {source}")]
    Property {
        name: String,
        #[source]
        source: PropertyError,
    },

    #[error("maximum nesting depth ({max_depth}) exceeded")]
    DepthExceeded { max_depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_messages() {
        let dup = RegistryError::DuplicateName { kind: EntryKind::Widget, name: "Foo".into() };
        assert_eq!(dup.to_string(), "widget 'Foo' is already registered");

        let unknown = RegistryError::UnknownName { kind: EntryKind::Property, name: "Bar".into() };
        assert_eq!(unknown.to_string(), "property 'Bar' not recognized");

        let invalid = RegistryError::InvalidName { name: "foo".into() };
        assert!(invalid.to_string().contains("uppercase letter"));
    }

    #[test]
    fn load_error_wraps_sources() {
        let err: LoadError = RegistryError::InvalidName { name: "x".into() }.into();
        assert!(matches!(err, LoadError::Registry(_)));

        let prop = LoadError::Property {
            name: "BoxLayout.Stretch".into(),
            source: PropertyError::new("wide", "expected a number"),
        };
        assert_eq!(
            prop.to_string(),
            "failed to set property 'BoxLayout.Stretch': invalid value 'wide': expected a number"
        );
        let source = std::error::Error::source(&prop).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("invalid value 'wide': expected a number"));
    }
}
