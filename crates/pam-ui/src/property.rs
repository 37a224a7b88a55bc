//! Attached properties: named get/set capabilities applied to any widget.
//!
//! Markup attributes whose name starts with an uppercase letter are routed
//! to the [`AttachedProperty`] registered under that name. Values cross the
//! markup boundary as strings; implementations are free to store a typed
//! value and render it back in [`get`](AttachedProperty::get).

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::error::PropertyError;
use crate::widget::Widget;

// ── AttachedProperty ──────────────────────────────────────────────────────

pub trait AttachedProperty: Send + Sync {
    /// Current value on `owner`, or `None` if unset and there is no default.
    fn get(&self, owner: &dyn Widget) -> Option<String>;

    /// Store `value` on `owner`.
    fn set(&self, owner: &mut dyn Widget, value: &str) -> Result<(), PropertyError>;
}

/// Lets `static` property definitions be registered by reference while
/// remaining usable from typed helper functions.
impl<P: AttachedProperty + ?Sized> AttachedProperty for &'static P {
    fn get(&self, owner: &dyn Widget) -> Option<String> {
        (**self).get(owner)
    }

    fn set(&self, owner: &mut dyn Widget, value: &str) -> Result<(), PropertyError> {
        (**self).set(owner, value)
    }
}

/// `true` if `name` routes to an attached property rather than a host attribute.
///
/// The first character must be an uppercase letter. Names starting with a
/// digit, `_` or `:` have no case and are treated as host attributes, even
/// though a "first char equals its uppercase form" test would accept them.
pub fn is_attached_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

// ── PropertyStore ─────────────────────────────────────────────────────────

/// Per-widget storage for attached-property values, keyed by property key.
#[derive(Default)]
pub struct PropertyStore(HashMap<String, Box<dyn Any>>);

impl PropertyStore {
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.0.insert(key.into(), Box::new(value));
    }

    /// The value under `key`, if present and of type `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.0.get(key)?.downcast_ref::<T>()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.0.keys().collect();
        keys.sort();
        f.debug_set().entries(keys).finish()
    }
}

// ── FnProperty ────────────────────────────────────────────────────────────

/// A property built from a getter/setter closure pair.
///
/// ```rust
/// use pam_ui::prelude::*;
///
/// let title = FnProperty::new(
///     |w: &dyn Widget| w.base().node().attribute("title").map(str::to_string),
///     |w: &mut dyn Widget, v: &str| {
///         w.base_mut().node_mut().set_attribute("title", v);
///         Ok(())
///     },
/// );
/// let mut factory = WidgetFactory::new();
/// factory.register_property("Title", title).unwrap();
/// ```
pub struct FnProperty<G, S> {
    get: G,
    set: S,
}

impl<G, S> FnProperty<G, S>
where
    G: Fn(&dyn Widget) -> Option<String> + Send + Sync,
    S: Fn(&mut dyn Widget, &str) -> Result<(), PropertyError> + Send + Sync,
{
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<G, S> AttachedProperty for FnProperty<G, S>
where
    G: Fn(&dyn Widget) -> Option<String> + Send + Sync,
    S: Fn(&mut dyn Widget, &str) -> Result<(), PropertyError> + Send + Sync,
{
    fn get(&self, owner: &dyn Widget) -> Option<String> {
        (self.get)(owner)
    }

    fn set(&self, owner: &mut dyn Widget, value: &str) -> Result<(), PropertyError> {
        (self.set)(owner, value)
    }
}

// ── StoredProperty ────────────────────────────────────────────────────────

/// A string-valued property stored on each widget under a private key.
#[derive(Debug, Clone)]
pub struct StoredProperty {
    key: String,
    default: Option<String>,
}

impl StoredProperty {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), default: None }
    }

    /// Value reported by `get` for widgets that never had the property set.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl AttachedProperty for StoredProperty {
    fn get(&self, owner: &dyn Widget) -> Option<String> {
        owner
            .base()
            .properties()
            .get::<String>(&self.key)
            .cloned()
            .or_else(|| self.default.clone())
    }

    fn set(&self, owner: &mut dyn Widget, value: &str) -> Result<(), PropertyError> {
        owner.base_mut().properties_mut().insert(self.key.clone(), value.to_string());
        Ok(())
    }
}

// ── ParsedProperty ────────────────────────────────────────────────────────

/// A typed property: strings are parsed on `set`, rendered with `Display`
/// on `get`, and stored as `T`.
pub struct ParsedProperty<T> {
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, String>,
}

impl<T> ParsedProperty<T>
where
    T: Any + Clone + fmt::Display + Send + Sync,
{
    pub const fn new(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> Self {
        Self { key, default, parse }
    }

    /// Typed value on `owner`, falling back to the default.
    pub fn value(&self, owner: &dyn Widget) -> T {
        owner
            .base()
            .properties()
            .get::<T>(self.key)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    pub fn set_value(&self, owner: &mut dyn Widget, value: T) {
        owner.base_mut().properties_mut().insert(self.key, value);
    }
}

impl<T> AttachedProperty for ParsedProperty<T>
where
    T: Any + Clone + fmt::Display + Send + Sync,
{
    fn get(&self, owner: &dyn Widget) -> Option<String> {
        Some(self.value(owner).to_string())
    }

    fn set(&self, owner: &mut dyn Widget, value: &str) -> Result<(), PropertyError> {
        let parsed = (self.parse)(value).map_err(|reason| PropertyError::new(value, reason))?;
        self.set_value(owner, parsed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::wrapper::DomWrapper;

    fn widget() -> DomWrapper {
        DomWrapper::new("label")
    }

    #[test]
    fn attached_names_start_uppercase() {
        assert!(is_attached_name("Stretch"));
        assert!(is_attached_name("BoxLayout.Stretch"));
        assert!(!is_attached_name("data-foo"));
        assert!(!is_attached_name("_private"));
        assert!(!is_attached_name("1abc"));
        assert!(!is_attached_name(":ns"));
        assert!(is_attached_name("Ärger"));
        assert!(!is_attached_name(""));
    }

    #[test]
    fn stored_property_default_then_set() {
        let prop = StoredProperty::new("answer").with_default("42");
        let mut w = widget();
        assert_eq!(prop.get(&w).as_deref(), Some("42"));
        prop.set(&mut w, "56").unwrap();
        assert_eq!(prop.get(&w).as_deref(), Some("56"));
    }

    #[test]
    fn stored_property_without_default_is_none() {
        let prop = StoredProperty::new("answer");
        assert_eq!(prop.get(&widget()), None);
    }

    #[test]
    fn stored_properties_are_per_widget() {
        let prop = StoredProperty::new("answer");
        let mut a = widget();
        let b = widget();
        prop.set(&mut a, "x").unwrap();
        assert_eq!(prop.get(&b), None);
    }

    #[test]
    fn fn_property_delegates() {
        let prop = FnProperty::new(
            |w: &dyn Widget| w.base().node().attribute("title").map(str::to_string),
            |w: &mut dyn Widget, v: &str| {
                if v.is_empty() {
                    return Err(PropertyError::new(v, "empty title"));
                }
                w.base_mut().node_mut().set_attribute("title", v);
                Ok(())
            },
        );
        let mut w = widget();
        prop.set(&mut w, "hello").unwrap();
        assert_eq!(prop.get(&w).as_deref(), Some("hello"));
        assert_eq!(prop.set(&mut w, "").unwrap_err().reason, "empty title");
    }

    #[test]
    fn parsed_property_round_trips_through_display() {
        static SIZE: ParsedProperty<u32> =
            ParsedProperty::new("size", 7, |s| s.trim().parse().map_err(|_| "not a number".into()));
        let mut w = widget();
        assert_eq!(SIZE.value(&w), 7);
        SIZE.set(&mut w, " 12 ").unwrap();
        assert_eq!(SIZE.value(&w), 12);
        assert_eq!(SIZE.get(&w).as_deref(), Some("12"));
        let err = SIZE.set(&mut w, "big").unwrap_err();
        assert_eq!(err.value, "big");
        assert_eq!(SIZE.value(&w), 12);
    }

    #[test]
    fn store_rejects_wrong_type() {
        let mut store = PropertyStore::default();
        store.insert("k", 5u32);
        assert_eq!(store.get::<u32>("k"), Some(&5));
        assert_eq!(store.get::<String>("k"), None);
        assert!(store.remove("k"));
        assert!(store.is_empty());
    }
}
