//! Name → capability registry for widgets and attached properties.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::builtin::register_defaults;
use crate::error::{EntryKind, RegistryError};
use crate::property::{is_attached_name, AttachedProperty};
use crate::widget::{Element, Widget};

/// A no-argument widget constructor.
pub type WidgetCtor = Box<dyn Fn() -> Element + Send + Sync>;

/// Process-wide default registry, populated with the built-ins on first use.
static GLOBAL: LazyLock<RwLock<WidgetFactory>> =
    LazyLock::new(|| RwLock::new(WidgetFactory::with_defaults()));

// ── WidgetFactory ─────────────────────────────────────────────────────────

/// Two independent tables: widget constructors and attached properties.
///
/// Entries are write-once: there is no way to replace or remove a name.
#[derive(Default)]
pub struct WidgetFactory {
    ctors: HashMap<String, WidgetCtor>,
    props: HashMap<String, Box<dyn AttachedProperty>>,
}

impl WidgetFactory {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding everything [`register_defaults`] provides.
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        if let Err(e) = register_defaults(&mut factory) {
            log::error!("failed to register default widgets: {e}");
        }
        factory
    }

    /// Read access to the process-wide registry.
    ///
    /// Do not call [`global_mut`](Self::global_mut) on the same thread while
    /// the returned guard is alive.
    pub fn global() -> RwLockReadGuard<'static, WidgetFactory> {
        GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the process-wide registry, for registering
    /// application widgets before the first load.
    pub fn global_mut() -> RwLockWriteGuard<'static, WidgetFactory> {
        GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a widget constructor under the tag name `name`.
    ///
    /// The name is used verbatim; matching is case-sensitive.
    pub fn register_widget<F>(&mut self, name: impl Into<String>, ctor: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Element + Send + Sync + 'static,
    {
        let name = name.into();
        if self.ctors.contains_key(&name) {
            return Err(RegistryError::DuplicateName { kind: EntryKind::Widget, name });
        }
        log::debug!("registered widget '{name}'");
        self.ctors.insert(name, Box::new(ctor));
        Ok(())
    }

    /// Register `W::default()` as the constructor for `name`.
    pub fn register_widget_type<W>(&mut self, name: impl Into<String>) -> Result<(), RegistryError>
    where
        W: Widget + Default,
    {
        self.register_widget(name, || W::default().into())
    }

    /// Register an attached property.
    ///
    /// Names must begin with an uppercase letter so the loader can tell them
    /// apart from host attributes. They may contain dots
    /// (`BoxLayout.Stretch`).
    pub fn register_property<P>(&mut self, name: impl Into<String>, prop: P) -> Result<(), RegistryError>
    where
        P: AttachedProperty + 'static,
    {
        let name = name.into();
        if self.props.contains_key(&name) {
            return Err(RegistryError::DuplicateName { kind: EntryKind::Property, name });
        }
        if !is_attached_name(&name) {
            return Err(RegistryError::InvalidName { name });
        }
        log::debug!("registered property '{name}'");
        self.props.insert(name, Box::new(prop));
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Build a fresh instance of the widget registered as `name`.
    pub fn create_widget(&self, name: &str) -> Result<Element, RegistryError> {
        let ctor = self.ctors.get(name).ok_or_else(|| RegistryError::UnknownName {
            kind: EntryKind::Widget,
            name: name.to_string(),
        })?;
        Ok(ctor())
    }

    /// The accessor registered as `name`.
    pub fn get_property(&self, name: &str) -> Result<&dyn AttachedProperty, RegistryError> {
        self.props
            .get(name)
            .map(|p| &**p)
            .ok_or_else(|| RegistryError::UnknownName {
                kind: EntryKind::Property,
                name: name.to_string(),
            })
    }

    pub fn has_widget(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Registered widget names, sorted.
    pub fn widget_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.ctors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered property names, sorted.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.props.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::StoredProperty;
    use crate::widget::WidgetBase;
    use crate::widgets::panel::Panel;

    struct Dummy {
        base: WidgetBase,
    }

    impl Default for Dummy {
        fn default() -> Self {
            Self { base: WidgetBase::new("div") }
        }
    }

    impl Widget for Dummy {
        fn base(&self) -> &WidgetBase { &self.base }
        fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
    }

    #[test]
    fn global_factory_has_defaults() {
        let global = WidgetFactory::global();
        assert!(global.has_widget("Panel"));
        assert!(global.has_property("BoxLayout.Stretch"));
    }

    #[test]
    fn register_and_create() {
        let mut f = WidgetFactory::new();
        f.register_widget_type::<Dummy>("Foo").unwrap();
        let instance = f.create_widget("Foo").unwrap();
        assert!(instance.is::<Dummy>());
    }

    #[test]
    fn create_returns_distinct_instances() {
        let mut f = WidgetFactory::new();
        f.register_widget_type::<Dummy>("Foo").unwrap();
        let a = f.create_widget("Foo").unwrap();
        let b = f.create_widget("Foo").unwrap();
        assert!(!std::ptr::addr_eq(a.widget(), b.widget()));
    }

    #[test]
    fn duplicate_widget_keeps_first_entry() {
        let mut f = WidgetFactory::new();
        f.register_widget_type::<Dummy>("Foo").unwrap();
        let err = f.register_widget_type::<Panel>("Foo").unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName { kind: EntryKind::Widget, name: "Foo".into() });
        assert!(err.to_string().contains("already registered"));
        assert!(f.create_widget("Foo").unwrap().is::<Dummy>());
    }

    #[test]
    fn unknown_widget() {
        let err = WidgetFactory::new().create_widget("test").unwrap_err();
        assert!(err.to_string().contains("not recognized"));
        assert!(matches!(err, RegistryError::UnknownName { kind: EntryKind::Widget, .. }));
    }

    #[test]
    fn widget_names_are_not_validated() {
        let mut f = WidgetFactory::new();
        f.register_widget_type::<Dummy>("lower-case.name").unwrap();
        assert!(f.has_widget("lower-case.name"));
    }

    #[test]
    fn register_and_get_property() {
        let mut f = WidgetFactory::new();
        f.register_property("Foo", StoredProperty::new("foo").with_default("x")).unwrap();
        let prop = f.get_property("Foo").unwrap();
        let mut w = Dummy::default();
        prop.set(&mut w, "y").unwrap();
        assert_eq!(prop.get(&w).as_deref(), Some("y"));
    }

    #[test]
    fn lowercase_property_rejected_and_registry_unchanged() {
        let mut f = WidgetFactory::new();
        let err = f.register_property("foo", StoredProperty::new("foo")).unwrap_err();
        assert_eq!(err, RegistryError::InvalidName { name: "foo".into() });
        assert!(f.property_names().is_empty());
        f.register_property("", StoredProperty::new("empty")).unwrap_err();
    }

    #[test]
    fn duplicate_property_rejected() {
        let mut f = WidgetFactory::new();
        f.register_property("Test", StoredProperty::new("a")).unwrap();
        let err = f.register_property("Test", StoredProperty::new("b")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { kind: EntryKind::Property, .. }));
    }

    #[test]
    fn widget_and_property_tables_are_independent() {
        let mut f = WidgetFactory::new();
        f.register_widget_type::<Dummy>("Same").unwrap();
        f.register_property("Same", StoredProperty::new("same")).unwrap();
        assert!(f.get_property("Dummy").is_err());
        assert_eq!(f.widget_names(), ["Same"]);
        assert_eq!(f.property_names(), ["Same"]);
    }
}
