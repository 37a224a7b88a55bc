//! PAM UI — a widget registry and a loader that turns markup into widget trees.
//!
//! # Quick start
//!
//! ```rust
//! use pam_ui::prelude::*;
//!
//! let root = load_markup(r#"
//!     <BoxPanel data-direction="left-to-right">
//!         <Label BoxLayout.Stretch="1">Name</Label>
//!         <Image src="avatar.png" />
//!     </BoxPanel>
//! "#).unwrap();
//!
//! assert!(root.is::<BoxPanel>());
//! assert_eq!(root.children().len(), 2);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) and register a constructor, then use
//! the tag name in markup:
//!
//! ```rust
//! use pam_ui::prelude::*;
//!
//! pub struct Toolbar { base: WidgetBase }
//!
//! impl Default for Toolbar {
//!     fn default() -> Self { Self { base: WidgetBase::new("nav").with_class("my-Toolbar") } }
//! }
//!
//! impl Widget for Toolbar {
//!     fn base(&self) -> &WidgetBase { &self.base }
//!     fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//! }
//!
//! let mut factory = WidgetFactory::with_defaults();
//! factory.register_widget_type::<Toolbar>("Toolbar").unwrap();
//!
//! let root = MarkupLoader::new(&factory).load("<Toolbar>Tools</Toolbar>").unwrap();
//! assert_eq!(root.outer_html(), r#"<nav class="pam-Widget my-Toolbar">Tools</nav>"#);
//! ```

pub mod builtin;
pub mod error;
pub mod loader;
pub mod property;
pub mod registry;
pub mod widget;
pub mod widgets;

pub use error::{EntryKind, LoadError, PropertyError, RegistryError};
pub use loader::{load_markup, MarkupLoader};
pub use registry::WidgetFactory;

/// Everything needed to register widgets and load markup.
pub mod prelude {
    pub use crate::error::{EntryKind, LoadError, PropertyError, RegistryError};
    pub use crate::loader::{load_markup, Diagnostic, LoadReport, LoaderConfig, MarkupLoader, Severity};
    pub use crate::property::{AttachedProperty, FnProperty, ParsedProperty, StoredProperty};
    pub use crate::registry::WidgetFactory;
    pub use crate::widget::{ChildContainer, Element, Widget, WidgetBase};
    pub use crate::widgets::{
        BoxPanel, DomWrapper, Panel, SplitPanel, StackedPanel, TabPanel,
    };

    pub use pam_host::HostNode;
    pub use pam_markup::ParseMode;
}
