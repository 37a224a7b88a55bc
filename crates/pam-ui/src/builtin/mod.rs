//! The default widgets and attached properties.

pub mod layout;

use crate::error::RegistryError;
use crate::registry::WidgetFactory;
use crate::widgets::{dom_wrapper, BoxPanel, Panel, SplitPanel, StackedPanel, TabPanel};

/// Register the built-in widgets and layout properties into `factory`.
///
/// Fails with the first registration error, e.g. when `factory` already
/// holds one of the names.
pub fn register_defaults(factory: &mut WidgetFactory) -> Result<(), RegistryError> {
    factory.register_widget("Image", dom_wrapper("img"))?;
    factory.register_widget("Label", dom_wrapper("label"))?;
    factory.register_widget_type::<Panel>("Panel")?;
    factory.register_widget_type::<BoxPanel>("BoxPanel")?;
    factory.register_widget_type::<SplitPanel>("SplitPanel")?;
    factory.register_widget_type::<StackedPanel>("StackedPanel")?;
    factory.register_widget_type::<TabPanel>("TabPanel")?;

    factory.register_property("Layout.HorizontalAlignment", &layout::HORIZONTAL_ALIGNMENT)?;
    factory.register_property("Layout.VerticalAlignment", &layout::VERTICAL_ALIGNMENT)?;
    factory.register_property("BoxLayout.SizeBasis", &layout::BOX_SIZE_BASIS)?;
    factory.register_property("BoxLayout.Stretch", &layout::BOX_STRETCH)?;
    factory.register_property("SplitLayout.Stretch", &layout::SPLIT_STRETCH)?;
    Ok(())
}
