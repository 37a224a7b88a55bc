pub mod box_panel;
pub mod panel;
pub mod split_panel;
pub mod tab_panel;
pub mod wrapper;

pub use box_panel::BoxPanel;
pub use panel::{Panel, StackedPanel, WidgetList};
pub use split_panel::SplitPanel;
pub use tab_panel::TabPanel;
pub use wrapper::{dom_wrapper, DomWrapper};
