//! The editor's surfaces. Each panel reads the model and returns the
//! commands its widgets produced this frame; the app applies them afterwards.

mod central_panel;
mod properties;
mod sidebar;
mod spread_strip;
mod top_bar;

pub use central_panel::{CanvasState, central_panel};
pub use properties::element_toolbar;
pub use sidebar::{SidebarState, SidebarTab, TemplateTab, sidebar};
pub use spread_strip::spread_strip;
pub use top_bar::top_bar;
