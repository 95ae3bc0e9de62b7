pub mod layout_switcher;
pub mod status_bar;
pub mod tab_bar;

pub use layout_switcher::{filter_layouts, LayoutSwitcherWidget};
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
