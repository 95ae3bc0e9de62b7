//! Workspace orchestration on top of the layout engine: persistent frames,
//! the per-tab container, tabs, selection state, theme, and the chrome
//! widgets.

pub mod container;
pub mod frame;
pub mod selection;
pub mod theme;
pub mod widgets;
pub mod workspace;

pub use container::Container;
pub use frame::{ChartSurface, Frame};
pub use selection::Selection;
pub use theme::{parse_color, Theme};
pub use workspace::{Tab, Workspace};
