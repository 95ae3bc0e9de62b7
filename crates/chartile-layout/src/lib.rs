//! The layout/partition engine: a fixed catalog of named frame layouts,
//! a resolver that turns flex proportions into pixel rectangles, and the
//! drag resolvers that redistribute proportions when a separator is moved.
//!
//! This crate is deliberately free of any UI dependency. It works in an
//! abstract pixel space; a host binds the resolved rectangles to whatever
//! rendering target it uses.

pub mod catalog;
pub mod drag;
pub mod geometry;
pub mod node;
pub mod resolve;

pub use catalog::{build_layout, frame_count, Layout};
pub use drag::{drag_horizontal, drag_vertical};
pub use geometry::{Point, Rect};
pub use node::{FlexNode, NodeId, NodeKind, Orientation};
pub use resolve::{resolve, visual_origin};

/// Fixed pixel thickness of a separator's hit area.
pub const RESIZE_HANDLE_PX: i32 = 6;

/// Half the handle thickness; a painted separator is shifted back by this
/// much so the hit area straddles the boundary it sits on.
pub const HALF_HANDLE_PX: i32 = 3;

/// Smallest width share a frame can be dragged down to.
pub const MIN_FRAME_WIDTH: f64 = 0.15;

/// Smallest height share a frame can be dragged down to.
pub const MIN_FRAME_HEIGHT: f64 = 0.10;
