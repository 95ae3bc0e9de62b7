use crate::geometry::Rect;
use crate::node::{FlexNode, NodeKind, Orientation};
use crate::{HALF_HANDLE_PX, RESIZE_HANDLE_PX};

/// Convert flex proportions into absolute pixel rectangles.
///
/// Nodes are resolved in list order; the catalog guarantees a node's
/// `resize_pos` references only already-resolved nodes. Each node rounds
/// independently from its own flex fraction and its referenced neighbor
/// rect — fractional drift across nodes is accepted, not redistributed.
///
/// A non-positive container size is a valid transient state (hidden or
/// collapsed host): the resolver returns without touching any rect.
pub fn resolve(container_width: f64, container_height: f64, nodes: &mut [FlexNode]) {
    if container_width <= 0.0 || container_height <= 0.0 {
        return;
    }

    for i in 0..nodes.len() {
        let rect = match nodes[i].kind {
            NodeKind::Frame => resolve_frame(container_width, container_height, nodes, i),
            NodeKind::Separator(Orientation::Vertical) => resolve_vertical_separator(container_height, nodes, i),
            NodeKind::Separator(Orientation::Horizontal) => resolve_horizontal_separator(container_width, nodes, i),
        };
        nodes[i].rect = rect;
    }
}

fn resolve_frame(container_width: f64, container_height: f64, nodes: &[FlexNode], i: usize) -> Rect {
    let node = &nodes[i];
    let mut width = px(container_width * node.flex_width);
    let mut height = px(container_height * node.flex_height);
    let mut left = 0;
    let mut top = 0;

    // A frame reads its own top/left from the separator(s) it sits after:
    // a corner frame references one per axis.
    for &r in &node.resize_pos {
        debug_assert!(r != i && r < i, "frame references an unresolved neighbor");
        match nodes[r].kind {
            NodeKind::Separator(Orientation::Vertical) => {
                left = nodes[r].rect.left + RESIZE_HANDLE_PX;
                width = (width - RESIZE_HANDLE_PX).max(0);
            }
            NodeKind::Separator(Orientation::Horizontal) => {
                top = nodes[r].rect.top + RESIZE_HANDLE_PX;
                height = (height - RESIZE_HANDLE_PX).max(0);
            }
            NodeKind::Frame => {}
        }
    }

    Rect { top, left, width, height }
}

fn resolve_vertical_separator(container_height: f64, nodes: &[FlexNode], i: usize) -> Rect {
    let node = &nodes[i];
    let Some(&anchor) = node.resize_pos.first() else {
        debug_assert!(false, "separator has no positive neighbor");
        return node.rect;
    };
    let a = nodes[anchor].rect;
    Rect { top: a.top, left: a.right(), width: RESIZE_HANDLE_PX, height: px(container_height * node.flex_height) }
}

fn resolve_horizontal_separator(container_width: f64, nodes: &[FlexNode], i: usize) -> Rect {
    let node = &nodes[i];
    let Some(&anchor) = node.resize_pos.first() else {
        debug_assert!(false, "separator has no positive neighbor");
        return node.rect;
    };
    let a = nodes[anchor].rect;
    Rect { top: a.bottom(), left: a.left, width: px(container_width * node.flex_width), height: RESIZE_HANDLE_PX }
}

/// Top-left corner to paint a node at. A separator's stored rect sits on
/// the shared edge; painting shifts it back by half a handle so the hit
/// area straddles the visual boundary. Frames paint where they are.
pub fn visual_origin(node: &FlexNode) -> (i32, i32) {
    match node.kind {
        NodeKind::Separator(Orientation::Vertical) => (node.rect.left - HALF_HANDLE_PX, node.rect.top),
        NodeKind::Separator(Orientation::Horizontal) => (node.rect.left, node.rect.top - HALF_HANDLE_PX),
        NodeKind::Frame => (node.rect.left, node.rect.top),
    }
}

fn px(value: f64) -> i32 {
    value.round() as i32
}
