use super::*;
use crate::catalog::{build_layout, Layout};
use crate::geometry::Rect;
use crate::resolve::resolve;

const EPS: f64 = 1e-12;

fn resolved(layout: Layout, width: f64, height: f64) -> Vec<FlexNode> {
    let mut nodes = build_layout(layout);
    resolve(width, height, &mut nodes);
    nodes
}

#[test]
fn pointer_far_left_clamps_to_minimum_width_exactly() {
    let mut nodes = resolved(Layout::DoubleVert, 1000.0, 500.0);
    let changed = drag_horizontal(&mut nodes, 1, 0.0, -10_000.0);
    assert!(changed);
    assert_eq!(nodes[0].flex_width, MIN_FRAME_WIDTH);
    assert!((nodes[2].flex_width - (1.0 - MIN_FRAME_WIDTH)).abs() < EPS);
}

#[test]
fn pointer_far_right_clamps_the_other_side() {
    let mut nodes = resolved(Layout::DoubleVert, 1000.0, 500.0);
    drag_horizontal(&mut nodes, 1, 0.0, 10_000.0);
    assert_eq!(nodes[2].flex_width, MIN_FRAME_WIDTH);
    assert!((nodes[0].flex_width - (1.0 - MIN_FRAME_WIDTH)).abs() < EPS);
}

#[test]
fn five_percent_request_clamps_to_minimum() {
    let mut nodes = resolved(Layout::DoubleVert, 1000.0, 500.0);
    let width_total = (nodes[0].rect.width + nodes[2].rect.width) as f64;
    drag_horizontal(&mut nodes, 1, 0.0, 0.05 * width_total);
    assert_eq!(nodes[0].flex_width, MIN_FRAME_WIDTH);
    assert!((nodes[2].flex_width - 0.85).abs() < EPS);
}

#[test]
fn vertical_drag_clamps_to_minimum_height() {
    let mut nodes = resolved(Layout::DoubleHoriz, 1000.0, 500.0);
    drag_vertical(&mut nodes, 1, 0.0, -10_000.0);
    assert_eq!(nodes[0].flex_height, MIN_FRAME_HEIGHT);
    assert!((nodes[2].flex_height - (1.0 - MIN_FRAME_HEIGHT)).abs() < EPS);
}

#[test]
fn combined_share_is_preserved_across_a_drag() {
    let mut nodes = resolved(Layout::TripleVert, 1200.0, 600.0);
    let before = nodes[0].flex_width + nodes[2].flex_width;
    drag_horizontal(&mut nodes, 1, 0.0, 511.0);
    let after = nodes[0].flex_width + nodes[2].flex_width;
    assert!((before - after).abs() < EPS);
    // The third column never participates in this separator's drag.
    assert!((nodes[4].flex_width - 1.0 / 3.0).abs() < EPS);
}

#[test]
fn container_origin_offsets_the_pointer() {
    // The same physical pointer position must produce the same split
    // regardless of where the container sits on screen.
    let mut at_origin = resolved(Layout::DoubleVert, 1000.0, 500.0);
    let mut offset = resolved(Layout::DoubleVert, 1000.0, 500.0);
    drag_horizontal(&mut at_origin, 1, 0.0, 700.0);
    drag_horizontal(&mut offset, 1, 300.0, 1000.0);
    assert!((at_origin[0].flex_width - offset[0].flex_width).abs() < EPS);
}

#[test]
fn dragging_the_main_divider_rescales_the_whole_nested_side() {
    let mut nodes = resolved(Layout::TripleVertLeft, 1000.0, 500.0);
    // Request 70% for the left frame.
    drag_horizontal(&mut nodes, 1, 0.0, 700.7);

    let left = nodes[0].flex_width;
    assert!((left - 0.7).abs() < 0.01, "left share was {left}");
    // All three right-side nodes carry the complementary share: both
    // frames and the nested separator's span.
    for id in [2usize, 3, 4] {
        assert!((nodes[id].flex_width - (1.0 - left)).abs() < EPS, "node {id}");
    }
    // The nested split ratio is untouched.
    assert_eq!(nodes[2].flex_height, 0.5);
    assert_eq!(nodes[4].flex_height, 0.5);

    // After re-resolving, the nested separator tracks the narrower side.
    resolve(1000.0, 500.0, &mut nodes);
    assert_eq!(nodes[3].rect.left, nodes[2].rect.left);
    assert_eq!(nodes[3].rect.width, ((1.0 - left) * 1000.0_f64).round() as i32);
}

#[test]
fn nested_drag_stays_inside_its_own_side() {
    let mut nodes = resolved(Layout::QuadLeft, 1000.0, 600.0);
    // Drag the first nested split in the right column.
    drag_vertical(&mut nodes, 3, 0.0, 90.0);

    // Only the top and middle right frames traded height.
    assert!((nodes[2].flex_height + nodes[4].flex_height - 2.0 / 3.0).abs() < EPS);
    assert!((nodes[6].flex_height - 1.0 / 3.0).abs() < EPS);
    // Widths are untouched everywhere.
    assert_eq!(nodes[0].flex_width, 0.5);
    assert_eq!(nodes[2].flex_width, 0.5);
}

#[test]
fn drags_are_stateless_per_event() {
    // Re-sending the same pointer position must not move anything further:
    // the split is recomputed from absolute positions, not integrated from
    // deltas.
    let mut nodes = resolved(Layout::DoubleVert, 1000.0, 500.0);

    drag_horizontal(&mut nodes, 1, 0.0, 622.0);
    resolve(1000.0, 500.0, &mut nodes);
    let first: (Vec<f64>, Vec<Rect>) =
        (nodes.iter().map(|n| n.flex_width).collect(), nodes.iter().map(|n| n.rect).collect());

    drag_horizontal(&mut nodes, 1, 0.0, 622.0);
    resolve(1000.0, 500.0, &mut nodes);
    let second: (Vec<f64>, Vec<Rect>) =
        (nodes.iter().map(|n| n.flex_width).collect(), nodes.iter().map(|n| n.rect).collect());

    assert_eq!(first, second);
}

#[test]
fn unmoved_pointer_reports_no_change() {
    let mut nodes = resolved(Layout::DoubleVert, 1000.0, 500.0);
    drag_horizontal(&mut nodes, 1, 0.0, 622.0);
    resolve(1000.0, 500.0, &mut nodes);
    assert!(!drag_horizontal(&mut nodes, 1, 0.0, 622.0));
}
