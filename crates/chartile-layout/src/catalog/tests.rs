use std::str::FromStr;

use super::*;
use crate::drag::{drag_horizontal, drag_vertical};
use crate::node::NodeKind;
use crate::resolve::resolve;
use crate::{MIN_FRAME_HEIGHT, MIN_FRAME_WIDTH};

const EPS: f64 = 1e-9;

/// Sum of flex_width over all frames whose resolved vertical span contains
/// `y` — i.e. one maximal row of the partition.
fn row_flex_sum(nodes: &[FlexNode], y: i32) -> f64 {
    nodes
        .iter()
        .filter(|n| n.is_frame() && y >= n.rect.top && y < n.rect.bottom())
        .map(|n| n.flex_width)
        .sum()
}

fn column_flex_sum(nodes: &[FlexNode], x: i32) -> f64 {
    nodes
        .iter()
        .filter(|n| n.is_frame() && x >= n.rect.left && x < n.rect.right())
        .map(|n| n.flex_height)
        .sum()
}

/// Resolve at a large container and check that every row and column
/// grouping of frames sums to 1.0 on its axis. The ray is cast through a
/// point strictly inside each frame (a quarter of the way in, so it never
/// lands on another group's separator band).
fn assert_flex_sums(nodes: &mut Vec<FlexNode>) {
    resolve(100_000.0, 100_000.0, nodes);
    let frames: Vec<crate::geometry::Rect> = nodes.iter().filter(|n| n.is_frame()).map(|n| n.rect).collect();
    for rect in frames {
        let sample_y = rect.top + rect.height / 4;
        let sample_x = rect.left + rect.width / 4;
        let row = row_flex_sum(nodes, sample_y);
        let col = column_flex_sum(nodes, sample_x);
        assert!((row - 1.0).abs() < EPS, "row through y={sample_y} sums to {row}");
        assert!((col - 1.0).abs() < EPS, "column through x={sample_x} sums to {col}");
    }
}

#[test]
fn frame_count_matches_built_frames_for_every_layout() {
    for layout in Layout::ALL {
        let nodes = build_layout(layout);
        let built = nodes.iter().filter(|n| n.is_frame()).count();
        assert_eq!(built, frame_count(layout), "{layout:?}");
    }
}

#[test]
fn expected_frame_counts() {
    assert_eq!(frame_count(Layout::Single), 1);
    assert_eq!(frame_count(Layout::DoubleVert), 2);
    assert_eq!(frame_count(Layout::TripleHorizBottom), 3);
    assert_eq!(frame_count(Layout::QuadSqH), 4);
}

#[test]
fn draw_order_alternates_frames_and_separators() {
    for layout in Layout::ALL {
        let nodes = build_layout(layout);
        for (i, node) in nodes.iter().enumerate() {
            if i % 2 == 0 {
                assert!(node.is_frame(), "{layout:?}: node {i} should be a frame");
            } else {
                assert!(node.is_separator(), "{layout:?}: node {i} should be a separator");
            }
        }
        assert_eq!(nodes.len(), 2 * frame_count(layout) - 1, "{layout:?}");
    }
}

#[test]
fn separators_never_reference_themselves_and_have_both_groups() {
    for layout in Layout::ALL {
        let nodes = build_layout(layout);
        for (i, node) in nodes.iter().enumerate() {
            if !node.is_separator() {
                continue;
            }
            assert!(!node.resize_pos.is_empty(), "{layout:?}: separator {i} has no donor group");
            assert!(!node.resize_neg.is_empty(), "{layout:?}: separator {i} has no recipient group");
            assert!(!node.resize_pos.contains(&i) && !node.resize_neg.contains(&i), "{layout:?}: self reference");
        }
    }
}

#[test]
fn resize_pos_references_only_earlier_nodes() {
    // The resolver walks in list order and reads neighbor rects, so every
    // positional reference must already be resolved.
    for layout in Layout::ALL {
        let nodes = build_layout(layout);
        for (i, node) in nodes.iter().enumerate() {
            for &r in &node.resize_pos {
                assert!(r < i, "{layout:?}: node {i} positionally references later node {r}");
            }
        }
    }
}

#[test]
fn separator_flex_lives_on_the_spanned_axis_only() {
    for layout in Layout::ALL {
        for node in build_layout(layout) {
            match node.kind {
                NodeKind::Separator(Orientation::Vertical) => {
                    assert_eq!(node.flex_width, 0.0);
                    assert!(node.flex_height > 0.0);
                }
                NodeKind::Separator(Orientation::Horizontal) => {
                    assert_eq!(node.flex_height, 0.0);
                    assert!(node.flex_width > 0.0);
                }
                NodeKind::Frame => {
                    assert!(node.flex_width > 0.0 && node.flex_height > 0.0);
                }
            }
        }
    }
}

#[test]
fn every_frame_respects_minimum_shares_at_construction() {
    for layout in Layout::ALL {
        for node in build_layout(layout).iter().filter(|n| n.is_frame()) {
            assert!(node.flex_width >= MIN_FRAME_WIDTH - EPS, "{layout:?}");
            assert!(node.flex_height >= MIN_FRAME_HEIGHT - EPS, "{layout:?}");
        }
    }
}

#[test]
fn flex_sums_hold_for_every_layout() {
    for layout in Layout::ALL {
        let mut nodes = build_layout(layout);
        assert_flex_sums(&mut nodes);
    }
}

#[test]
fn flex_sums_hold_after_dragging_every_separator() {
    for layout in Layout::ALL {
        let mut nodes = build_layout(layout);
        resolve(100_000.0, 100_000.0, &mut nodes);

        let separators: Vec<usize> =
            (0..nodes.len()).filter(|&i| nodes[i].is_separator()).collect();
        for sep in separators {
            match nodes[sep].kind {
                NodeKind::Separator(Orientation::Vertical) => {
                    drag_horizontal(&mut nodes, sep, 0.0, 37_000.0);
                }
                NodeKind::Separator(Orientation::Horizontal) => {
                    drag_vertical(&mut nodes, sep, 0.0, 63_000.0);
                }
                NodeKind::Frame => unreachable!(),
            }
            assert_flex_sums(&mut nodes);
        }
    }
}

#[test]
fn quad_left_wires_the_nested_group_onto_the_main_divider() {
    let nodes = build_layout(Layout::QuadLeft);
    assert_eq!(nodes.len(), 7);

    let div = &nodes[1];
    assert_eq!(div.orientation(), Some(Orientation::Vertical));
    assert_eq!(div.resize_pos, vec![0]);
    // The whole right-hand side: three frames plus the two separators
    // nested between them.
    assert_eq!(div.resize_neg.len(), 5);
    let frames = div.resize_neg.iter().filter(|&&id| nodes[id].is_frame()).count();
    let seps = div.resize_neg.iter().filter(|&&id| nodes[id].is_separator()).count();
    assert_eq!((frames, seps), (3, 2));
}

#[test]
fn ordinals_round_trip_and_reject_unknown_values() {
    for (i, layout) in Layout::ALL.iter().enumerate() {
        assert_eq!(layout.ordinal(), i as u8);
        assert_eq!(Layout::from_ordinal(i as u8), Some(*layout));
    }
    assert_eq!(Layout::from_ordinal(17), None);
    assert_eq!(Layout::from_ordinal(255), None);
}

#[test]
fn names_round_trip_through_from_str() {
    for layout in Layout::ALL {
        assert_eq!(Layout::from_str(layout.name()).unwrap(), layout);
    }
    assert!(Layout::from_str("grid-9000").is_err());
}
