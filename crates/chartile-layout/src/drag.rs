use crate::node::{FlexNode, NodeId, NodeKind, Orientation};
use crate::{MIN_FRAME_HEIGHT, MIN_FRAME_WIDTH};

/// Redistribute width shares across a vertical separator from a horizontal
/// pointer motion.
///
/// Every move recomputes from the absolute pointer position and the
/// current rects, never from deltas, so a gesture accumulates no rounding
/// drift and each call is idempotent for the same inputs. The combined
/// share of the two neighbor groups is preserved exactly; the new split is
/// clamped so neither side drops below [`MIN_FRAME_WIDTH`]. The new shares
/// are applied to *every* node in each neighbor group — in nested layouts
/// that rescales the whole side, including nested separators' spans,
/// without changing their own split ratios.
///
/// Returns whether any flex value changed; callers re-run the resolver
/// after a change.
pub fn drag_horizontal(nodes: &mut [FlexNode], separator: NodeId, container_left: f64, pointer_x: f64) -> bool {
    debug_assert!(
        matches!(nodes[separator].kind, NodeKind::Separator(Orientation::Vertical)),
        "horizontal drags apply to vertical separators"
    );
    let (pos, neg) = neighbor_groups(nodes, separator);
    let (Some(&first_pos), Some(&first_neg)) = (pos.first(), neg.first()) else {
        debug_assert!(false, "separator is missing a neighbor group");
        return false;
    };

    let flex_total = nodes[first_pos].flex_width + nodes[first_neg].flex_width;
    let width_total = (nodes[first_pos].rect.width + nodes[first_neg].rect.width) as f64;
    if width_total <= 0.0 {
        return false;
    }

    let relative_x = pointer_x - (container_left + nodes[first_pos].rect.left as f64);
    let (flex_pos, flex_neg) = split_with_min(relative_x / width_total * flex_total, flex_total, MIN_FRAME_WIDTH);

    let changed = nodes[first_pos].flex_width != flex_pos || nodes[first_neg].flex_width != flex_neg;
    for &id in &pos {
        nodes[id].flex_width = flex_pos;
    }
    for &id in &neg {
        nodes[id].flex_width = flex_neg;
    }
    changed
}

/// Mirror image of [`drag_horizontal`] for horizontal separators: vertical
/// pointer motion redistributing height shares under [`MIN_FRAME_HEIGHT`].
pub fn drag_vertical(nodes: &mut [FlexNode], separator: NodeId, container_top: f64, pointer_y: f64) -> bool {
    debug_assert!(
        matches!(nodes[separator].kind, NodeKind::Separator(Orientation::Horizontal)),
        "vertical drags apply to horizontal separators"
    );
    let (pos, neg) = neighbor_groups(nodes, separator);
    let (Some(&first_pos), Some(&first_neg)) = (pos.first(), neg.first()) else {
        debug_assert!(false, "separator is missing a neighbor group");
        return false;
    };

    let flex_total = nodes[first_pos].flex_height + nodes[first_neg].flex_height;
    let height_total = (nodes[first_pos].rect.height + nodes[first_neg].rect.height) as f64;
    if height_total <= 0.0 {
        return false;
    }

    let relative_y = pointer_y - (container_top + nodes[first_pos].rect.top as f64);
    let (flex_pos, flex_neg) = split_with_min(relative_y / height_total * flex_total, flex_total, MIN_FRAME_HEIGHT);

    let changed = nodes[first_pos].flex_height != flex_pos || nodes[first_neg].flex_height != flex_neg;
    for &id in &pos {
        nodes[id].flex_height = flex_pos;
    }
    for &id in &neg {
        nodes[id].flex_height = flex_neg;
    }
    changed
}

fn neighbor_groups(nodes: &[FlexNode], separator: NodeId) -> (Vec<NodeId>, Vec<NodeId>) {
    let sep = &nodes[separator];
    (sep.resize_pos.clone(), sep.resize_neg.clone())
}

/// Clamp order matters and is asymmetric: the positive side is pinned
/// first, else the negative side; the other side absorbs the remainder.
/// Only one side can ever be clamped per call because every catalog layout
/// satisfies `flex_total >= 2 * min`.
fn split_with_min(requested_pos: f64, flex_total: f64, min: f64) -> (f64, f64) {
    let mut flex_pos = requested_pos;
    let mut flex_neg = flex_total - flex_pos;
    if flex_pos < min {
        flex_pos = min;
        flex_neg = flex_total - flex_pos;
    } else if flex_neg < min {
        flex_neg = min;
        flex_pos = flex_total - flex_neg;
    }
    (flex_pos, flex_neg)
}

#[cfg(test)]
mod tests;
