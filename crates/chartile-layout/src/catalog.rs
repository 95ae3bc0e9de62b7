use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node::{FlexNode, NodeId, Orientation};

const THIRD: f64 = 1.0 / 3.0;

/// One of the named partitions of a container into 1–4 frames plus
/// separators. Tags cross process boundaries as small integers
/// ([`ordinal`](Layout::ordinal) / [`from_ordinal`](Layout::from_ordinal));
/// unknown ordinals are rejected there, so [`frame_count`] and
/// [`build_layout`] are total and always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Single,
    DoubleVert,
    DoubleHoriz,
    TripleVert,
    TripleVertLeft,
    TripleVertRight,
    TripleHoriz,
    TripleHorizTop,
    TripleHorizBottom,
    QuadSqV,
    QuadSqH,
    QuadVert,
    QuadHoriz,
    QuadLeft,
    QuadRight,
    QuadTop,
    QuadBottom,
}

impl Layout {
    pub const ALL: [Layout; 17] = [
        Layout::Single,
        Layout::DoubleVert,
        Layout::DoubleHoriz,
        Layout::TripleVert,
        Layout::TripleVertLeft,
        Layout::TripleVertRight,
        Layout::TripleHoriz,
        Layout::TripleHorizTop,
        Layout::TripleHorizBottom,
        Layout::QuadSqV,
        Layout::QuadSqH,
        Layout::QuadVert,
        Layout::QuadHoriz,
        Layout::QuadLeft,
        Layout::QuadRight,
        Layout::QuadTop,
        Layout::QuadBottom,
    ];

    /// The wire representation of this tag.
    pub fn ordinal(self) -> u8 {
        Self::ALL.iter().position(|&l| l == self).unwrap_or(0) as u8
    }

    /// Decode a wire tag. Unknown ordinals are not a layout; callers decide
    /// their own fallback (the host falls back to [`Layout::Single`]).
    pub fn from_ordinal(ordinal: u8) -> Option<Layout> {
        Self::ALL.get(ordinal as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::Single => "single",
            Layout::DoubleVert => "double-vert",
            Layout::DoubleHoriz => "double-horiz",
            Layout::TripleVert => "triple-vert",
            Layout::TripleVertLeft => "triple-vert-left",
            Layout::TripleVertRight => "triple-vert-right",
            Layout::TripleHoriz => "triple-horiz",
            Layout::TripleHorizTop => "triple-horiz-top",
            Layout::TripleHorizBottom => "triple-horiz-bottom",
            Layout::QuadSqV => "quad-sq-v",
            Layout::QuadSqH => "quad-sq-h",
            Layout::QuadVert => "quad-vert",
            Layout::QuadHoriz => "quad-horiz",
            Layout::QuadLeft => "quad-left",
            Layout::QuadRight => "quad-right",
            Layout::QuadTop => "quad-top",
            Layout::QuadBottom => "quad-bottom",
        }
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL.iter().copied().find(|l| l.name() == s).ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayout(pub String);

impl std::fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown layout name \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownLayout {}

/// Number of frames the given layout partitions the container into.
pub fn frame_count(layout: Layout) -> usize {
    match layout {
        Layout::Single => 1,
        Layout::DoubleVert | Layout::DoubleHoriz => 2,
        Layout::TripleVert
        | Layout::TripleVertLeft
        | Layout::TripleVertRight
        | Layout::TripleHoriz
        | Layout::TripleHorizTop
        | Layout::TripleHorizBottom => 3,
        Layout::QuadSqV
        | Layout::QuadSqH
        | Layout::QuadVert
        | Layout::QuadHoriz
        | Layout::QuadLeft
        | Layout::QuadRight
        | Layout::QuadTop
        | Layout::QuadBottom => 4,
    }
}

/// Build the node list for a layout: frames and separators in draw order
/// (frame, separator, frame, ...) with adjacency wiring established.
/// Pure; rects start zeroed until the first resolve.
pub fn build_layout(layout: Layout) -> Vec<FlexNode> {
    match layout {
        Layout::Single => single(),
        Layout::DoubleVert => double_vert(),
        Layout::DoubleHoriz => double_horiz(),
        Layout::TripleVert => triple_vert(),
        Layout::TripleVertLeft => triple_vert_left(),
        Layout::TripleVertRight => triple_vert_right(),
        Layout::TripleHoriz => triple_horiz(),
        Layout::TripleHorizTop => triple_horiz_top(),
        Layout::TripleHorizBottom => triple_horiz_bottom(),
        Layout::QuadSqV => quad_sq_v(),
        Layout::QuadSqH => quad_sq_h(),
        Layout::QuadVert => quad_vert(),
        Layout::QuadHoriz => quad_horiz(),
        Layout::QuadLeft => quad_left(),
        Layout::QuadRight => quad_right(),
        Layout::QuadTop => quad_top(),
        Layout::QuadBottom => quad_bottom(),
    }
}

/// Allocates nodes in draw order and wires adjacency afterwards, so a
/// wiring call can reference nodes on either side of the one being wired.
struct Builder {
    nodes: Vec<FlexNode>,
}

impl Builder {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn frame(&mut self, flex_width: f64, flex_height: f64) -> NodeId {
        self.nodes.push(FlexNode::frame(flex_width, flex_height));
        self.nodes.len() - 1
    }

    fn separator(&mut self, orientation: Orientation, span: f64) -> NodeId {
        self.nodes.push(FlexNode::separator(orientation, span));
        self.nodes.len() - 1
    }

    fn wire(&mut self, id: NodeId, pos: &[NodeId], neg: &[NodeId]) {
        debug_assert!(!pos.contains(&id) && !neg.contains(&id), "a node never neighbors itself");
        self.nodes[id].resize_pos = pos.to_vec();
        self.nodes[id].resize_neg = neg.to_vec();
    }

    fn finish(self) -> Vec<FlexNode> {
        self.nodes
    }
}

fn single() -> Vec<FlexNode> {
    let mut b = Builder::new();
    b.frame(1.0, 1.0);
    b.finish()
}

fn double_vert() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let left = b.frame(0.5, 1.0);
    let div = b.separator(Orientation::Vertical, 1.0);
    let right = b.frame(0.5, 1.0);
    b.wire(left, &[], &[div]);
    b.wire(div, &[left], &[right]);
    b.wire(right, &[div], &[]);
    b.finish()
}

fn double_horiz() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top = b.frame(1.0, 0.5);
    let div = b.separator(Orientation::Horizontal, 1.0);
    let bottom = b.frame(1.0, 0.5);
    b.wire(top, &[], &[div]);
    b.wire(div, &[top], &[bottom]);
    b.wire(bottom, &[div], &[]);
    b.finish()
}

fn triple_vert() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let a = b.frame(THIRD, 1.0);
    let s1 = b.separator(Orientation::Vertical, 1.0);
    let c = b.frame(THIRD, 1.0);
    let s2 = b.separator(Orientation::Vertical, 1.0);
    let e = b.frame(THIRD, 1.0);
    b.wire(a, &[], &[s1]);
    b.wire(s1, &[a], &[c]);
    b.wire(c, &[s1], &[s2]);
    b.wire(s2, &[c], &[e]);
    b.wire(e, &[s2], &[]);
    b.finish()
}

fn triple_vert_left() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let left = b.frame(0.5, 1.0);
    let div = b.separator(Orientation::Vertical, 1.0);
    let top_right = b.frame(0.5, 0.5);
    let split = b.separator(Orientation::Horizontal, 0.5);
    let bottom_right = b.frame(0.5, 0.5);
    b.wire(left, &[], &[div]);
    // Moving the main divider rescales everything nested on the right,
    // including the nested separator's span.
    b.wire(div, &[left], &[top_right, split, bottom_right]);
    b.wire(top_right, &[div], &[split]);
    b.wire(split, &[top_right], &[bottom_right]);
    b.wire(bottom_right, &[div, split], &[]);
    b.finish()
}

fn triple_vert_right() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top_left = b.frame(0.5, 0.5);
    let split = b.separator(Orientation::Horizontal, 0.5);
    let bottom_left = b.frame(0.5, 0.5);
    let div = b.separator(Orientation::Vertical, 1.0);
    let right = b.frame(0.5, 1.0);
    b.wire(top_left, &[], &[split]);
    b.wire(split, &[top_left], &[bottom_left]);
    b.wire(bottom_left, &[split], &[]);
    b.wire(div, &[top_left, split, bottom_left], &[right]);
    b.wire(right, &[div], &[]);
    b.finish()
}

fn triple_horiz() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let a = b.frame(1.0, THIRD);
    let s1 = b.separator(Orientation::Horizontal, 1.0);
    let c = b.frame(1.0, THIRD);
    let s2 = b.separator(Orientation::Horizontal, 1.0);
    let e = b.frame(1.0, THIRD);
    b.wire(a, &[], &[s1]);
    b.wire(s1, &[a], &[c]);
    b.wire(c, &[s1], &[s2]);
    b.wire(s2, &[c], &[e]);
    b.wire(e, &[s2], &[]);
    b.finish()
}

fn triple_horiz_top() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top = b.frame(1.0, 0.5);
    let div = b.separator(Orientation::Horizontal, 1.0);
    let bottom_left = b.frame(0.5, 0.5);
    let split = b.separator(Orientation::Vertical, 0.5);
    let bottom_right = b.frame(0.5, 0.5);
    b.wire(top, &[], &[div]);
    b.wire(div, &[top], &[bottom_left, split, bottom_right]);
    b.wire(bottom_left, &[div], &[split]);
    b.wire(split, &[bottom_left], &[bottom_right]);
    b.wire(bottom_right, &[div, split], &[]);
    b.finish()
}

fn triple_horiz_bottom() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top_left = b.frame(0.5, 0.5);
    let split = b.separator(Orientation::Vertical, 0.5);
    let top_right = b.frame(0.5, 0.5);
    let div = b.separator(Orientation::Horizontal, 1.0);
    let bottom = b.frame(1.0, 0.5);
    b.wire(top_left, &[], &[split]);
    b.wire(split, &[top_left], &[top_right]);
    b.wire(top_right, &[split], &[]);
    b.wire(div, &[top_left, split, top_right], &[bottom]);
    b.wire(bottom, &[div], &[]);
    b.finish()
}

fn quad_sq_v() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top_left = b.frame(0.5, 0.5);
    let left_split = b.separator(Orientation::Horizontal, 0.5);
    let bottom_left = b.frame(0.5, 0.5);
    let div = b.separator(Orientation::Vertical, 1.0);
    let top_right = b.frame(0.5, 0.5);
    let right_split = b.separator(Orientation::Horizontal, 0.5);
    let bottom_right = b.frame(0.5, 0.5);
    b.wire(top_left, &[], &[left_split]);
    b.wire(left_split, &[top_left], &[bottom_left]);
    b.wire(bottom_left, &[left_split], &[]);
    b.wire(div, &[top_left, left_split, bottom_left], &[top_right, right_split, bottom_right]);
    b.wire(top_right, &[div], &[right_split]);
    b.wire(right_split, &[top_right], &[bottom_right]);
    b.wire(bottom_right, &[div, right_split], &[]);
    b.finish()
}

fn quad_sq_h() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top_left = b.frame(0.5, 0.5);
    let top_split = b.separator(Orientation::Vertical, 0.5);
    let top_right = b.frame(0.5, 0.5);
    let div = b.separator(Orientation::Horizontal, 1.0);
    let bottom_left = b.frame(0.5, 0.5);
    let bottom_split = b.separator(Orientation::Vertical, 0.5);
    let bottom_right = b.frame(0.5, 0.5);
    b.wire(top_left, &[], &[top_split]);
    b.wire(top_split, &[top_left], &[top_right]);
    b.wire(top_right, &[top_split], &[]);
    b.wire(div, &[top_left, top_split, top_right], &[bottom_left, bottom_split, bottom_right]);
    b.wire(bottom_left, &[div], &[bottom_split]);
    b.wire(bottom_split, &[bottom_left], &[bottom_right]);
    b.wire(bottom_right, &[div, bottom_split], &[]);
    b.finish()
}

fn quad_vert() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let a = b.frame(0.25, 1.0);
    let s1 = b.separator(Orientation::Vertical, 1.0);
    let c = b.frame(0.25, 1.0);
    let s2 = b.separator(Orientation::Vertical, 1.0);
    let e = b.frame(0.25, 1.0);
    let s3 = b.separator(Orientation::Vertical, 1.0);
    let g = b.frame(0.25, 1.0);
    b.wire(a, &[], &[s1]);
    b.wire(s1, &[a], &[c]);
    b.wire(c, &[s1], &[s2]);
    b.wire(s2, &[c], &[e]);
    b.wire(e, &[s2], &[s3]);
    b.wire(s3, &[e], &[g]);
    b.wire(g, &[s3], &[]);
    b.finish()
}

fn quad_horiz() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let a = b.frame(1.0, 0.25);
    let s1 = b.separator(Orientation::Horizontal, 1.0);
    let c = b.frame(1.0, 0.25);
    let s2 = b.separator(Orientation::Horizontal, 1.0);
    let e = b.frame(1.0, 0.25);
    let s3 = b.separator(Orientation::Horizontal, 1.0);
    let g = b.frame(1.0, 0.25);
    b.wire(a, &[], &[s1]);
    b.wire(s1, &[a], &[c]);
    b.wire(c, &[s1], &[s2]);
    b.wire(s2, &[c], &[e]);
    b.wire(e, &[s2], &[s3]);
    b.wire(s3, &[e], &[g]);
    b.wire(g, &[s3], &[]);
    b.finish()
}

fn quad_left() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let left = b.frame(0.5, 1.0);
    let div = b.separator(Orientation::Vertical, 1.0);
    let top = b.frame(0.5, THIRD);
    let s1 = b.separator(Orientation::Horizontal, 0.5);
    let mid = b.frame(0.5, THIRD);
    let s2 = b.separator(Orientation::Horizontal, 0.5);
    let bottom = b.frame(0.5, THIRD);
    b.wire(left, &[], &[div]);
    b.wire(div, &[left], &[top, s1, mid, s2, bottom]);
    b.wire(top, &[div], &[s1]);
    b.wire(s1, &[top], &[mid]);
    b.wire(mid, &[div, s1], &[s2]);
    b.wire(s2, &[mid], &[bottom]);
    b.wire(bottom, &[div, s2], &[]);
    b.finish()
}

fn quad_right() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top = b.frame(0.5, THIRD);
    let s1 = b.separator(Orientation::Horizontal, 0.5);
    let mid = b.frame(0.5, THIRD);
    let s2 = b.separator(Orientation::Horizontal, 0.5);
    let bottom = b.frame(0.5, THIRD);
    let div = b.separator(Orientation::Vertical, 1.0);
    let right = b.frame(0.5, 1.0);
    b.wire(top, &[], &[s1]);
    b.wire(s1, &[top], &[mid]);
    b.wire(mid, &[s1], &[s2]);
    b.wire(s2, &[mid], &[bottom]);
    b.wire(bottom, &[s2], &[]);
    b.wire(div, &[top, s1, mid, s2, bottom], &[right]);
    b.wire(right, &[div], &[]);
    b.finish()
}

fn quad_top() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let top = b.frame(1.0, 0.5);
    let div = b.separator(Orientation::Horizontal, 1.0);
    let left = b.frame(THIRD, 0.5);
    let s1 = b.separator(Orientation::Vertical, 0.5);
    let mid = b.frame(THIRD, 0.5);
    let s2 = b.separator(Orientation::Vertical, 0.5);
    let right = b.frame(THIRD, 0.5);
    b.wire(top, &[], &[div]);
    b.wire(div, &[top], &[left, s1, mid, s2, right]);
    b.wire(left, &[div], &[s1]);
    b.wire(s1, &[left], &[mid]);
    b.wire(mid, &[div, s1], &[s2]);
    b.wire(s2, &[mid], &[right]);
    b.wire(right, &[div, s2], &[]);
    b.finish()
}

fn quad_bottom() -> Vec<FlexNode> {
    let mut b = Builder::new();
    let left = b.frame(THIRD, 0.5);
    let s1 = b.separator(Orientation::Vertical, 0.5);
    let mid = b.frame(THIRD, 0.5);
    let s2 = b.separator(Orientation::Vertical, 0.5);
    let right = b.frame(THIRD, 0.5);
    let div = b.separator(Orientation::Horizontal, 1.0);
    let bottom = b.frame(1.0, 0.5);
    b.wire(left, &[], &[s1]);
    b.wire(s1, &[left], &[mid]);
    b.wire(mid, &[s1], &[s2]);
    b.wire(s2, &[mid], &[right]);
    b.wire(right, &[s2], &[]);
    b.wire(div, &[left, s1, mid, s2, right], &[bottom]);
    b.wire(bottom, &[div], &[]);
    b.finish()
}

#[cfg(test)]
mod tests;
