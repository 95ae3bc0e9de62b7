use crate::geometry::Rect;

/// Index of a node within its layout's arena. Adjacency is expressed as
/// indices rather than references: the catalog builder is the only writer,
/// and the lists never change after construction.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Divides top from bottom; dragged along the y axis.
    Horizontal,
    /// Divides left from right; dragged along the x axis.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A resizable content region.
    Frame,
    /// A thin draggable divider between two frame groups.
    Separator(Orientation),
}

/// The atomic layout unit: either a frame or a separator, carrying its
/// flex shares, its resolved pixel rectangle, and the adjacency wiring
/// established by the catalog.
///
/// For a frame both flex shares are nonzero. For a separator exactly one
/// is nonzero: the share of the axis the separator *spans* (1.0 for a
/// full-length divider, 0.5 for one confined to half the container by a
/// perpendicular divider). A separator's own thickness is the fixed
/// [`RESIZE_HANDLE_PX`](crate::RESIZE_HANDLE_PX), never a flex value.
#[derive(Debug, Clone)]
pub struct FlexNode {
    pub kind: NodeKind,
    pub flex_width: f64,
    pub flex_height: f64,
    pub rect: Rect,
    /// Neighbors on the top/left side of this node along the resize axis.
    /// For a separator: the flex-share donor group. For a frame: the
    /// separator(s) its own top/left derive from (at most one per axis).
    pub resize_pos: Vec<NodeId>,
    /// Neighbors on the bottom/right side, symmetric to `resize_pos`.
    pub resize_neg: Vec<NodeId>,
}

impl FlexNode {
    pub fn frame(flex_width: f64, flex_height: f64) -> Self {
        Self {
            kind: NodeKind::Frame,
            flex_width,
            flex_height,
            rect: Rect::ZERO,
            resize_pos: Vec::new(),
            resize_neg: Vec::new(),
        }
    }

    /// A separator spanning `span` of the axis it runs along.
    pub fn separator(orientation: Orientation, span: f64) -> Self {
        let (flex_width, flex_height) = match orientation {
            Orientation::Horizontal => (span, 0.0),
            Orientation::Vertical => (0.0, span),
        };
        Self {
            kind: NodeKind::Separator(orientation),
            flex_width,
            flex_height,
            rect: Rect::ZERO,
            resize_pos: Vec::new(),
            resize_neg: Vec::new(),
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self.kind, NodeKind::Frame)
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.kind, NodeKind::Separator(_))
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self.kind {
            NodeKind::Separator(o) => Some(o),
            NodeKind::Frame => None,
        }
    }
}
