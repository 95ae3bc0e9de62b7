use chartile_layout::{
    build_layout, drag_horizontal, drag_vertical, frame_count, resolve, visual_origin, FlexNode, Layout, NodeId,
    Orientation, Point, Rect,
};

use crate::frame::Frame;

/// One tab's layout state: the node arena of the current layout, the
/// persistent frames it claims, and the absolute pixel bounds the layout is
/// resolved against.
///
/// Node rects are container-relative; everything this type hands out
/// (`frame_rects`, hit tests) is in absolute screen pixels.
pub struct Container {
    layout: Layout,
    nodes: Vec<FlexNode>,
    frames: Vec<Frame>,
    bounds: Rect,
    active_frame: usize,
}

impl Container {
    pub fn new(layout: Layout) -> Self {
        let mut container =
            Self { layout, nodes: build_layout(layout), frames: Vec::new(), bounds: Rect::ZERO, active_frame: 0 };
        container.ensure_frames();
        container
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn nodes(&self) -> &[FlexNode] {
        &self.nodes
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of frames the current layout shows. `frames()` may hold more;
    /// the surplus is parked, not dropped.
    pub fn visible_frames(&self) -> usize {
        frame_count(self.layout)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frame_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    pub fn active_frame(&self) -> usize {
        self.active_frame
    }

    pub fn focus_frame(&mut self, index: usize) -> bool {
        if index < self.visible_frames() {
            self.active_frame = index;
            true
        } else {
            false
        }
    }

    pub fn focus_next_frame(&mut self) {
        self.active_frame = (self.active_frame + 1) % self.visible_frames();
    }

    pub fn focus_prev_frame(&mut self) {
        let visible = self.visible_frames();
        self.active_frame = (self.active_frame + visible - 1) % visible;
    }

    /// Append a new frame slot and return its index.
    pub fn add_frame(&mut self, id: Option<&str>) -> usize {
        self.frames.push(Frame::new(id));
        self.frames.len() - 1
    }

    /// Swap the visible arrangement. Existing frames are re-claimed in walk
    /// order; frames past the new layout's count keep their content and
    /// stop receiving resize notifications until claimed again. The first
    /// frame becomes the active one.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.nodes = build_layout(layout);
        self.ensure_frames();
        self.active_frame = 0;
        self.resize();
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.resize();
    }

    /// Re-resolve at the current bounds and tell every visible frame its
    /// new pixel size.
    pub fn resize(&mut self) {
        resolve(self.bounds.width as f64, self.bounds.height as f64, &mut self.nodes);
        for (frame_index, node) in self.nodes.iter().filter(|n| n.is_frame()).enumerate() {
            self.frames[frame_index].resize(node.rect.width as f64, node.rect.height as f64);
        }
    }

    /// Move a separator to an absolute pointer position. On a change the
    /// layout is re-resolved and frames are notified.
    pub fn drag_separator(&mut self, separator: NodeId, pointer: Point) -> bool {
        let changed = match self.nodes.get(separator).and_then(|n| n.orientation()) {
            Some(Orientation::Vertical) => {
                drag_horizontal(&mut self.nodes, separator, self.bounds.left as f64, pointer.x)
            }
            Some(Orientation::Horizontal) => {
                drag_vertical(&mut self.nodes, separator, self.bounds.top as f64, pointer.y)
            }
            None => false,
        };
        if changed {
            self.resize();
        }
        changed
    }

    /// Separator under an absolute pointer position, with `slop` extra
    /// pixels of grab area on every side.
    pub fn separator_at(&self, pointer: Point, slop: i32) -> Option<NodeId> {
        let (x, y) = (pointer.x as i32, pointer.y as i32);
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_separator())
            .find(|(_, n)| self.screen_rect(n).inflated(slop).contains(x, y))
            .map(|(id, _)| id)
    }

    /// Frame index under an absolute pointer position.
    pub fn frame_at(&self, pointer: Point) -> Option<usize> {
        let (x, y) = (pointer.x as i32, pointer.y as i32);
        self.nodes.iter().filter(|n| n.is_frame()).position(|n| self.screen_rect(n).contains(x, y))
    }

    /// Visible frames with their absolute screen rects, in walk order.
    pub fn frame_rects(&self) -> Vec<(usize, Rect)> {
        self.nodes
            .iter()
            .filter(|n| n.is_frame())
            .enumerate()
            .map(|(index, n)| (index, self.screen_rect(n)))
            .collect()
    }

    /// Separators with their absolute screen rects (already shifted to the
    /// painted position straddling the boundary).
    pub fn separator_rects(&self) -> Vec<(NodeId, Orientation, Rect)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, n)| n.orientation().map(|o| (id, o, self.screen_rect(n))))
            .collect()
    }

    fn screen_rect(&self, node: &FlexNode) -> Rect {
        let (left, top) = visual_origin(node);
        Rect::new(self.bounds.top + top, self.bounds.left + left, node.rect.width, node.rect.height)
    }

    fn ensure_frames(&mut self) {
        while self.frames.len() < self.visible_frames() {
            self.frames.push(Frame::new(None));
        }
    }
}
