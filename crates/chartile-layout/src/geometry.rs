/// A resolved pixel rectangle. Coordinates are relative to the owning
/// container's top-left corner; all fields stay non-negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect { top: 0, left: 0, width: 0, height: 0 };

    pub fn new(top: i32, left: i32, width: i32, height: i32) -> Self {
        Self { top, left, width, height }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// The same rectangle grown by `amount` on every side (clamped at zero).
    pub fn inflated(&self, amount: i32) -> Rect {
        Rect {
            top: self.top - amount,
            left: self.left - amount,
            width: (self.width + 2 * amount).max(0),
            height: (self.height + 2 * amount).max(0),
        }
    }
}

/// A pointer position in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
