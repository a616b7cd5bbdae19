//! Axis-aligned rectangles and the AABB overlap test.

/// Anything that occupies an axis-aligned rectangle anchored at its
/// top-left corner.
pub trait Bounds {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn right(&self) -> f32 {
        self.x() + self.width()
    }

    fn bottom(&self) -> f32 {
        self.y() + self.height()
    }
}

/// A free-standing rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

impl Bounds for Rect {
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
    fn width(&self) -> f32 {
        self.w
    }
    fn height(&self) -> f32 {
        self.h
    }
}

/// True when the two rectangles share interior area.  Touching edges do
/// not count.
pub fn intersects(a: &impl Bounds, b: &impl Bounds) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}
