// Math utilities and the axis-aligned bounding box shared by every collider

use glam::Vec2;

/// Movement axis, used for axis-separated collision resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Mutable component of `v` along this axis
    pub fn component_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::Horizontal => &mut v.x,
            Axis::Vertical => &mut v.y,
        }
    }
}

/// Axis-aligned bounding box in screen space (y grows downward)
///
/// `x`/`y` is the top-left corner. Width and height are always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a box of the given size whose bottom edge sits at `bottom`,
    /// horizontally centered on `center_x`
    pub fn from_bottom_center(center_x: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self::new(center_x - width / 2.0, bottom - height, width, height)
    }

    /// Width and height are both strictly positive and finite
    pub fn is_valid(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test: boxes sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point containment, inclusive of the top-left edges and exclusive of
    /// the bottom-right ones
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// How far `self` has sunk into `other` along `axis`
    ///
    /// Returns the smaller of the two possible push-out distances, or zero
    /// when the boxes do not overlap.
    pub fn penetration(&self, other: &Aabb, axis: Axis) -> f32 {
        if !self.overlaps(other) {
            return 0.0;
        }
        let (a, b) = match axis {
            Axis::Horizontal => (
                self.right() - other.left(),
                other.right() - self.left(),
            ),
            Axis::Vertical => (
                self.bottom() - other.top(),
                other.bottom() - self.top(),
            ),
        };
        a.min(b)
    }

    /// Move the box along one axis
    pub fn translate(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::Horizontal => self.x += delta,
            Axis::Vertical => self.y += delta,
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
