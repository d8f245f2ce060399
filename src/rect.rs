use {
    crate::coord::Coord,
    std::{
        cmp,
        fmt::{Debug, Formatter},
    },
};

/// An axis-aligned rectangle covering the half-open ranges `x1 <= x < x2`
/// and `y1 <= y < y2`.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Rect<T = i32> {
    pub(crate) x1: T,
    pub(crate) y1: T,
    pub(crate) x2: T,
    pub(crate) y2: T,
}

/// A rectangle with real-valued coordinates.
pub type RectF = Rect<f64>;

impl Eq for Rect<i32> {}

impl<T: Coord> Rect<T> {
    /// Creates an empty rectangle positioned at `(x, y)`.
    pub fn new_empty(x: T, y: T) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    /// Creates a rectangle with the given corners.
    ///
    /// Returns `None` if `x2 < x1` or `y2 < y1`.
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Option<Self> {
        if x2 < x1 || y2 < y1 {
            return None;
        }
        Some(Self { x1, y1, x2, y2 })
    }

    /// Creates a rectangle with the given position and size.
    ///
    /// Returns `None` if `width` or `height` is negative.
    pub fn new_sized(x: T, y: T, width: T, height: T) -> Option<Self> {
        if width < T::ZERO || height < T::ZERO {
            return None;
        }
        Self::new(x, y, x.add(width), y.add(height))
    }

    /// Creates a rectangle without checking that the corners are ordered.
    pub fn new_unchecked(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: Self) -> Self {
        Self {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Returns the intersection of `self` and `other`, clamped to an empty
    /// rectangle if they do not overlap.
    pub fn intersect(&self, other: Self) -> Self {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2).max(x1);
        let y2 = self.y2.min(other.y2).max(y1);
        Self { x1, y1, x2, y2 }
    }

    /// Returns whether `self` and `other` overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);
        x1 < x2 && y1 < y2
    }

    /// Returns whether the point `(x, y)` is inside `self`.
    pub fn contains(&self, x: T, y: T) -> bool {
        self.x1 <= x && self.y1 <= y && x < self.x2 && y < self.y2
    }

    /// Returns whether `other` is completely inside `self`.
    ///
    /// An empty rectangle is contained in every rectangle.
    pub fn contains_rect(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        self.x1 <= other.x1 && self.y1 <= other.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }

    pub fn is_empty(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// Returns this rectangle shifted by `dx` along the X axis and `dy`
    /// along the Y axis.
    pub fn translated(&self, dx: T, dy: T) -> Self {
        Self {
            x1: self.x1.add(dx),
            y1: self.y1.add(dy),
            x2: self.x2.add(dx),
            y2: self.y2.add(dy),
        }
    }

    pub fn x1(&self) -> T {
        self.x1
    }

    pub fn x2(&self) -> T {
        self.x2
    }

    pub fn y1(&self) -> T {
        self.y1
    }

    pub fn y2(&self) -> T {
        self.y2
    }

    pub fn width(&self) -> T {
        self.x2.sub(self.x1)
    }

    pub fn height(&self) -> T {
        self.y2.sub(self.y1)
    }
}

impl Rect<i32> {
    /// Returns this rectangle scaled by `sx` along the X axis and `sy`
    /// along the Y axis.
    pub fn scaled(&self, sx: f64, sy: f64) -> RectF {
        RectF::from(*self).scaled(sx, sy)
    }
}

impl RectF {
    /// Returns this rectangle scaled by `sx` along the X axis and `sy`
    /// along the Y axis. Negative factors mirror the rectangle, the edges
    /// are swapped to keep the corners ordered.
    pub fn scaled(&self, sx: f64, sy: f64) -> RectF {
        let xa = self.x1 * sx;
        let xb = self.x2 * sx;
        let ya = self.y1 * sy;
        let yb = self.y2 * sy;
        Self {
            x1: xa.min(xb),
            y1: ya.min(yb),
            x2: xa.max(xb),
            y2: ya.max(yb),
        }
    }

    /// Returns this rectangle with every edge rounded to the nearest
    /// integer. Rounding may produce an empty rectangle.
    pub fn rounded(&self) -> Rect {
        Rect {
            x1: self.x1.round() as i32,
            y1: self.y1.round() as i32,
            x2: self.x2.round() as i32,
            y2: self.y2.round() as i32,
        }
    }

    /// Returns the largest integer rectangle contained in this rectangle.
    /// The result may be empty.
    pub fn rounded_in(&self) -> Rect {
        let x1 = self.x1.ceil() as i32;
        let y1 = self.y1.ceil() as i32;
        Rect {
            x1,
            y1,
            x2: cmp::max(self.x2.floor() as i32, x1),
            y2: cmp::max(self.y2.floor() as i32, y1),
        }
    }

    /// Returns the smallest integer rectangle containing this rectangle.
    pub fn rounded_out(&self) -> Rect {
        Rect {
            x1: self.x1.floor() as i32,
            y1: self.y1.floor() as i32,
            x2: self.x2.ceil() as i32,
            y2: self.y2.ceil() as i32,
        }
    }
}

impl From<Rect> for RectF {
    fn from(rect: Rect) -> Self {
        Self {
            x1: rect.x1 as f64,
            y1: rect.y1 as f64,
            x2: rect.x2 as f64,
            y2: rect.y2 as f64,
        }
    }
}

impl<T: Coord> Debug for Rect<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rect")
            .field("x1", &self.x1)
            .field("y1", &self.y1)
            .field("x2", &self.x2)
            .field("y2", &self.y2)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// An FFI-compatible rectangle with the layout of `pixman_box32_t`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Box32 {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl From<Rect> for Box32 {
    fn from(rect: Rect) -> Self {
        Self {
            x1: rect.x1,
            y1: rect.y1,
            x2: rect.x2,
            y2: rect.y2,
        }
    }
}

impl From<Box32> for Rect {
    fn from(b: Box32) -> Self {
        // inverted boxes clamp to empty
        Self {
            x1: b.x1,
            y1: b.y1,
            x2: cmp::max(b.x2, b.x1),
            y2: cmp::max(b.y2, b.y1),
        }
    }
}
