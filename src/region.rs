use {
    crate::{
        coord::Coord,
        rect::{Box32, Rect, RectF},
    },
    smallvec::SmallVec,
    std::{
        fmt::{Debug, Formatter},
        ops::{
            Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub,
            SubAssign,
        },
    },
};

mod builder;
pub(crate) mod ops;
mod organize;

pub use self::builder::RegionBuilder;

use self::ops::{Bands, Intersect, Subtract, Union, Xor};

pub(crate) type Container<T> = SmallVec<[Rect<T>; 1]>;

/// A set of points in the plane, stored as a canonical list of
/// non-overlapping rectangles.
///
/// The rectangles are sorted in y-x lexicographic order and split into
/// bands, runs of rectangles sharing the same top and bottom edges.
/// Rectangles in a band cannot touch or overlap and occupy the maximal
/// horizontal extent, and two vertically adjacent bands never have the same
/// horizontal layout. As a consequence, two regions cover the same points
/// if and only if their rectangle lists are equal, which is what `==`
/// compares.
#[derive(Clone, PartialEq, Default)]
pub struct Region<T = i32> {
    rects: Container<T>,
    extents: Rect<T>,
}

/// A region with real-valued coordinates.
///
/// No fuzzy floating point comparisons are performed. Use
/// [`rounded`](RegionF::rounded) or [`rounded_out`](RegionF::rounded_out)
/// to get rid of extremely small rectangles.
pub type RegionF = Region<f64>;

impl Eq for Region<i32> {}

impl<T: Coord> Region<T> {
    /// Creates an empty region.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a region consisting of a single rectangle.
    pub fn new(rect: Rect<T>) -> Self {
        if rect.is_empty() {
            return Self::default();
        }
        let mut rects = SmallVec::new();
        rects.push(rect);
        Self {
            rects,
            extents: rect,
        }
    }

    /// Returns the infinite region.
    pub fn infinite() -> Self {
        let rect = Rect::new_sized(
            T::INFINITE_ORIGIN,
            T::INFINITE_ORIGIN,
            T::INFINITE_EXTENT,
            T::INFINITE_EXTENT,
        );
        Self::new(rect.unwrap())
    }

    /// Creates a region from a rectangle list already in canonical form.
    ///
    /// The rectangles must be sorted in y-x lexicographic order and split
    /// into bands, rectangles within a band must not touch or overlap, no
    /// rectangle may be empty, and vertically adjacent bands must not have
    /// the same horizontal layout. [`rects`](Self::rects) output can be
    /// passed back safely.
    ///
    /// Violating these requirements does not cause memory unsafety but the
    /// resulting region is unspecified. Debug builds assert them.
    pub fn from_sorted_rects(rects: &[Rect<T>]) -> Self {
        debug_assert!(ops::is_canonical(rects));
        let rects = SmallVec::from_slice(rects);
        Self {
            extents: ops::extents(&rects),
            rects,
        }
    }

    /// Creates a region from rectangles sorted by their top edge.
    ///
    /// The rectangles may overlap and rectangles sharing a top edge may be
    /// unsorted and of different heights. Empty rectangles are skipped.
    ///
    /// This is cheaper than calling [`united`](Self::united) in a loop.
    pub fn from_rects_sorted_by_y(rects: &[Rect<T>]) -> Self {
        let rects = organize::sorted_by_y_to_bands(rects);
        Self {
            extents: ops::extents(&rects),
            rects,
        }
    }

    /// Creates a region from arbitrary rectangles. They may overlap,
    /// contain duplicates, and come in any order. Empty rectangles are
    /// skipped.
    pub fn from_unsorted_rects(rects: &[Rect<T>]) -> Self {
        if rects.is_empty() {
            return Self::default();
        }
        if rects.len() == 1 {
            return Self::new(rects[0]);
        }
        let rects = organize::rects_to_bands(rects);
        Self {
            extents: ops::extents(&rects),
            rects,
        }
    }

    /// Returns the bounding rectangle of this region, or an empty rectangle
    /// if the region is empty.
    pub fn bounding_rect(&self) -> Rect<T> {
        self.extents
    }

    /// Returns `true` if the region covers no points.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns the rectangles that this region is made of.
    pub fn rects(&self) -> &[Rect<T>] {
        &self.rects
    }

    /// Returns `true` if the region contains the point `(x, y)`.
    pub fn contains(&self, x: T, y: T) -> bool {
        if !self.extents.contains(x, y) {
            return false;
        }
        // Band bottoms are non-decreasing across the list, so the first
        // rectangle with y2 > y starts the band containing y, if any.
        let i = self.rects.partition_point(|r| r.y2 <= y);
        let band_y1 = match self.rects.get(i) {
            Some(rect) => rect.y1,
            _ => return false,
        };
        if y < band_y1 {
            // y lies in the gap between two bands
            return false;
        }
        let band = &self.rects[i..];
        let j = band.partition_point(|r| r.y1 == band_y1 && r.x2 <= x);
        match band.get(j) {
            Some(rect) => rect.y1 == band_y1 && rect.contains(x, y),
            _ => false,
        }
    }

    /// Returns `true` if `rect` is completely inside this region.
    pub fn contains_rect(&self, rect: Rect<T>) -> bool {
        if rect.is_empty() {
            return true;
        }
        if !self.extents.contains_rect(&rect) {
            return false;
        }
        self.intersected_rect(rect) == Self::new(rect)
    }

    /// Returns `true` if `rect` and this region overlap.
    pub fn intersects_rect(&self, rect: Rect<T>) -> bool {
        if rect.is_empty() || !self.extents.intersects(&rect) {
            return false;
        }
        let i = self.rects.partition_point(|r| r.y2 <= rect.y1);
        self.rects[i..]
            .iter()
            .take_while(|r| r.y1 < rect.y2)
            .any(|r| r.x1 < rect.x2 && rect.x1 < r.x2)
    }

    /// Returns `true` if `other` and this region overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        if !self.extents.intersects(&other.extents) {
            return false;
        }
        let mut a_bands = Bands { rects: &self.rects };
        let mut b_bands = Bands { rects: &other.rects };
        let mut a_opt = a_bands.next();
        let mut b_opt = b_bands.next();
        while let (Some(a), Some(b)) = (a_opt, b_opt) {
            if a.y2 <= b.y1 {
                a_opt = a_bands.next();
            } else if b.y2 <= a.y1 {
                b_opt = b_bands.next();
            } else {
                let mut a_iter = a.rects.iter();
                let mut b_iter = b.rects.iter();
                let mut ra_opt = a_iter.next();
                let mut rb_opt = b_iter.next();
                while let (Some(ra), Some(rb)) = (ra_opt, rb_opt) {
                    if ra.x2 <= rb.x1 {
                        ra_opt = a_iter.next();
                    } else if rb.x2 <= ra.x1 {
                        rb_opt = b_iter.next();
                    } else {
                        return true;
                    }
                }
                if a.y2 <= b.y2 {
                    a_opt = a_bands.next();
                } else {
                    b_opt = b_bands.next();
                }
            }
        }
        false
    }

    /// Returns the union of this region and `other`.
    pub fn united(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let rects = ops::op::<Union, T>(&self.rects, &other.rects);
        Self {
            extents: self.extents.union(other.extents),
            rects,
        }
    }

    /// Returns the union of this region and `rect`.
    pub fn united_rect(&self, rect: Rect<T>) -> Self {
        self.united(&Self::new(rect))
    }

    /// Returns this region with `other` subtracted.
    pub fn subtracted(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() || !self.extents.intersects(&other.extents) {
            return self.clone();
        }
        let rects = ops::op::<Subtract, T>(&self.rects, &other.rects);
        Self {
            extents: ops::extents(&rects),
            rects,
        }
    }

    /// Returns this region with `rect` subtracted.
    pub fn subtracted_rect(&self, rect: Rect<T>) -> Self {
        self.subtracted(&Self::new(rect))
    }

    /// Returns the exclusive or of this region and `other`, the points
    /// covered by exactly one of the two.
    pub fn xored(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let rects = ops::op::<Xor, T>(&self.rects, &other.rects);
        Self {
            extents: ops::extents(&rects),
            rects,
        }
    }

    /// Returns the exclusive or of this region and `rect`.
    pub fn xored_rect(&self, rect: Rect<T>) -> Self {
        self.xored(&Self::new(rect))
    }

    /// Returns the intersection of this region and `other`.
    pub fn intersected(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() || !self.extents.intersects(&other.extents) {
            return Self::default();
        }
        let rects = ops::op::<Intersect, T>(&self.rects, &other.rects);
        Self {
            extents: ops::extents(&rects),
            rects,
        }
    }

    /// Returns the intersection of this region and `rect`.
    pub fn intersected_rect(&self, rect: Rect<T>) -> Self {
        self.intersected(&Self::new(rect))
    }

    /// Shifts the region by `dx` along the X axis and `dy` along the Y
    /// axis.
    pub fn translate(&mut self, dx: T, dy: T) {
        for rect in &mut self.rects {
            *rect = rect.translated(dx, dy);
        }
        self.extents = self.extents.translated(dx, dy);
    }

    /// Returns a copy of this region shifted by `dx` along the X axis and
    /// `dy` along the Y axis.
    pub fn translated(&self, dx: T, dy: T) -> Self {
        let mut res = self.clone();
        res.translate(dx, dy);
        res
    }
}

impl Region {
    /// Returns a copy of this region scaled by `sx` along the X axis and
    /// `sy` along the Y axis.
    pub fn scaled(&self, sx: f64, sy: f64) -> RegionF {
        scale_rects(self.rects.iter().map(|r| r.scaled(sx, sy)), sy)
    }

    /// Returns a copy of this region scaled by `sx` and `sy` and rounded
    /// out to integer coordinates.
    pub fn scaled_and_rounded_out(&self, sx: f64, sy: f64) -> Region {
        self.scaled(sx, sy).rounded_out()
    }

    /// Creates a region from pixman-style boxes.
    pub fn from_boxes(boxes: &[Box32]) -> Self {
        let rects: Vec<Rect> = boxes.iter().copied().map(Rect::from).collect();
        Self::from_rects_sorted_by_y(&rects)
    }

    /// Returns the rectangles of this region as pixman-style boxes.
    pub fn to_boxes(&self) -> Vec<Box32> {
        self.rects.iter().copied().map(Box32::from).collect()
    }
}

impl RegionF {
    /// Scales this region by `sx` along the X axis and `sy` along the Y
    /// axis.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        *self = self.scaled(sx, sy);
    }

    /// Returns a copy of this region scaled by `sx` along the X axis and
    /// `sy` along the Y axis.
    pub fn scaled(&self, sx: f64, sy: f64) -> RegionF {
        scale_rects(self.rects.iter().map(|r| r.scaled(sx, sy)), sy)
    }

    /// Returns this region with every rectangle rounded to the nearest
    /// integer coordinates. Rounding may make some rectangles disappear.
    pub fn rounded(&self) -> Region {
        self.rounded_with(RectF::rounded)
    }

    /// Returns this region shrunk to integer coordinates.
    pub fn rounded_in(&self) -> Region {
        self.rounded_with(RectF::rounded_in)
    }

    /// Returns this region grown to integer coordinates.
    pub fn rounded_out(&self) -> Region {
        self.rounded_with(RectF::rounded_out)
    }

    fn rounded_with(&self, round: impl Fn(&RectF) -> Rect) -> Region {
        // rounding is monotone, the tops stay sorted
        let rects: Vec<Rect> = self.rects.iter().map(round).collect();
        Region::from_rects_sorted_by_y(&rects)
    }
}

/// Rebuilds a region from per-rectangle scaled input. A negative y factor
/// reverses the band order, a negative x factor reverses the rectangles
/// within each band, which the constructor handles either way.
fn scale_rects(rects: impl Iterator<Item = RectF>, sy: f64) -> RegionF {
    let mut rects: Vec<RectF> = rects.collect();
    if sy < 0.0 {
        rects.reverse();
    }
    RegionF::from_rects_sorted_by_y(&rects)
}

impl From<&Region> for RegionF {
    fn from(region: &Region) -> Self {
        // the lift is exact, canonical form is preserved
        Self {
            rects: region.rects.iter().map(|r| RectF::from(*r)).collect(),
            extents: RectF::from(region.extents),
        }
    }
}

impl<T: Coord> Debug for Region<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Region")?;
        f.debug_list().entries(self.rects.iter()).finish()
    }
}

macro_rules! bin_ops {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $f:ident, $f_rect:ident) => {
        impl<'a, 'b, T: Coord> $op<&'b Region<T>> for &'a Region<T> {
            type Output = Region<T>;

            fn $method(self, rhs: &'b Region<T>) -> Region<T> {
                self.$f(rhs)
            }
        }

        impl<'a, T: Coord> $op<Rect<T>> for &'a Region<T> {
            type Output = Region<T>;

            fn $method(self, rhs: Rect<T>) -> Region<T> {
                self.$f_rect(rhs)
            }
        }

        impl<'a, T: Coord> $assign<&'a Region<T>> for Region<T> {
            fn $assign_method(&mut self, rhs: &'a Region<T>) {
                *self = self.$f(rhs);
            }
        }

        impl<T: Coord> $assign<Rect<T>> for Region<T> {
            fn $assign_method(&mut self, rhs: Rect<T>) {
                *self = self.$f_rect(rhs);
            }
        }
    };
}

bin_ops!(BitOr, bitor, BitOrAssign, bitor_assign, united, united_rect);
bin_ops!(Add, add, AddAssign, add_assign, united, united_rect);
bin_ops!(Sub, sub, SubAssign, sub_assign, subtracted, subtracted_rect);
bin_ops!(BitAnd, bitand, BitAndAssign, bitand_assign, intersected, intersected_rect);
bin_ops!(BitXor, bitxor, BitXorAssign, bitxor_assign, xored, xored_rect);
