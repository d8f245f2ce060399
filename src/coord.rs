use std::{cmp::Ordering, fmt::Debug};

/// A coordinate scalar for rectangles and regions.
///
/// All comparisons are exact. The floating point implementation performs no
/// fuzzy comparisons whatsoever, rounding is an explicit step performed by
/// the caller.
pub trait Coord: Copy + PartialEq + PartialOrd + Debug + Default + 'static {
    const ZERO: Self;

    /// Top and left edge of the infinite region.
    const INFINITE_ORIGIN: Self;

    /// Width and height of the infinite region.
    const INFINITE_EXTENT: Self;

    fn cmp(self, other: Self) -> Ordering;

    fn add(self, other: Self) -> Self;

    fn sub(self, other: Self) -> Self;

    fn min(self, other: Self) -> Self {
        match self.cmp(other) {
            Ordering::Greater => other,
            _ => self,
        }
    }

    fn max(self, other: Self) -> Self {
        match self.cmp(other) {
            Ordering::Less => other,
            _ => self,
        }
    }
}

impl Coord for i32 {
    const ZERO: Self = 0;
    // Starting at half the minimum leaves room to translate the infinite
    // region by modest offsets without overflowing.
    const INFINITE_ORIGIN: Self = i32::MIN / 2;
    const INFINITE_EXTENT: Self = i32::MAX;

    fn cmp(self, other: Self) -> Ordering {
        Ord::cmp(&self, &other)
    }

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }
}

impl Coord for f64 {
    const ZERO: Self = 0.0;
    // f64::MIN is -f64::MAX, so this is the analog of the integer origin
    // rather than the smallest positive normal.
    const INFINITE_ORIGIN: Self = f64::MIN / 2.0;
    const INFINITE_EXTENT: Self = f64::MAX;

    fn cmp(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }
}
