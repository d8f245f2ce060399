//! A banded rectangular region algebra.
//!
//! A [`Region`] represents an arbitrary axis-aligned area of the plane as a
//! canonical list of non-overlapping rectangles. The canonical form makes
//! equality of point sets the same as equality of rectangle lists, which is
//! what makes the type suitable for damage tracking, clipping, and
//! occlusion reasoning in a compositor.
//!
//! ```rust
//! use region2d::{Rect, Region};
//!
//! let damage = Region::new(Rect::new_sized(0, 0, 100, 100).unwrap());
//! let occluded = Region::new(Rect::new_sized(25, 25, 50, 50).unwrap());
//! let visible = damage.subtracted(&occluded);
//! assert!(visible.contains(10, 10));
//! assert!(!visible.contains(50, 50));
//! ```
//!
//! [`RegionF`] is the real-valued variant. It shares the algorithm and
//! performs no fuzzy floating point comparisons, round explicitly before
//! comparing the outputs of transforms.

#![allow(clippy::comparison_chain)]

pub mod coord;
pub mod rect;
pub mod region;
pub mod serialize;

pub use self::{
    coord::Coord,
    rect::{Box32, Rect, RectF},
    region::{Region, RegionBuilder, RegionF},
    serialize::RegionReadError,
};
