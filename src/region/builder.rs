use crate::{coord::Coord, rect::Rect, region::Region};

#[derive(Copy, Clone, Eq, PartialEq, Default)]
enum BuilderOp {
    #[default]
    Add,
    Sub,
}

/// Accumulates rectangle additions and subtractions into a region.
///
/// Consecutive edits with the same operation are batched and applied with a
/// single region operation, which is much cheaper than calling
/// [`united`](Region::united) or [`subtracted`](Region::subtracted) once
/// per rectangle.
pub struct RegionBuilder<T = i32> {
    base: Region<T>,
    op: BuilderOp,
    pending: Vec<Rect<T>>,
}

impl<T: Coord> Default for RegionBuilder<T> {
    fn default() -> Self {
        Self {
            base: Region::empty(),
            op: Default::default(),
            pending: Default::default(),
        }
    }
}

impl<T: Coord> RegionBuilder<T> {
    /// Adds `rect` to the region being built.
    pub fn add(&mut self, rect: Rect<T>) {
        self.set_op(BuilderOp::Add);
        self.pending.push(rect);
    }

    /// Subtracts `rect` from the region being built.
    pub fn sub(&mut self, rect: Rect<T>) {
        self.set_op(BuilderOp::Sub);
        self.pending.push(rect);
    }

    /// Applies all pending edits and returns the built region.
    pub fn get(&mut self) -> Region<T> {
        self.flush();
        self.base.clone()
    }

    /// Resets the builder to an empty region.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.base = Region::empty();
    }

    fn set_op(&mut self, op: BuilderOp) {
        if self.op != op {
            self.flush();
            self.op = op;
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let region = Region::from_unsorted_rects(&self.pending);
        self.pending.clear();
        self.base = match self.op {
            BuilderOp::Add => self.base.united(&region),
            BuilderOp::Sub => self.base.subtracted(&region),
        };
    }
}
