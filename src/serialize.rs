use {
    crate::{
        coord::Coord,
        rect::{Rect, RectF},
        region::{Region, RegionF},
    },
    byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt},
    std::io::{self, Read, Write},
    thiserror::Error,
};

/// An error produced while reading a serialized region.
#[derive(Debug, Error)]
pub enum RegionReadError {
    #[error("could not read from the stream")]
    Io(#[from] io::Error),
    #[error("rectangle {0} has a non-positive width or height")]
    InvalidRect(usize),
    #[error("rectangle {0} has a non-finite coordinate")]
    NonFinite(usize),
}

impl Region {
    /// Writes this region in its stable binary form: the number of
    /// rectangles as a `u32` followed by `x`, `y`, `width`, `height` as
    /// `i32` per rectangle, all little-endian.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_u32::<LittleEndian>(self.rects().len() as u32)?;
        for rect in self.rects() {
            w.write_i32::<LittleEndian>(rect.x1())?;
            w.write_i32::<LittleEndian>(rect.y1())?;
            w.write_i32::<LittleEndian>(rect.width())?;
            w.write_i32::<LittleEndian>(rect.height())?;
        }
        Ok(())
    }

    /// Reads a region written by [`write_to`](Self::write_to).
    ///
    /// Input that is not in canonical form is re-canonicalized.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, RegionReadError> {
        let count = r.read_u32::<LittleEndian>()? as usize;
        let mut rects = Vec::with_capacity(count.min(4096));
        for i in 0..count {
            let x = r.read_i32::<LittleEndian>()?;
            let y = r.read_i32::<LittleEndian>()?;
            let width = r.read_i32::<LittleEndian>()?;
            let height = r.read_i32::<LittleEndian>()?;
            let rect = match Rect::new_sized(x, y, width, height) {
                Some(rect) if !rect.is_empty() => rect,
                _ => return Err(RegionReadError::InvalidRect(i)),
            };
            rects.push(rect);
        }
        Ok(canonicalize(rects))
    }
}

impl RegionF {
    /// Writes this region in its stable binary form: the number of
    /// rectangles as a `u32` followed by `x`, `y`, `width`, `height` as
    /// `f64` per rectangle, all little-endian.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_u32::<LittleEndian>(self.rects().len() as u32)?;
        for rect in self.rects() {
            w.write_f64::<LittleEndian>(rect.x1())?;
            w.write_f64::<LittleEndian>(rect.y1())?;
            w.write_f64::<LittleEndian>(rect.width())?;
            w.write_f64::<LittleEndian>(rect.height())?;
        }
        Ok(())
    }

    /// Reads a region written by [`write_to`](Self::write_to).
    ///
    /// Input that is not in canonical form is re-canonicalized.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, RegionReadError> {
        let count = r.read_u32::<LittleEndian>()? as usize;
        let mut rects = Vec::with_capacity(count.min(4096));
        for i in 0..count {
            let x = r.read_f64::<LittleEndian>()?;
            let y = r.read_f64::<LittleEndian>()?;
            let width = r.read_f64::<LittleEndian>()?;
            let height = r.read_f64::<LittleEndian>()?;
            if !x.is_finite() || !y.is_finite() || !width.is_finite() || !height.is_finite() {
                return Err(RegionReadError::NonFinite(i));
            }
            let rect = match RectF::new_sized(x, y, width, height) {
                Some(rect) if !rect.is_empty() => rect,
                _ => return Err(RegionReadError::InvalidRect(i)),
            };
            rects.push(rect);
        }
        Ok(canonicalize(rects))
    }
}

fn canonicalize<T: Coord>(rects: Vec<Rect<T>>) -> Region<T> {
    if crate::region::ops::is_canonical(&rects) {
        Region::from_sorted_rects(&rects)
    } else {
        log::debug!("deserialized rectangles are not in canonical form, rebuilding");
        Region::from_unsorted_rects(&rects)
    }
}
