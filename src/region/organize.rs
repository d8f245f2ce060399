use {
    crate::{
        coord::Coord,
        rect::Rect,
        region::{
            Container,
            ops::{Bands, coalesce},
        },
    },
    std::{cmp::Ordering, collections::BinaryHeap, ops::Deref},
};

/// Splits an arbitrary collection of rectangles into canonical bands.
///
/// The rectangles are cut at every distinct top or bottom edge and the
/// resulting slabs are merged horizontally, then vertically adjacent bands
/// with the same horizontal layout are coalesced. Empty rectangles are
/// skipped.
pub(super) fn rects_to_bands<T: Coord>(rects_tmp: &[Rect<T>]) -> Container<T> {
    #[derive(Copy, Clone)]
    struct W<T>(Rect<T>);
    impl<T: Coord> Eq for W<T> {}
    impl<T: Coord> PartialEq<Self> for W<T> {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl<T: Coord> PartialOrd<Self> for W<T> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl<T: Coord> Ord for W<T> {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0
                .y1
                .cmp(other.0.y1)
                .then_with(|| self.0.x1.cmp(other.0.x1))
                .reverse()
        }
    }
    impl<T> Deref for W<T> {
        type Target = Rect<T>;
        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    let ys = {
        let mut tmp: Vec<_> = rects_tmp.iter().flat_map(|r| [r.y1, r.y2]).collect();
        tmp.sort_unstable_by(|a, b| a.cmp(*b));
        let mut last = None;
        let mut res = vec![];
        for y in tmp {
            if Some(y) != last {
                last = Some(y);
                res.push(y);
            }
        }
        res
    };

    let mut rects = BinaryHeap::with_capacity(rects_tmp.len());
    for rect in rects_tmp.iter().copied() {
        if !rect.is_empty() {
            rects.push(W(rect));
        }
    }

    let mut res = Container::new();

    for pair in ys.windows(2) {
        let (y1, y2) = (pair[0], pair[1]);
        loop {
            macro_rules! check_rect {
                ($rect:expr) => {{
                    if $rect.y1 != y1 {
                        break;
                    }
                    rects.pop();
                    if y2 < $rect.y2 {
                        $rect.0.y1 = y2;
                        rects.push($rect);
                    }
                }};
            }
            if let Some(mut rect) = rects.peek().copied() {
                check_rect!(rect);
                let mut x1 = rect.x1;
                let mut x2 = rect.x2;
                while let Some(mut rect) = rects.peek().copied() {
                    check_rect!(rect);
                    if rect.x1 > x2 {
                        res.push(Rect { x1, x2, y1, y2 });
                        x1 = rect.x1;
                        x2 = rect.x2;
                    } else {
                        x2 = x2.max(rect.x2);
                    }
                }
                res.push(Rect { x1, x2, y1, y2 });
            }
            break;
        }
    }

    let mut needs_merge = false;
    let mut num_elements = res.len();
    let mut bands = Bands { rects: &res }.peekable();
    while let Some(band) = bands.next() {
        let next = match bands.peek() {
            Some(next) => next,
            _ => break,
        };
        if band.can_merge_with(next) {
            needs_merge = true;
            num_elements -= band.rects.len();
        }
    }

    if !needs_merge {
        res.shrink_to_fit();
        return res;
    }

    let mut merged = Container::with_capacity(num_elements);
    let mut bands = Bands { rects: &res }.peekable();
    while let Some(mut band) = bands.next() {
        while let Some(next) = bands.peek() {
            if band.can_merge_with(next) {
                band.y2 = next.y2;
                bands.next();
            } else {
                break;
            }
        }
        for mut rect in band.rects.iter().copied() {
            rect.y2 = band.y2;
            merged.push(rect);
        }
    }

    merged
}

/// Splits rectangles sorted by their top edge into canonical bands.
///
/// Runs of rectangles sharing a top edge are sorted and merged into one
/// band each and vertically adjacent bands are coalesced on the fly. Input
/// whose runs have ragged bottom edges or overlap vertically is handed to
/// the general sweep instead. Empty rectangles are skipped.
pub(super) fn sorted_by_y_to_bands<T: Coord>(rects: &[Rect<T>]) -> Container<T> {
    let mut res = Container::new();
    let mut band: Vec<Rect<T>> = Vec::new();

    let mut prev_band_y2 = T::ZERO;
    let mut prev_band_start = 0;

    let mut i = 0;
    while i < rects.len() {
        if rects[i].is_empty() {
            i += 1;
            continue;
        }
        let y1 = rects[i].y1;
        let y2 = rects[i].y2;
        if !res.is_empty() && y1 < prev_band_y2 {
            // the bands overlap, let the general sweep sort it out
            return rects_to_bands(rects);
        }
        band.clear();
        band.push(rects[i]);
        i += 1;
        while i < rects.len() && rects[i].y1 == y1 {
            let rect = rects[i];
            i += 1;
            if rect.is_empty() {
                continue;
            }
            if rect.y2 != y2 {
                // ragged run, not a band
                return rects_to_bands(rects);
            }
            band.push(rect);
        }
        band.sort_unstable_by(|a, b| a.x1.cmp(b.x1));

        let cur_band_start = res.len();
        let mut x1 = band[0].x1;
        let mut x2 = band[0].x2;
        for rect in &band[1..] {
            if rect.x1 <= x2 {
                x2 = x2.max(rect.x2);
            } else {
                res.push(Rect { x1, y1, x2, y2 });
                x1 = rect.x1;
                x2 = rect.x2;
            }
        }
        res.push(Rect { x1, y1, x2, y2 });

        if prev_band_y2 != y1 || !coalesce(&mut res, prev_band_start, cur_band_start, y2) {
            prev_band_start = cur_band_start;
        }
        prev_band_y2 = y2;
    }

    res.shrink_to_fit();
    res
}
