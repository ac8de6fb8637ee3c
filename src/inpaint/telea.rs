//! Fast-marching inpainting (Telea 2004).
//!
//! Masked pixels are filled in order of their distance `T` from the mask
//! boundary. Each pixel is estimated from the already-known pixels within
//! `radius` using a first-order extrapolation
//! `I(q) + ∇I(q)·(p − q)`, weighted by direction, distance and level-set
//! agreement.
use super::mask::MASK_CLEAR;
use crate::error::TrackerError;
use crate::image::Plane;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

const UNREACHED: f32 = 1.0e6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flag {
    Known,
    Band,
    Inside,
}

#[derive(Clone, Copy, Debug)]
struct Node {
    t: f32,
    idx: usize,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    // Reversed: BinaryHeap pops the smallest arrival time first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .t
            .total_cmp(&self.t)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

struct Field {
    w: usize,
    h: usize,
    flags: Vec<Flag>,
    t: Vec<f32>,
    values: Vec<f32>,
}

impl Field {
    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Flag and arrival time at a signed position; outside counts as
    /// unreached.
    #[inline]
    fn at(&self, x: isize, y: isize) -> (Flag, f32) {
        if x < 0 || y < 0 || x >= self.w as isize || y >= self.h as isize {
            return (Flag::Inside, UNREACHED);
        }
        let i = self.idx(x as usize, y as usize);
        (self.flags[i], self.t[i])
    }

    #[inline]
    fn is_known(&self, x: isize, y: isize) -> bool {
        self.at(x, y).0 != Flag::Inside
    }

    /// Eikonal update from two orthogonal neighbours.
    fn solve(&self, (x1, y1): (isize, isize), (x2, y2): (isize, isize)) -> f32 {
        let (f1, t1) = self.at(x1, y1);
        let (f2, t2) = self.at(x2, y2);
        match (f1 != Flag::Inside, f2 != Flag::Inside) {
            (true, true) => {
                let disc = 2.0 - (t1 - t2) * (t1 - t2);
                if disc < 0.0 {
                    return 1.0 + t1.min(t2);
                }
                let r = disc.sqrt();
                let s = (t1 + t2 - r) * 0.5;
                if s >= t1 && s >= t2 {
                    s
                } else {
                    let s = s + r;
                    if s >= t1 && s >= t2 {
                        s
                    } else {
                        1.0 + t1.min(t2)
                    }
                }
            }
            (true, false) => 1.0 + t1,
            (false, true) => 1.0 + t2,
            (false, false) => UNREACHED,
        }
    }

    fn arrival_time(&self, x: isize, y: isize) -> f32 {
        let a = self.solve((x, y - 1), (x - 1, y));
        let b = self.solve((x, y + 1), (x - 1, y));
        let c = self.solve((x, y - 1), (x + 1, y));
        let d = self.solve((x, y + 1), (x + 1, y));
        a.min(b).min(c).min(d)
    }

    /// Central difference where both neighbours are known, one-sided
    /// otherwise, zero when neither is.
    fn gradient<F: Fn(usize) -> f32>(&self, x: isize, y: isize, value: F) -> (f32, f32) {
        let here = value(self.idx(x as usize, y as usize));
        let axis = |dx: isize, dy: isize| -> f32 {
            let (px, py) = (x + dx, y + dy);
            let (mx, my) = (x - dx, y - dy);
            match (self.is_known(px, py), self.is_known(mx, my)) {
                (true, true) => {
                    (value(self.idx(px as usize, py as usize))
                        - value(self.idx(mx as usize, my as usize)))
                        * 0.5
                }
                (true, false) => value(self.idx(px as usize, py as usize)) - here,
                (false, true) => here - value(self.idx(mx as usize, my as usize)),
                (false, false) => 0.0,
            }
        };
        (axis(1, 0), axis(0, 1))
    }

    fn estimate(&self, x: isize, y: isize, radius: isize) -> Option<f32> {
        let tp = self.t[self.idx(x as usize, y as usize)];
        let grad_t = self.gradient(x, y, |i| self.t[i]);
        let r2_max = radius * radius;

        let mut num = 0.0f32;
        let mut den = 0.0f32;
        for qy in (y - radius)..=(y + radius) {
            for qx in (x - radius)..=(x + radius) {
                let (rx, ry) = (x - qx, y - qy);
                let r2 = rx * rx + ry * ry;
                if r2 == 0 || r2 > r2_max || !self.is_known(qx, qy) {
                    continue;
                }
                let (rx, ry, r2) = (rx as f32, ry as f32, r2 as f32);
                let q = self.idx(qx as usize, qy as usize);

                let dst = 1.0 / (r2 * r2.sqrt());
                let lev = 1.0 / (1.0 + (self.t[q] - tp).abs());
                let mut dir = rx * grad_t.0 + ry * grad_t.1;
                if dir.abs() <= 0.01 {
                    dir = 1.0e-6;
                }
                let weight = (dir * dst * lev).abs();

                let grad_i = self.gradient(qx, qy, |i| self.values[i]);
                let predicted = self.values[q] + grad_i.0 * rx + grad_i.1 * ry;
                num += weight * predicted;
                den += weight;
            }
        }
        (den > 0.0).then(|| num / den)
    }
}

/// Fill every pixel of `image` where `mask` is set, in place.
///
/// Returns the number of pixels filled. Pixels unreachable from any known
/// pixel (an entirely masked image) are left untouched.
pub fn inpaint_telea(
    image: &mut Plane<u8>,
    mask: &Plane<u8>,
    radius: usize,
) -> Result<usize, TrackerError> {
    if (image.w, image.h) != (mask.w, mask.h) {
        return Err(TrackerError::FrameSizeMismatch {
            expected: (image.w, image.h),
            actual: (mask.w, mask.h),
        });
    }
    let (w, h) = (image.w, image.h);
    if w == 0 || h == 0 {
        return Ok(0);
    }

    let mut field = Field {
        w,
        h,
        flags: vec![Flag::Known; w * h],
        t: vec![0.0; w * h],
        values: image.data.iter().map(|&v| v as f32).collect(),
    };
    for (i, &m) in mask.data.iter().enumerate() {
        if m != MASK_CLEAR {
            field.flags[i] = Flag::Inside;
            field.t[i] = UNREACHED;
        }
    }

    let mut heap = BinaryHeap::new();
    for y in 0..h as isize {
        for x in 0..w as isize {
            let i = field.idx(x as usize, y as usize);
            if field.flags[i] != Flag::Known {
                continue;
            }
            let borders_hole = [(1, 0), (-1, 0), (0, 1), (0, -1)]
                .iter()
                .any(|&(dx, dy)| {
                    let (nx, ny) = (x + dx, y + dy);
                    nx >= 0
                        && ny >= 0
                        && nx < w as isize
                        && ny < h as isize
                        && field.flags[field.idx(nx as usize, ny as usize)] == Flag::Inside
                });
            if borders_hole {
                field.flags[i] = Flag::Band;
                heap.push(Node { t: 0.0, idx: i });
            }
        }
    }

    let radius = radius.max(1) as isize;
    let mut filled = 0usize;
    while let Some(Node { idx, .. }) = heap.pop() {
        field.flags[idx] = Flag::Known;
        let (x, y) = ((idx % w) as isize, (idx / w) as isize);
        for (dx, dy) in [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                continue;
            }
            let n = field.idx(nx as usize, ny as usize);
            if field.flags[n] != Flag::Inside {
                continue;
            }
            field.t[n] = field.arrival_time(nx, ny);
            if let Some(v) = field.estimate(nx, ny, radius) {
                field.values[n] = v.clamp(0.0, 255.0);
            }
            field.flags[n] = Flag::Band;
            heap.push(Node {
                t: field.t[n],
                idx: n,
            });
            filled += 1;
        }
    }

    for ((dst, &v), &m) in image.data.iter_mut().zip(&field.values).zip(&mask.data) {
        if m != MASK_CLEAR {
            *dst = v.round() as u8;
        }
    }
    Ok(filled)
}
