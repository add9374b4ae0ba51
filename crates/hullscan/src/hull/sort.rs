//! Angular sort around the pivot, parallelized as a chunked merge sort.
//!
//! Model
//! - Every point gets a `PolarKey` (angle around the pivot, then planar distance),
//!   computed once. Keys compare with `f64::total_cmp`, so the order is total and
//!   the same for every worker.
//! - Split the range into `T` contiguous chunks whose sizes differ by at most one
//!   (extras go to the first chunks; empty chunks are never scheduled).
//! - Stable-sort every chunk on its own worker, then merge adjacent runs pairwise,
//!   one parallel round at a time, until a single run remains.
//! - Each round is a join-all barrier; workers only touch their own disjoint
//!   output slice and read the previous round's buffer.
//!
//! Merges keep the left element on ties and the key order is total, so the output
//! equals a sequential stable sort by key and does not depend on `T`.
//!
//! No tolerance enters the order: points on one ray from the pivot share an angle
//! and fall back to distance (nearer first); nearly collinear points keep their
//! angular order.

use std::cmp::Ordering;
use std::ops::Range;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::HullError;
use crate::point::Point;

/// Index of the lowest-y point, ties broken by lowest x (first occurrence wins).
///
/// Coordinates are expected to be finite; `convex_hull` rejects anything else first.
pub fn lowest_point(points: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let q = &points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Sort key of a point around a pivot: polar angle, then x-y distance.
///
/// With the pivot at the lowest point every angle lies in `[0, π]`.
#[derive(Clone, Copy, Debug)]
pub struct PolarKey {
    pub angle: f64,
    pub dist: f64,
}

impl PolarKey {
    pub fn new(pivot: &Point, p: &Point) -> Self {
        // `+ 0.0` folds -0 into +0 so points level with the pivot sit at angle 0, not -0 or -π
        let dx = (p.x - pivot.x) + 0.0;
        let dy = (p.y - pivot.y) + 0.0;
        Self {
            angle: dy.atan2(dx),
            dist: dx.hypot(dy),
        }
    }
}

impl Ord for PolarKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.angle
            .total_cmp(&other.angle)
            .then_with(|| self.dist.total_cmp(&other.dist))
    }
}

impl PartialOrd for PolarKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PolarKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PolarKey {}

/// Polar-angle order around `pivot`, nearer first on a shared ray.
///
/// Same order as comparing `PolarKey`s; handy for one-off comparisons and
/// sequential reference sorts.
pub fn polar_order(pivot: Point) -> impl Fn(&Point, &Point) -> Ordering + Sync + Copy {
    move |p: &Point, q: &Point| PolarKey::new(&pivot, p).cmp(&PolarKey::new(&pivot, q))
}

/// Contiguous, non-empty chunk ranges covering `0..len`.
pub fn chunk_ranges(len: usize, threads: usize) -> Vec<Range<usize>> {
    let threads = threads.max(1);
    let base = len / threads;
    let extra = len % threads;
    let mut out = Vec::with_capacity(threads.min(len));
    let mut start = 0;
    for i in 0..threads {
        let size = base + usize::from(i < extra);
        if size == 0 {
            break;
        }
        out.push(start..start + size);
        start += size;
    }
    out
}

/// Sort `points` by polar angle around `pivot` using up to `threads` workers.
///
/// `points` must not contain the pivot slot itself. `threads < 1` is treated as 1.
pub fn sort_by_polar_angle(
    points: &mut [Point],
    pivot: Point,
    threads: usize,
) -> Result<(), HullError> {
    let threads = threads.max(1);
    let mut keyed: Vec<(PolarKey, Point)> =
        points.iter().map(|p| (PolarKey::new(&pivot, p), *p)).collect();
    let cmp = |a: &(PolarKey, Point), b: &(PolarKey, Point)| a.0.cmp(&b.0);

    if threads == 1 || keyed.len() < 2 {
        keyed.sort_by(cmp);
    } else {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(HullError::thread_pool)?;
        pool.install(|| parallel_merge_sort(&mut keyed, threads, &cmp));
    }

    for (slot, (_, p)) in points.iter_mut().zip(keyed) {
        *slot = p;
    }
    Ok(())
}

/// Chunked stable sort of `items` followed by pairwise merge rounds; runs inside the caller's pool.
fn parallel_merge_sort<T, F>(items: &mut [T], threads: usize, cmp: &F)
where
    T: Copy + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let mut runs = chunk_ranges(items.len(), threads);
    tracing::trace!(threads, chunks = runs.len(), "polar sort");

    split_ranges_mut(items, &runs)
        .into_par_iter()
        .for_each(|chunk| chunk.sort_by(cmp));

    let mut buf = items.to_vec();
    // true when the current runs live in `buf`
    let mut in_buf = false;
    while runs.len() > 1 {
        runs = if in_buf {
            merge_round(&buf, items, &runs, cmp)
        } else {
            merge_round(items, &mut buf, &runs, cmp)
        };
        in_buf = !in_buf;
    }
    if in_buf {
        items.copy_from_slice(&buf);
    }
}

fn split_ranges_mut<'a, T>(mut rest: &'a mut [T], ranges: &[Range<usize>]) -> Vec<&'a mut [T]> {
    let mut out = Vec::with_capacity(ranges.len());
    for r in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(r.len());
        out.push(head);
        rest = tail;
    }
    out
}

/// Merge runs `(0,1), (2,3), …` of `src` into `dst`; an unpaired last run is copied.
fn merge_round<T, F>(src: &[T], dst: &mut [T], runs: &[Range<usize>], cmp: &F) -> Vec<Range<usize>>
where
    T: Copy + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let mut jobs = Vec::with_capacity(runs.len().div_ceil(2));
    let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
    let mut rest: &mut [T] = dst;
    for pair in runs.chunks(2) {
        let start = pair[0].start;
        let end = pair[pair.len() - 1].end;
        let (out, tail) = std::mem::take(&mut rest).split_at_mut(end - start);
        rest = tail;
        let left = &src[pair[0].clone()];
        let right = match pair.get(1) {
            Some(r) => &src[r.clone()],
            None => &src[end..end],
        };
        jobs.push((left, right, out));
        merged.push(start..end);
    }
    jobs.into_par_iter()
        .for_each(|(left, right, out)| merge_into(left, right, out, cmp));
    merged
}

fn merge_into<T, F>(left: &[T], right: &[T], out: &mut [T], cmp: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left =
            j >= right.len() || (i < left.len() && cmp(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
