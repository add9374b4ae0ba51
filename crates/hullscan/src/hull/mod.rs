//! Graham's scan.
//!
//! Pipeline
//! - Reject non-finite coordinates (`NaN` or infinite x, y or z).
//! - Copy the input into a private working buffer (the caller's set is never touched).
//! - Swap the pivot (lowest y, then lowest x) into slot 0.
//! - Sort slots `1..` by polar angle around the pivot (`sort::sort_by_polar_angle`).
//! - Sweep the sorted points with a stack, popping while the last two hull points and
//!   the candidate fail to make a strict left turn (`orientation <= 0`).
//!
//! The result is the strict hull: collinear boundary points are dropped. All-collinear
//! inputs collapse to a 2-point "hull" (the two extremes); this is not an error.

pub mod sort;

use crate::cfg::HullCfg;
use crate::error::HullError;
use crate::point::{Point, PointSet};
use crate::predicates::orientation;

pub use sort::{chunk_ranges, lowest_point, polar_order, sort_by_polar_angle, PolarKey};

/// Convex hull with default tolerances and `threads` sort workers (`< 1` is clamped).
pub fn compute_convex_hull(set: &PointSet, threads: usize) -> Result<PointSet, HullError> {
    convex_hull(set, HullCfg::default().with_threads(threads))
}

/// Convex hull of `set`, counter-clockwise from the pivot.
///
/// Errors
/// - `TooFewPoints` for fewer than 3 input points.
/// - `NonFinite` for the first point with a `NaN` or infinite coordinate.
/// - `ThreadPool` when sort workers cannot be started.
pub fn convex_hull(set: &PointSet, cfg: HullCfg) -> Result<PointSet, HullError> {
    let count = set.len();
    if count < 3 {
        tracing::debug!(count, "convex hull requires at least 3 points");
        return Err(HullError::TooFewPoints { count });
    }
    if let Some(index) = set.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
        tracing::debug!(count, index, "non-finite coordinate");
        return Err(HullError::NonFinite { index });
    }
    let threads = cfg.effective_threads();
    tracing::debug!(count, threads, "convex_hull");

    let mut working: Vec<Point> = set.points().to_vec();
    let pivot_idx = lowest_point(&working).ok_or(HullError::TooFewPoints { count })?;
    working.swap(0, pivot_idx);
    let pivot = working[0];
    sort_by_polar_angle(&mut working[1..], pivot, threads)?;

    let hull = sweep(&working);
    tracing::debug!(count, hull = hull.len(), "convex_hull done");
    Ok(PointSet::new(hull, set.dim()))
}

/// Stack sweep over `sorted` (pivot first, then polar order).
fn sweep(sorted: &[Point]) -> Vec<Point> {
    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len());
    hull.extend_from_slice(&sorted[..2]);
    for p in &sorted[2..] {
        while let [.., a, b] = hull.as_slice() {
            if orientation(a, b, p) > 0.0 {
                break;
            }
            hull.pop();
        }
        hull.push(*p);
    }
    hull.shrink_to_fit();
    hull
}
