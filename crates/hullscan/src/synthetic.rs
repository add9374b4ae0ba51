//! Synthetic point sets for benchmarks and tests.
//!
//! - `uniform_points`: i.i.d. uniform coordinates in `[0, extent)` (z only for `Dim::Three`).
//! - `regular_polygon`: `n` equally spaced points on a circle; every point is a hull vertex.

use rand::Rng;

use crate::point::{Dim, Point, PointSet};

/// Coordinate range used by the benchmark driver.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// `count` uniform random points drawn from `rng`.
pub fn uniform_points<R: Rng + ?Sized>(
    count: usize,
    dim: Dim,
    extent: f64,
    rng: &mut R,
) -> PointSet {
    let extent = if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        DEFAULT_EXTENT
    };
    let points = (0..count)
        .map(|_| {
            let x = rng.gen::<f64>() * extent;
            let y = rng.gen::<f64>() * extent;
            let z = if dim.is_3d() {
                rng.gen::<f64>() * extent
            } else {
                0.0
            };
            Point::new(x, y, z)
        })
        .collect();
    PointSet::new(points, dim)
}

/// Vertices of a regular `n`-gon of circumradius `radius` centered at the origin.
///
/// The first vertex sits at angle `-π/2 + π/n`, which places one edge flat on the bottom.
pub fn regular_polygon(n: usize, radius: f64) -> PointSet {
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    let phase = -std::f64::consts::FRAC_PI_2 + delta / 2.0;
    PointSet::planar((0..n).map(|k| {
        let th = phase + (k as f64) * delta;
        (radius * th.cos(), radius * th.sin())
    }))
}
