//! Convex hulls of planar point sets via Graham's scan.
//!
//! Layout
//! - `point`: `Point` / `PointSet` data model (z is carried but ignored by the hull).
//! - `predicates`: distance, orientation, collinearity.
//! - `hull`: pivot selection, parallel angular sort, stack sweep.
//! - `metrics`: shoelace area and closed-path perimeter of a finished hull.
//! - `synthetic`: random and regular point sets for benches and tests.
//!
//! All geometry is computed in the x–y plane. 3D inputs are projected by
//! ignoring z; the z of kept vertices is passed through untouched.

pub mod api;
pub mod cfg;
pub mod error;
pub mod hull;
pub mod metrics;
pub mod point;
pub mod predicates;
pub mod synthetic;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::HullCfg;
pub use error::HullError;
pub use hull::{compute_convex_hull, convex_hull};
pub use metrics::{area, perimeter, HullMetrics};
pub use point::{xy, Dim, Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{HullCfg, COLLINEAR_EPS};
    pub use crate::error::HullError;
    pub use crate::hull::{compute_convex_hull, convex_hull};
    pub use crate::metrics::{area, perimeter, HullMetrics};
    pub use crate::point::{xy, Dim, Point, PointSet};
    pub use crate::predicates::{distance, is_collinear, is_collinear_eps, orientation};
    pub use crate::synthetic::{regular_polygon, uniform_points};
}
