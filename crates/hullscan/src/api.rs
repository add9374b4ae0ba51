//! Flat entry points for loaders and drivers.
//!
//! Mirrors the operation names used by the command line and the benches; the
//! module-level functions remain the canonical definitions.

pub use crate::cfg::HullCfg;
pub use crate::error::HullError;
pub use crate::hull::compute_convex_hull;
pub use crate::metrics::{area as compute_area, perimeter as compute_path_length};
pub use crate::point::{Dim, Point, PointSet};
pub use crate::predicates::{distance as compute_distance, is_collinear};
