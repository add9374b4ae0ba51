//! Area and perimeter of a finished hull, treated as a closed polygon.

use crate::point::PointSet;
use crate::predicates::distance;

/// Shoelace area in the x–y plane. `None` for fewer than 3 vertices.
pub fn area(hull: &PointSet) -> Option<f64> {
    let pts = hull.points();
    if pts.len() < 3 {
        return None;
    }
    let twice: f64 = pts
        .iter()
        .zip(pts.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    Some(twice.abs() / 2.0)
}

/// Sum of edge lengths around the closed polygon. `None` for fewer than 2 vertices.
///
/// Uses the full 3D distance, so z contributes for 3D sets.
pub fn perimeter(hull: &PointSet) -> Option<f64> {
    let pts = hull.points();
    if pts.len() < 2 {
        return None;
    }
    Some(
        pts.iter()
            .zip(pts.iter().cycle().skip(1))
            .map(|(a, b)| distance(a, b))
            .sum(),
    )
}

/// Both metrics of one hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullMetrics {
    pub area: Option<f64>,
    pub perimeter: Option<f64>,
}

impl HullMetrics {
    pub fn of(hull: &PointSet) -> Self {
        Self {
            area: area(hull),
            perimeter: perimeter(hull),
        }
    }
}
