//! Point and point-set model.
//!
//! - `Point`: 3-vector `(x, y, z)`. Hull construction only reads x and y.
//! - `PointSet`: owned, ordered points plus a dimensionality flag. For `Dim::Two`
//!   every z is normalized to zero on construction.

use nalgebra::Vector3;

/// A point in R³; planar sets keep `z == 0`.
pub type Point = Vector3<f64>;

/// Planar point `(x, y, 0)`.
#[inline]
pub fn xy(x: f64, y: f64) -> Point {
    Vector3::new(x, y, 0.0)
}

/// Dimensionality flag of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dim {
    #[default]
    Two,
    Three,
}

impl Dim {
    #[inline]
    pub fn is_3d(self) -> bool {
        matches!(self, Dim::Three)
    }

    /// `2` or `3`.
    #[inline]
    pub fn as_usize(self) -> usize {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }

    pub fn from_usize(d: usize) -> Option<Self> {
        match d {
            2 => Some(Dim::Two),
            3 => Some(Dim::Three),
            _ => None,
        }
    }
}

/// Owned, ordered collection of points.
///
/// Order carries no meaning on input. A set returned by the hull builder is the
/// counter-clockwise boundary starting at the lowest-y (then lowest-x) vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    dim: Dim,
}

impl PointSet {
    pub fn new(mut points: Vec<Point>, dim: Dim) -> Self {
        if dim == Dim::Two {
            flatten(&mut points);
        }
        Self { points, dim }
    }

    /// Planar set from `(x, y)` pairs.
    pub fn planar<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            points: coords.into_iter().map(|(x, y)| xy(x, y)).collect(),
            dim: Dim::Two,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline]
    pub fn is_3d(&self) -> bool {
        self.dim.is_3d()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Re-flag the set. Forcing `Dim::Two` drops every z coordinate.
    pub fn with_dim(self, dim: Dim) -> Self {
        Self::new(self.points, dim)
    }
}

impl From<Vec<Point>> for PointSet {
    /// Flags the set 3D iff some point has a non-zero z.
    fn from(points: Vec<Point>) -> Self {
        let dim = if points.iter().any(|p| p.z != 0.0) {
            Dim::Three
        } else {
            Dim::Two
        };
        Self { points, dim }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn flatten(points: &mut [Point]) {
    for p in points.iter_mut() {
        p.z = 0.0;
    }
}
