//! Geometric primitives on `Point`.

use crate::cfg::COLLINEAR_EPS;
use crate::point::Point;

/// Euclidean distance in R³ (z is zero for planar sets).
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a - b).norm()
}

/// Twice the signed area of triangle `o, a, b` in the x–y plane.
///
/// Positive for a counter-clockwise turn `o→a→b`, negative for clockwise.
#[inline]
pub fn orientation(o: &Point, a: &Point, b: &Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// `|orientation(a, b, c)| < COLLINEAR_EPS`.
#[inline]
pub fn is_collinear(a: &Point, b: &Point, c: &Point) -> bool {
    is_collinear_eps(a, b, c, COLLINEAR_EPS)
}

/// Collinearity with a caller-chosen absolute tolerance.
#[inline]
pub fn is_collinear_eps(a: &Point, b: &Point, c: &Point, eps: f64) -> bool {
    orientation(a, b, c).abs() < eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::xy;

    #[test]
    fn distance_planar_and_spatial() {
        assert!((distance(&xy(0.0, 0.0), &xy(3.0, 4.0)) - 5.0).abs() < 1e-12);
        let d = distance(&Point::new(0.0, 0.0, 0.0), &Point::new(1.0, 2.0, 2.0));
        assert!((d - 3.0).abs() < 1e-12);
        assert_eq!(distance(&xy(2.5, -1.0), &xy(2.5, -1.0)), 0.0);
    }

    #[test]
    fn orientation_sign_follows_turn() {
        let o = xy(0.0, 0.0);
        assert!(orientation(&o, &xy(1.0, 0.0), &xy(0.0, 1.0)) > 0.0);
        assert!(orientation(&o, &xy(0.0, 1.0), &xy(1.0, 0.0)) < 0.0);
        assert_eq!(orientation(&o, &xy(1.0, 1.0), &xy(2.0, 2.0)), 0.0);
        // z never participates
        let lifted = Point::new(0.0, 1.0, 42.0);
        assert_eq!(orientation(&o, &xy(1.0, 0.0), &lifted), 1.0);
    }

    #[test]
    fn collinear_default_tolerance() {
        assert!(is_collinear(&xy(0.0, 0.0), &xy(1.0, 1.0), &xy(2.0, 2.0)));
        assert!(!is_collinear(&xy(0.0, 0.0), &xy(1.0, 0.0), &xy(0.0, 1.0)));
        assert!(is_collinear(&xy(0.0, 0.0), &xy(1.0, 0.0), &xy(2.0, 1e-7)));
    }

    #[test]
    fn absolute_tolerance_is_scale_blind() {
        // Same shape, scaled by 1e6: the tiny offset becomes "non-collinear".
        let (a, b) = (xy(0.0, 0.0), xy(1.0, 0.0));
        let c = xy(2.0, 1e-7);
        assert!(is_collinear(&a, &b, &c));
        let s = 1e6;
        assert!(!is_collinear(&(a * s), &(b * s), &(c * s)));
        assert!(is_collinear_eps(&(a * s), &(b * s), &(c * s), 1e6));
    }
}
