use crate::quantity::Tolerance;

use super::Point2;

/// Computes the circumcenter of three points.
///
/// The points are relabeled so that the longest pairwise side is the
/// reference side, which conditions the computation: the angle opposite
/// the longest side is the largest and its sine the furthest from zero.
/// The center is the reference side's midpoint offset perpendicular by
/// `cos(A) / (2 sin(A))` times the side vector, where `A` is the opposite
/// vertex angle.
///
/// Returns `None` when the points are collinear (`sin(A)` tolerance-zero)
/// or coincident (a side-length product tolerance-zero).
#[must_use]
pub fn circumcenter(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    tolerance: Tolerance,
) -> Option<Point2> {
    let d12 = (p2 - p1).norm();
    let d23 = (p3 - p2).norm();
    let d31 = (p1 - p3).norm();
    // Relabel (a, b, c) so the side b-c is the longest.
    let (a, b, c) = if d23 >= d31 && d23 >= d12 {
        (p1, p2, p3)
    } else if d31 >= d12 {
        (p2, p3, p1)
    } else {
        (p3, p1, p2)
    };

    let ab = b - a;
    let ac = c - a;
    let side_product = ab.norm() * ac.norm();
    if tolerance.eq_zero(side_product) {
        return None;
    }
    let sin_a = ab.perp(&ac) / side_product;
    if tolerance.eq_zero(sin_a) {
        return None;
    }
    let cos_a = ab.dot(&ac) / side_product;

    let bc = c - b;
    let midpoint = nalgebra::center(b, c);
    let offset = cos_a / (2.0 * sin_a);
    Some(Point2::new(
        midpoint.x - offset * bc.y,
        midpoint.y + offset * bc.x,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    #[test]
    fn right_triangle_center_is_hypotenuse_midpoint() {
        let c = circumcenter(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(0.0, 2.0),
            tol(),
        )
        .unwrap();
        assert!((c.x - 1.0).abs() < 1e-10);
        assert!((c.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn center_is_equidistant() {
        let p1 = Point2::new(1.0, 2.0);
        let p2 = Point2::new(5.0, -1.0);
        let p3 = Point2::new(-2.0, 4.0);
        let c = circumcenter(&p1, &p2, &p3, tol()).unwrap();
        let r1 = (p1 - c).norm();
        let r2 = (p2 - c).norm();
        let r3 = (p3 - c).norm();
        assert!((r1 - r2).abs() < 1e-9, "r1={r1} r2={r2}");
        assert!((r1 - r3).abs() < 1e-9, "r1={r1} r3={r3}");
    }

    #[test]
    fn orientation_does_not_matter() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(4.0, 0.0);
        let p3 = Point2::new(2.0, 3.0);
        let ccw = circumcenter(&p1, &p2, &p3, tol()).unwrap();
        let cw = circumcenter(&p1, &p3, &p2, tol()).unwrap();
        assert!((ccw - cw).norm() < 1e-10);
    }

    #[test]
    fn thin_triangle_is_conditioned() {
        // Nearly collinear but not degenerate.
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 0.01);
        let p3 = Point2::new(20.0, 0.0);
        let c = circumcenter(&p1, &p2, &p3, tol()).unwrap();
        let r1 = (p1 - c).norm();
        let r2 = (p2 - c).norm();
        assert!((r1 - r2).abs() < 1e-6 * r1, "r1={r1} r2={r2}");
    }

    #[test]
    fn collinear_points_have_no_center() {
        let c = circumcenter(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(2.0, 2.0),
            tol(),
        );
        assert!(c.is_none());
    }

    #[test]
    fn coincident_points_have_no_center() {
        let p = Point2::new(1.0, 1.0);
        assert!(circumcenter(&p, &p, &Point2::new(2.0, 0.0), tol()).is_none());
        assert!(circumcenter(&p, &p, &p, tol()).is_none());
    }
}
