use crate::quantity::Tolerance;

use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the
/// directions are not parallel under the given tolerance.
#[must_use]
pub fn line_line_intersect(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    tolerance: Tolerance,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if tolerance.eq_zero(cross) {
        return None;
    }
    let delta = p2 - p1;
    let t = delta.perp(d2) / cross;
    let u = delta.perp(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection.
///
/// Segments `p`–`p1` and `q`–`q1`. Returns the unique intersection point
/// when the segments cross; for collinear segments, a shared endpoint is
/// returned only when the overlap is exactly that point, and longer
/// overlaps yield `None` (no unique intersection).
///
/// When both parameters are valid, the point is interpolated along the
/// parametrization whose parameter is closer to 0 or 1, which keeps the
/// result pinned to an endpoint when the crossing happens there.
#[must_use]
pub fn segment_segment_intersect(
    p: &Point2,
    p1: &Point2,
    q: &Point2,
    q1: &Point2,
    tolerance: Tolerance,
) -> Option<Point2> {
    let r = p1 - p;
    let s = q1 - q;
    let delta = q - p;
    let r_cross_s = r.perp(&s);

    if tolerance.eq_zero(r_cross_s) {
        if !tolerance.eq_zero(delta.perp(&r)) {
            // Parallel but not collinear.
            return None;
        }
        return collinear_touch_point(p, &r, q, q1, tolerance);
    }

    let t = delta.perp(&s) / r_cross_s;
    let u = delta.perp(&r) / r_cross_s;
    let eps = tolerance.epsilon();
    if t < -eps || t > 1.0 + eps || u < -eps || u > 1.0 + eps {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    let u = u.clamp(0.0, 1.0);
    if t.min(1.0 - t) <= u.min(1.0 - u) {
        Some(p + r * t)
    } else {
        Some(q + s * u)
    }
}

/// Bounded segment against an unbounded line.
///
/// The segment runs `a`–`a1`; the line passes through `origin` along
/// `direction`. Parallel (including collinear) configurations yield
/// `None`: a collinear segment has no unique intersection point.
#[must_use]
pub fn segment_line_intersect(
    a: &Point2,
    a1: &Point2,
    origin: &Point2,
    direction: &Vector2,
    tolerance: Tolerance,
) -> Option<Point2> {
    let r = a1 - a;
    let cross = r.perp(direction);
    if tolerance.eq_zero(cross) {
        return None;
    }
    let t = (origin - a).perp(direction) / cross;
    let eps = tolerance.epsilon();
    if t < -eps || t > 1.0 + eps {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    Some(a + r * t)
}

/// Collinear segments: returns the single shared point when the overlap
/// degenerates to a point, `None` for disjoint segments or real overlaps.
fn collinear_touch_point(
    p: &Point2,
    r: &Vector2,
    q: &Point2,
    q1: &Point2,
    tolerance: Tolerance,
) -> Option<Point2> {
    let length = r.norm();
    if tolerance.eq_zero(length) {
        // First segment is a point; it intersects iff it lies on the second.
        let s = q1 - q;
        let s_length = s.norm();
        if tolerance.eq_zero(s_length) {
            return tolerance.eq_zero((q - p).norm()).then_some(*p);
        }
        let t = (p - q).dot(&s) / (s_length * s_length);
        let on_segment = (-tolerance.epsilon()..=1.0 + tolerance.epsilon()).contains(&t)
            && tolerance.eq_zero((q + s * t - p).norm());
        return on_segment.then_some(*p);
    }
    let axis = r / length;
    let tq = (q - p).dot(&axis);
    let tq1 = (q1 - p).dot(&axis);
    let lo = tq.min(tq1).max(0.0);
    let hi = tq.max(tq1).min(length);
    if lo > hi + tolerance.epsilon() {
        return None;
    }
    if tolerance.eq_zero(hi - lo) {
        let mid = (lo + hi) * 0.5;
        return Some(p + axis * mid);
    }
    // Overlap longer than a point: no unique intersection.
    None
}
