use ordered_float::OrderedFloat;

use super::Point2;

/// Computes the convex hull of a point set with Andrew's monotone chain.
///
/// Points are sorted lexicographically, then the lower and upper chains
/// are grown independently, popping the last accumulated point while the
/// last three do not make a counter-clockwise turn. The two chains
/// concatenate into a counter-clockwise hull. `O(n log n)`, dominated by
/// the sort.
///
/// Collinear input collapses to the two extreme points; callers decide
/// whether that degenerate hull is acceptable.
#[must_use]
pub fn convex_hull(mut points: Vec<Point2>) -> Vec<Point2> {
    if points.len() < 3 {
        return points;
    }
    points.sort_by_key(|p| (OrderedFloat(p.x), OrderedFloat(p.y)));

    let mut lower = points.iter().fold(Vec::new(), |chain, p| grow(chain, *p));
    let mut upper = points
        .iter()
        .rev()
        .fold(Vec::new(), |chain, p| grow(chain, *p));

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
}

/// Pops points that the new one makes irrelevant, then appends it.
fn grow(mut chain: Vec<Point2>, next: Point2) -> Vec<Point2> {
    while chain.len() >= 2 && turn(chain[chain.len() - 2], chain[chain.len() - 1], next) <= 0.0 {
        chain.pop();
    }
    chain.push(next);
    chain
}

/// Cross product of `a -> b` and `a -> c`; positive for a
/// counter-clockwise turn.
fn turn(a: Point2, b: Point2, c: Point2) -> f64 {
    (b - a).perp(&(c - a))
}
