use std::fmt;

use crate::error::GeometryError;
use crate::math::{hull_2d, polygon_2d, Point2};
use crate::quantity::units::{Squared, Unit};
use crate::quantity::{Angle, Quantity, Tolerance};
use crate::Result;

use super::bounding_box::BoundingBox2D;
use super::point::Point2D;
use super::segment::LineSegment2D;
use super::vector::Vector2D;
use super::World;

/// A polygon with an outer loop and any number of inner loops (holes).
///
/// Construction enforces the orientation invariant: the outer loop runs
/// counter-clockwise and every inner loop clockwise, checked by signed
/// area and fixed by reversal. Each loop needs at least three vertices.
pub struct Polygon2D<U: Unit, C = World> {
    outer_loop: Vec<Point2D<U, C>>,
    inner_loops: Vec<Vec<Point2D<U, C>>>,
}

impl<U: Unit, C> Polygon2D<U, C> {
    /// A polygon without holes.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than three vertices are given.
    pub fn from_vertices(outer_loop: Vec<Point2D<U, C>>) -> Result<Self> {
        Self::with_holes(outer_loop, Vec::new())
    }

    /// A polygon with holes.
    ///
    /// # Errors
    ///
    /// Returns an error when any loop has fewer than three vertices.
    pub fn with_holes(
        outer_loop: Vec<Point2D<U, C>>,
        inner_loops: Vec<Vec<Point2D<U, C>>>,
    ) -> Result<Self> {
        if outer_loop.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                entity: "polygon outer loop",
                minimum: 3,
                actual: outer_loop.len(),
            }
            .into());
        }
        for inner in &inner_loops {
            if inner.len() < 3 {
                return Err(GeometryError::TooFewVertices {
                    entity: "polygon inner loop",
                    minimum: 3,
                    actual: inner.len(),
                }
                .into());
            }
        }
        let outer_loop = oriented(outer_loop, true);
        let inner_loops = inner_loops
            .into_iter()
            .map(|inner| oriented(inner, false))
            .collect();
        Ok(Self {
            outer_loop,
            inner_loops,
        })
    }

    /// The convex hull of a point set as a polygon, or `None` when fewer
    /// than three non-collinear distinct points remain.
    #[must_use]
    pub fn convex_hull(points: &[Point2D<U, C>]) -> Option<Self> {
        let raw: Vec<Point2> = points.iter().map(|p| p.to_kernel()).collect();
        let hull = hull_2d::convex_hull(raw);
        if hull.len() < 3 {
            return None;
        }
        Some(Self {
            outer_loop: hull.into_iter().map(Point2D::from_kernel).collect(),
            inner_loops: Vec::new(),
        })
    }

    /// Vertices of the outer loop, counter-clockwise.
    #[must_use]
    pub fn outer_loop(&self) -> &[Point2D<U, C>] {
        &self.outer_loop
    }

    /// Vertices of the inner loops, each clockwise.
    #[must_use]
    pub fn inner_loops(&self) -> &[Vec<Point2D<U, C>>] {
        &self.inner_loops
    }

    /// All edges of the polygon, outer loop first.
    #[must_use]
    pub fn edges(&self) -> Vec<LineSegment2D<U, C>> {
        let mut edges = loop_edges(&self.outer_loop);
        for inner in &self.inner_loops {
            edges.extend(loop_edges(inner));
        }
        edges
    }

    /// Total boundary length, holes included.
    #[must_use]
    pub fn perimeter(&self) -> Quantity<U> {
        self.edges().iter().map(LineSegment2D::length).sum()
    }

    /// Enclosed area: the outer loop's area minus the holes.
    ///
    /// With the orientation invariant this is simply the sum of the
    /// loops' signed areas.
    #[must_use]
    pub fn area(&self) -> Quantity<Squared<U>> {
        let mut total = polygon_2d::signed_area(&kernel_loop(&self.outer_loop));
        for inner in &self.inner_loops {
            total += polygon_2d::signed_area(&kernel_loop(inner));
        }
        Quantity::new(total)
    }

    /// Area centroid accounting for holes, or `None` when the net area is
    /// tolerance-zero.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2D<U, C>> {
        let mut area = 0.0;
        let mut moment_x = 0.0;
        let mut moment_y = 0.0;
        for ring in std::iter::once(&self.outer_loop).chain(&self.inner_loops) {
            let (ring_area, ring_mx, ring_my) = polygon_2d::centroid_terms(&kernel_loop(ring));
            area += ring_area;
            moment_x += ring_mx;
            moment_y += ring_my;
        }
        if Tolerance::default().eq_zero(area) {
            return None;
        }
        Some(Point2D::from_coordinates(
            moment_x / (6.0 * area),
            moment_y / (6.0 * area),
        ))
    }

    /// Whether a point lies inside the polygon.
    ///
    /// Points on the outer boundary or on a hole boundary are contained;
    /// points strictly inside a hole are not.
    #[must_use]
    pub fn contains(&self, point: Point2D<U, C>) -> bool {
        self.contains_within(point, Tolerance::default())
    }

    /// [`Polygon2D::contains`] with an explicit tolerance.
    #[must_use]
    pub fn contains_within(&self, point: Point2D<U, C>, tolerance: Tolerance) -> bool {
        let raw = point.to_kernel();
        match polygon_2d::classify(&raw, &kernel_loop(&self.outer_loop), tolerance) {
            polygon_2d::Containment::Outside => false,
            polygon_2d::Containment::OnBoundary => true,
            polygon_2d::Containment::Inside => !self.inner_loops.iter().any(|inner| {
                polygon_2d::classify(&raw, &kernel_loop(inner), tolerance)
                    == polygon_2d::Containment::Inside
            }),
        }
    }

    /// Smallest axis-aligned box containing the polygon.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        BoundingBox2D::hull_of(self.outer_loop.iter().copied())
            .unwrap_or_else(|| BoundingBox2D::singleton(self.outer_loop[0]))
    }

    /// The polygon translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        self.map_vertices(|p| p + displacement)
    }

    /// The polygon rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        self.map_vertices(|p| p.rotate_around(center, angle))
    }

    fn map_vertices(&self, f: impl Fn(Point2D<U, C>) -> Point2D<U, C>) -> Self {
        Self {
            outer_loop: self.outer_loop.iter().copied().map(&f).collect(),
            inner_loops: self
                .inner_loops
                .iter()
                .map(|inner| inner.iter().copied().map(&f).collect())
                .collect(),
        }
    }
}

/// Reorients a loop to the requested winding by signed-area check and
/// reversal. Loops with tolerance-zero signed area are left as given.
fn oriented<U: Unit, C>(
    mut ring: Vec<Point2D<U, C>>,
    counterclockwise: bool,
) -> Vec<Point2D<U, C>> {
    let area = polygon_2d::signed_area(&kernel_loop(&ring));
    if (counterclockwise && area < 0.0) || (!counterclockwise && area > 0.0) {
        ring.reverse();
    }
    ring
}

fn kernel_loop<U: Unit, C>(ring: &[Point2D<U, C>]) -> Vec<Point2> {
    ring.iter().map(|p| p.to_kernel()).collect()
}

fn loop_edges<U: Unit, C>(ring: &[Point2D<U, C>]) -> Vec<LineSegment2D<U, C>> {
    let n = ring.len();
    (0..n)
        .map(|i| LineSegment2D::from_endpoints(ring[i], ring[(i + 1) % n]))
        .collect()
}

impl<U: Unit, C> Clone for Polygon2D<U, C> {
    fn clone(&self) -> Self {
        Self {
            outer_loop: self.outer_loop.clone(),
            inner_loops: self.inner_loops.clone(),
        }
    }
}

impl<U: Unit, C> fmt::Debug for Polygon2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polygon2D")
            .field("outer_loop", &self.outer_loop)
            .field("inner_loops", &self.inner_loops)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::quantity::units::Meters;
    use crate::quantity::Length;

    use super::*;

    type Polygon = Polygon2D<Meters>;
    type Point = Point2D<Meters>;

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::from_coordinates(0.0, 0.0),
            Point::from_coordinates(size, 0.0),
            Point::from_coordinates(size, size),
            Point::from_coordinates(0.0, size),
        ]
    }

    fn square_with_hole() -> Polygon {
        // The hole is given counter-clockwise; construction reverses it.
        let hole = vec![
            Point::from_coordinates(1.0, 1.0),
            Point::from_coordinates(2.0, 1.0),
            Point::from_coordinates(2.0, 2.0),
            Point::from_coordinates(1.0, 2.0),
        ];
        Polygon::with_holes(square(4.0), vec![hole]).unwrap()
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        assert!(Polygon::from_vertices(square(1.0)[..2].to_vec()).is_err());
        assert!(Polygon::with_holes(square(4.0), vec![square(1.0)[..2].to_vec()]).is_err());
    }

    #[test]
    fn orientation_is_normalized() {
        let mut clockwise = square(2.0);
        clockwise.reverse();
        let polygon = Polygon::from_vertices(clockwise).unwrap();
        assert_relative_eq!(polygon.area().value(), 4.0);

        let with_hole = square_with_hole();
        // Outer counter-clockwise, inner clockwise: signed areas 16 and -1.
        assert_relative_eq!(with_hole.area().value(), 15.0);
    }

    #[test]
    fn perimeter_includes_holes() {
        let polygon = square_with_hole();
        assert_relative_eq!(polygon.perimeter().value(), 16.0 + 4.0);
    }

    #[test]
    fn membership_quartet() {
        let polygon = Polygon::from_vertices(square(4.0)).unwrap();
        // Center, far outside, boundary.
        assert!(polygon.contains(Point::from_coordinates(2.0, 2.0)));
        assert!(!polygon.contains(Point::from_coordinates(100.0, 100.0)));
        assert!(polygon.contains(Point::from_coordinates(4.0, 2.0)));
        // Strictly inside a declared hole.
        let with_hole = square_with_hole();
        assert!(!with_hole.contains(Point::from_coordinates(1.5, 1.5)));
        // On the hole boundary: contained.
        assert!(with_hole.contains(Point::from_coordinates(1.0, 1.5)));
        // Between hole and outer boundary: contained.
        assert!(with_hole.contains(Point::from_coordinates(0.5, 0.5)));
    }

    #[test]
    fn centroid_of_symmetric_hole_stays_centered() {
        let outer = square(4.0);
        let hole = vec![
            Point::from_coordinates(1.5, 1.5),
            Point::from_coordinates(2.5, 1.5),
            Point::from_coordinates(2.5, 2.5),
            Point::from_coordinates(1.5, 2.5),
        ];
        let polygon = Polygon::with_holes(outer, vec![hole]).unwrap();
        let centroid = polygon.centroid().unwrap();
        assert_relative_eq!(centroid.x().value(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(centroid.y().value(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn centroid_of_offset_hole_shifts_away() {
        let polygon = square_with_hole();
        let centroid = polygon.centroid().unwrap();
        // Hole sits toward the lower-left, pushing the centroid up-right.
        assert!(centroid.x().value() > 2.0);
        assert!(centroid.y().value() > 2.0);
    }

    #[test]
    fn convex_hull_of_point_cloud() {
        let mut points = square(4.0);
        points.push(Point::from_coordinates(2.0, 2.0));
        points.push(Point::from_coordinates(3.0, 1.0));
        let hull = Polygon::convex_hull(&points).unwrap();
        assert_eq!(hull.outer_loop().len(), 4);
        assert_relative_eq!(hull.area().value(), 16.0);
        // Every input point is contained, boundary-tolerant.
        for p in &points {
            assert!(hull.contains(*p), "{p:?} not in hull");
        }
    }

    #[test]
    fn convex_hull_of_triangle_is_counterclockwise() {
        let points = [
            Point::from_coordinates(0.0, 0.0),
            Point::from_coordinates(1.0, 2.0),
            Point::from_coordinates(2.0, 0.0),
        ];
        let hull = Polygon::convex_hull(&points).unwrap();
        assert_eq!(hull.outer_loop().len(), 3);
        assert!(hull.area() > crate::quantity::Quantity::zero());
        for p in &points {
            assert!(hull.contains(*p));
        }
    }

    #[test]
    fn convex_hull_degenerate_inputs() {
        assert!(Polygon::convex_hull(&[]).is_none());
        let collinear = [
            Point::from_coordinates(0.0, 0.0),
            Point::from_coordinates(1.0, 1.0),
            Point::from_coordinates(2.0, 2.0),
        ];
        assert!(Polygon::convex_hull(&collinear).is_none());
    }

    #[test]
    fn bounding_box_and_transforms() {
        let polygon = Polygon::from_vertices(square(2.0)).unwrap();
        let bounds = polygon.bounding_box();
        assert_eq!(bounds.max_x(), Length::new(2.0));

        let moved = polygon.translate_by(Vector2D::from_components(1.0, 0.0));
        assert!(moved.contains(Point::from_coordinates(3.0, 1.0)));

        let rotated = polygon.rotate_around(Point::origin(), Angle::degrees(90.0));
        assert!(rotated.contains(Point::from_coordinates(-1.0, 1.0)));
        assert_relative_eq!(rotated.area().value(), 4.0);
    }
}
