use std::fmt;

use crate::quantity::units::{Squared, Unit};
use crate::quantity::{Angle, Quantity, Tolerance};

use super::axis::Axis2D;
use super::bounding_box::BoundingBox2D;
use super::circle::Circle2D;
use super::point::Point2D;
use super::segment::LineSegment2D;
use super::vector::Vector2D;
use super::World;

/// A triangle defined by its three vertices.
pub struct Triangle2D<U: Unit, C = World> {
    p1: Point2D<U, C>,
    p2: Point2D<U, C>,
    p3: Point2D<U, C>,
}

impl<U: Unit, C> Triangle2D<U, C> {
    /// A triangle from three vertices.
    #[must_use]
    pub const fn from_vertices(p1: Point2D<U, C>, p2: Point2D<U, C>, p3: Point2D<U, C>) -> Self {
        Self { p1, p2, p3 }
    }

    /// The three vertices.
    #[must_use]
    pub const fn vertices(&self) -> [Point2D<U, C>; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// The three edges, in vertex order.
    #[must_use]
    pub fn edges(&self) -> [LineSegment2D<U, C>; 3] {
        [
            LineSegment2D::from_endpoints(self.p1, self.p2),
            LineSegment2D::from_endpoints(self.p2, self.p3),
            LineSegment2D::from_endpoints(self.p3, self.p1),
        ]
    }

    /// Signed area: positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> Quantity<Squared<U>> {
        (self.p2 - self.p1).cross(self.p3 - self.p1) * 0.5
    }

    /// Absolute area.
    #[must_use]
    pub fn area(&self) -> Quantity<Squared<U>> {
        self.signed_area().abs()
    }

    /// Centroid: the vertex average.
    #[must_use]
    pub fn centroid(&self) -> Point2D<U, C> {
        self.p1 + ((self.p2 - self.p1) + (self.p3 - self.p1)) / 3.0
    }

    /// Whether a point lies inside the triangle; points on an edge or
    /// vertex are contained.
    #[must_use]
    pub fn contains(&self, point: Point2D<U, C>) -> bool {
        self.contains_within(point, Tolerance::default())
    }

    /// [`Triangle2D::contains`] with an explicit tolerance.
    ///
    /// A point is inside when the three edge cross products carry the
    /// same sign; tolerance-zero terms are boundary and count as inside
    /// from either side.
    #[must_use]
    pub fn contains_within(&self, point: Point2D<U, C>, tolerance: Tolerance) -> bool {
        let c1 = (self.p2 - self.p1).cross(point - self.p1).value();
        let c2 = (self.p3 - self.p2).cross(point - self.p2).value();
        let c3 = (self.p1 - self.p3).cross(point - self.p3).value();
        let s1 = tolerance.sign(c1);
        let s2 = tolerance.sign(c2);
        let s3 = tolerance.sign(c3);
        (s1 >= 0 && s2 >= 0 && s3 >= 0) || (s1 <= 0 && s2 <= 0 && s3 <= 0)
    }

    /// The circle through the three vertices, or `None` for a degenerate
    /// triangle.
    #[must_use]
    pub fn circumcircle(&self) -> Option<Circle2D<U, C>> {
        Circle2D::through_points(self.p1, self.p2, self.p3)
    }

    /// Smallest axis-aligned box containing the triangle.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        BoundingBox2D::hull_of(self.vertices())
            .unwrap_or_else(|| BoundingBox2D::singleton(self.p1))
    }

    /// The triangle translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self::from_vertices(
            self.p1 + displacement,
            self.p2 + displacement,
            self.p3 + displacement,
        )
    }

    /// The triangle rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self::from_vertices(
            self.p1.rotate_around(center, angle),
            self.p2.rotate_around(center, angle),
            self.p3.rotate_around(center, angle),
        )
    }

    /// The triangle mirrored across an axis; the vertex order flips
    /// orientation.
    #[must_use]
    pub fn mirror_across(&self, axis: &Axis2D<U, C>) -> Self {
        Self::from_vertices(
            self.p1.mirror_across(axis),
            self.p2.mirror_across(axis),
            self.p3.mirror_across(axis),
        )
    }
}

impl<U: Unit, C> Clone for Triangle2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Triangle2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Triangle2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triangle2D")
            .field("p1", &self.p1)
            .field("p2", &self.p2)
            .field("p3", &self.p3)
            .finish()
    }
}
