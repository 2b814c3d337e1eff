use std::fmt;

use crate::math::intersect_2d;
use crate::quantity::units::Unit;
use crate::quantity::{Angle, Quantity, Tolerance};

use super::axis::Axis2D;
use super::bounding_box::BoundingBox2D;
use super::direction::Direction2D;
use super::line::Line2D;
use super::point::Point2D;
use super::vector::Vector2D;
use super::World;

/// A bounded line segment between two endpoints.
///
/// Equality is endpoint-order-independent: the segment from A to B equals
/// the segment from B to A.
pub struct LineSegment2D<U: Unit, C = World> {
    start: Point2D<U, C>,
    finish: Point2D<U, C>,
}

impl<U: Unit, C> LineSegment2D<U, C> {
    /// A segment between two endpoints.
    #[must_use]
    pub const fn from_endpoints(start: Point2D<U, C>, finish: Point2D<U, C>) -> Self {
        Self { start, finish }
    }

    /// Start point.
    #[must_use]
    pub const fn start(&self) -> Point2D<U, C> {
        self.start
    }

    /// End point.
    #[must_use]
    pub const fn finish(&self) -> Point2D<U, C> {
        self.finish
    }

    /// Both endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> (Point2D<U, C>, Point2D<U, C>) {
        (self.start, self.finish)
    }

    /// The displacement from start to finish.
    #[must_use]
    pub fn vector(&self) -> Vector2D<U, C> {
        self.finish - self.start
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> Quantity<U> {
        self.vector().length()
    }

    /// Direction from start to finish, or `None` for a degenerate
    /// segment.
    #[must_use]
    pub fn direction(&self) -> Option<Direction2D<C>> {
        self.vector().direction()
    }

    /// The axis carrying this segment, or `None` for a degenerate
    /// segment.
    #[must_use]
    pub fn axis(&self) -> Option<Axis2D<U, C>> {
        self.direction()
            .map(|direction| Axis2D::through(self.start, direction))
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2D<U, C> {
        Point2D::midpoint(self.start, self.finish)
    }

    /// Interpolates along the segment; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Point2D<U, C> {
        Point2D::interpolate_from(self.start, self.finish, t)
    }

    /// The segment traversed the other way.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::from_endpoints(self.finish, self.start)
    }

    /// Smallest axis-aligned box containing the segment.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        BoundingBox2D::from_corners(self.start, self.finish)
    }

    /// Minimum distance from a point to the segment.
    #[must_use]
    pub fn distance_to(&self, point: Point2D<U, C>) -> Quantity<U> {
        let v = self.vector();
        let length_squared = v.squared_length();
        if length_squared.is_zero() {
            return self.start.distance_to(point);
        }
        // Project onto the carrying line, clamp into the segment.
        let t = ((point - self.start).dot(v) / length_squared).clamp(0.0, 1.0);
        self.interpolate(t).distance_to(point)
    }

    /// The unique intersection point of two segments.
    ///
    /// Collinear segments yield a point only when they touch exactly
    /// end-to-end; longer overlaps have no unique intersection and yield
    /// `None`. When the segments properly cross, the crossing is computed
    /// along the parametrization whose parameter is closest to an
    /// endpoint, which keeps endpoint crossings exact.
    #[must_use]
    pub fn intersection_point(&self, other: &Self) -> Option<Point2D<U, C>> {
        self.intersection_point_within(other, Tolerance::default())
    }

    /// [`LineSegment2D::intersection_point`] with an explicit tolerance.
    #[must_use]
    pub fn intersection_point_within(
        &self,
        other: &Self,
        tolerance: Tolerance,
    ) -> Option<Point2D<U, C>> {
        intersect_2d::segment_segment_intersect(
            &self.start.to_kernel(),
            &self.finish.to_kernel(),
            &other.start.to_kernel(),
            &other.finish.to_kernel(),
            tolerance,
        )
        .map(Point2D::from_kernel)
    }

    /// The intersection of this segment with an unbounded line.
    ///
    /// Parallel configurations, including a collinear segment, yield
    /// `None`.
    #[must_use]
    pub fn intersection_with_line(&self, line: &Line2D<U, C>) -> Option<Point2D<U, C>> {
        self.intersection_with_line_within(line, Tolerance::default())
    }

    /// [`LineSegment2D::intersection_with_line`] with an explicit
    /// tolerance.
    #[must_use]
    pub fn intersection_with_line_within(
        &self,
        line: &Line2D<U, C>,
        tolerance: Tolerance,
    ) -> Option<Point2D<U, C>> {
        let direction = line.direction();
        let d = crate::math::Vector2::new(direction.x(), direction.y());
        intersect_2d::segment_line_intersect(
            &self.start.to_kernel(),
            &self.finish.to_kernel(),
            &line.origin().to_kernel(),
            &d,
            tolerance,
        )
        .map(Point2D::from_kernel)
    }

    /// The segment translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self::from_endpoints(self.start + displacement, self.finish + displacement)
    }

    /// The segment rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self::from_endpoints(
            self.start.rotate_around(center, angle),
            self.finish.rotate_around(center, angle),
        )
    }

    /// The segment mirrored across an axis.
    #[must_use]
    pub fn mirror_across(&self, axis: &Axis2D<U, C>) -> Self {
        Self::from_endpoints(self.start.mirror_across(axis), self.finish.mirror_across(axis))
    }
}

impl<U: Unit, C> Clone for LineSegment2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for LineSegment2D<U, C> {}

impl<U: Unit, C> fmt::Debug for LineSegment2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSegment2D")
            .field("start", &self.start)
            .field("finish", &self.finish)
            .finish()
    }
}

impl<U: Unit, C> PartialEq for LineSegment2D<U, C> {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.finish == other.finish)
            || (self.start == other.finish && self.finish == other.start)
    }
}
