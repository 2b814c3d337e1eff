use std::fmt;

use crate::math::intersect_2d;
use crate::quantity::units::Unit;
use crate::quantity::{Quantity, Tolerance};

use super::axis::Axis2D;
use super::direction::Direction2D;
use super::point::Point2D;
use super::World;

/// An unbounded line: a point on the line plus a direction.
pub struct Line2D<U: Unit, C = World> {
    origin: Point2D<U, C>,
    direction: Direction2D<C>,
}

impl<U: Unit, C> Line2D<U, C> {
    /// A line through a point along a direction.
    #[must_use]
    pub const fn with_direction(origin: Point2D<U, C>, direction: Direction2D<C>) -> Self {
        Self { origin, direction }
    }

    /// The line through two points, or `None` when they coincide.
    #[must_use]
    pub fn through(first: Point2D<U, C>, second: Point2D<U, C>) -> Option<Self> {
        (second - first)
            .direction()
            .map(|direction| Self::with_direction(first, direction))
    }

    /// The line carrying an axis.
    #[must_use]
    pub const fn from_axis(axis: &Axis2D<U, C>) -> Self {
        Self::with_direction(axis.origin(), axis.direction())
    }

    /// A point on the line.
    #[must_use]
    pub const fn origin(&self) -> Point2D<U, C> {
        self.origin
    }

    /// Direction of the line.
    #[must_use]
    pub const fn direction(&self) -> Direction2D<C> {
        self.direction
    }

    /// The point at a signed distance from the origin along the line.
    #[must_use]
    pub fn point_at(&self, distance: Quantity<U>) -> Point2D<U, C> {
        self.origin + super::vector::Vector2D::with_length(distance, self.direction)
    }

    /// The unique intersection point with another line.
    ///
    /// Lines with equal or opposite directions are parallel and yield
    /// `None`, including the coincident case, which has no unique point.
    #[must_use]
    pub fn intersection_with(&self, other: &Self) -> Option<Point2D<U, C>> {
        self.intersection_with_within(other, Tolerance::default())
    }

    /// [`Line2D::intersection_with`] with an explicit tolerance.
    #[must_use]
    pub fn intersection_with_within(
        &self,
        other: &Self,
        tolerance: Tolerance,
    ) -> Option<Point2D<U, C>> {
        if self.direction == other.direction || self.direction == other.direction.reversed() {
            return None;
        }
        let d1 = crate::math::Vector2::new(self.direction.x(), self.direction.y());
        let d2 = crate::math::Vector2::new(other.direction.x(), other.direction.y());
        let (t, _) = intersect_2d::line_line_intersect(
            &self.origin.to_kernel(),
            &d1,
            &other.origin.to_kernel(),
            &d2,
            tolerance,
        )?;
        Some(self.point_at(Quantity::new(t)))
    }

    /// Perpendicular distance from a point to the line.
    #[must_use]
    pub fn distance_to(&self, point: Point2D<U, C>) -> Quantity<U> {
        (point - self.origin)
            .component_in(self.direction.perpendicular())
            .abs()
    }

    /// The closest point on the line.
    #[must_use]
    pub fn project(&self, point: Point2D<U, C>) -> Point2D<U, C> {
        self.point_at((point - self.origin).component_in(self.direction))
    }
}

impl<U: Unit, C> Clone for Line2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Line2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Line2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line2D")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .finish()
    }
}
