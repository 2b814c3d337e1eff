use std::f64::consts::PI;
use std::fmt;

use crate::quantity::units::{Squared, Unit};
use crate::quantity::{Quantity, Tolerance};

use super::arc::Arc2D;
use super::bounding_box::BoundingBox2D;
use super::point::Point2D;
use super::vector::Vector2D;
use super::World;

/// A circle: a center point plus a radius.
pub struct Circle2D<U: Unit, C = World> {
    center: Point2D<U, C>,
    radius: Quantity<U>,
}

impl<U: Unit, C> Circle2D<U, C> {
    /// A circle with the given radius (its absolute value is used) around
    /// a center point.
    #[must_use]
    pub fn with_radius(radius: Quantity<U>, center: Point2D<U, C>) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// A circle around the coordinate-space origin.
    #[must_use]
    pub fn at_origin(radius: Quantity<U>) -> Self {
        Self::with_radius(radius, Point2D::origin())
    }

    /// The circle through three points, or `None` when they are collinear
    /// or coincident.
    #[must_use]
    pub fn through_points(p1: Point2D<U, C>, p2: Point2D<U, C>, p3: Point2D<U, C>) -> Option<Self> {
        Self::through_points_within(p1, p2, p3, Tolerance::default())
    }

    /// [`Circle2D::through_points`] with an explicit tolerance.
    #[must_use]
    pub fn through_points_within(
        p1: Point2D<U, C>,
        p2: Point2D<U, C>,
        p3: Point2D<U, C>,
        tolerance: Tolerance,
    ) -> Option<Self> {
        let center = Point2D::circumcenter_within(p1, p2, p3, tolerance)?;
        Some(Self::with_radius(center.distance_to(p1), center))
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point2D<U, C> {
        self.center
    }

    /// Radius; always non-negative.
    #[must_use]
    pub const fn radius(&self) -> Quantity<U> {
        self.radius
    }

    /// Diameter.
    #[must_use]
    pub fn diameter(&self) -> Quantity<U> {
        self.radius * 2.0
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> Quantity<Squared<U>> {
        self.radius.squared() * PI
    }

    /// Circumference.
    #[must_use]
    pub fn circumference(&self) -> Quantity<U> {
        self.radius * (2.0 * PI)
    }

    /// Whether a point lies inside the circle; a point on the boundary is
    /// contained.
    #[must_use]
    pub fn contains_point(&self, point: Point2D<U, C>) -> bool {
        self.contains_point_within(point, Tolerance::default())
    }

    /// [`Circle2D::contains_point`] with an explicit tolerance.
    #[must_use]
    pub fn contains_point_within(&self, point: Point2D<U, C>, tolerance: Tolerance) -> bool {
        tolerance.leq(self.center.distance_to(point).value(), self.radius.value())
    }

    /// Smallest axis-aligned box containing the circle.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        BoundingBox2D::from_extrema(
            self.center.x() - self.radius,
            self.center.x() + self.radius,
            self.center.y() - self.radius,
            self.center.y() + self.radius,
        )
    }

    /// The full-turn counter-clockwise arc tracing this circle, starting
    /// at the point with the greatest X coordinate.
    #[must_use]
    pub fn to_arc(&self) -> Arc2D<U, C> {
        let start = Point2D::new(self.center.x() + self.radius, self.center.y());
        Arc2D::swept_around(self.center, crate::quantity::Angle::two_pi(), start)
    }

    /// The circle translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self {
            center: self.center + displacement,
            radius: self.radius,
        }
    }

    /// The circle scaled about a point by a factor.
    #[must_use]
    pub fn scale_about(&self, point: Point2D<U, C>, factor: f64) -> Self {
        Self {
            center: self.center.scale_about(point, factor),
            radius: (self.radius * factor).abs(),
        }
    }
}

impl<U: Unit, C> Clone for Circle2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Circle2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Circle2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circle2D")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .finish()
    }
}

impl<U: Unit, C> PartialEq for Circle2D<U, C> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}
