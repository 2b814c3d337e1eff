use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use crate::math::{self, circumcenter_2d};
use crate::quantity::units::{Product, Unit};
use crate::quantity::{Angle, Quantity, Tolerance};

use super::axis::Axis2D;
use super::frame::Frame2D;
use super::vector::Vector2D;
use super::World;

/// A position in 2D, tagged with a unit and a coordinate space.
///
/// Positions in different coordinate spaces are distinct types; converting
/// between them requires an explicit [`Frame2D`] via
/// [`Point2D::place_in`] / [`Point2D::relative_to`].
pub struct Point2D<U: Unit, C = World> {
    x: Quantity<U>,
    y: Quantity<U>,
    space: PhantomData<C>,
}

impl<U: Unit, C> Point2D<U, C> {
    /// A point from its coordinates.
    #[must_use]
    pub const fn new(x: Quantity<U>, y: Quantity<U>) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// A point from raw coordinate values.
    #[must_use]
    pub const fn from_coordinates(x: f64, y: f64) -> Self {
        Self::new(Quantity::new(x), Quantity::new(y))
    }

    /// The origin of the coordinate space.
    #[must_use]
    pub const fn origin() -> Self {
        Self::from_coordinates(0.0, 0.0)
    }

    /// X coordinate.
    #[must_use]
    pub const fn x(self) -> Quantity<U> {
        self.x
    }

    /// Y coordinate.
    #[must_use]
    pub const fn y(self) -> Quantity<U> {
        self.y
    }

    /// Both coordinates.
    #[must_use]
    pub const fn coordinates(self) -> (Quantity<U>, Quantity<U>) {
        (self.x, self.y)
    }

    /// Distance to another point; symmetric and non-negative.
    #[must_use]
    pub fn distance_to(self, other: Self) -> Quantity<U> {
        (other - self).length()
    }

    /// Squared distance, avoiding the square root.
    #[must_use]
    pub fn distance_squared_to(self, other: Self) -> Quantity<Product<U, U>> {
        (other - self).squared_length()
    }

    /// Midpoint of two points.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self::new(Quantity::midpoint(a.x, b.x), Quantity::midpoint(a.y, b.y))
    }

    /// Coordinatewise interpolation; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate_from(a: Self, b: Self, t: f64) -> Self {
        Self::new(
            Quantity::interpolate_from(a.x, b.x, t),
            Quantity::interpolate_from(a.y, b.y, t),
        )
    }

    /// The point translated by a displacement.
    #[must_use]
    pub fn translate_by(self, displacement: Vector2D<U, C>) -> Self {
        self + displacement
    }

    /// The point rotated around a center by the given angle.
    #[must_use]
    pub fn rotate_around(self, center: Self, angle: Angle) -> Self {
        center + (self - center).rotate_by(angle)
    }

    /// The point mirrored across an axis.
    #[must_use]
    pub fn mirror_across(self, axis: &Axis2D<U, C>) -> Self {
        axis.origin() + (self - axis.origin()).mirror_across(axis)
    }

    /// The point scaled about a center by a factor.
    #[must_use]
    pub fn scale_about(self, center: Self, factor: f64) -> Self {
        center + (self - center) * factor
    }

    /// Signed distance along an axis (the coordinate of the projection).
    #[must_use]
    pub fn signed_distance_along(self, axis: &Axis2D<U, C>) -> Quantity<U> {
        (self - axis.origin()).component_in(axis.direction())
    }

    /// Signed perpendicular distance from an axis, positive to the left
    /// of the axis direction.
    #[must_use]
    pub fn signed_distance_from(self, axis: &Axis2D<U, C>) -> Quantity<U> {
        (self - axis.origin()).component_in(axis.direction().perpendicular())
    }

    /// The closest point on an axis.
    #[must_use]
    pub fn project_onto(self, axis: &Axis2D<U, C>) -> Self {
        axis.origin()
            + Vector2D::with_length(self.signed_distance_along(axis), axis.direction())
    }

    /// Expresses this point, currently in the frame's local space, in the
    /// frame's parent space.
    #[must_use]
    pub fn place_in<P>(self, frame: &Frame2D<U, P, C>) -> Point2D<U, P> {
        let x_dir = frame.x_direction();
        let y_dir = frame.y_direction();
        frame.origin()
            + Vector2D::new(
                self.x * x_dir.x() + self.y * y_dir.x(),
                self.x * x_dir.y() + self.y * y_dir.y(),
            )
    }

    /// Expresses this point, currently in the frame's parent space, in
    /// the frame's local space.
    #[must_use]
    pub fn relative_to<L>(self, frame: &Frame2D<U, C, L>) -> Point2D<U, L> {
        let displacement = self - frame.origin();
        Point2D::new(
            displacement.component_in(frame.x_direction()),
            displacement.component_in(frame.y_direction()),
        )
    }

    /// Center of the circle through three points, or `None` when the
    /// points are collinear or coincident.
    #[must_use]
    pub fn circumcenter(p1: Self, p2: Self, p3: Self) -> Option<Self> {
        Self::circumcenter_within(p1, p2, p3, Tolerance::default())
    }

    /// [`Point2D::circumcenter`] with an explicit tolerance.
    #[must_use]
    pub fn circumcenter_within(p1: Self, p2: Self, p3: Self, tolerance: Tolerance) -> Option<Self> {
        circumcenter_2d::circumcenter(&p1.to_kernel(), &p2.to_kernel(), &p3.to_kernel(), tolerance)
            .map(Self::from_kernel)
    }

    pub(crate) fn to_kernel(self) -> math::Point2 {
        math::Point2::new(self.x.value(), self.y.value())
    }

    pub(crate) fn from_kernel(point: math::Point2) -> Self {
        Self::from_coordinates(point.x, point.y)
    }
}

impl<U: Unit, C> Clone for Point2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Point2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Point2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point2D")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<U: Unit, C> PartialEq for Point2D<U, C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<U: Unit, C> Add<Vector2D<U, C>> for Point2D<U, C> {
    type Output = Self;

    fn add(self, displacement: Vector2D<U, C>) -> Self {
        Self::new(self.x + displacement.x(), self.y + displacement.y())
    }
}

impl<U: Unit, C> Sub<Vector2D<U, C>> for Point2D<U, C> {
    type Output = Self;

    fn sub(self, displacement: Vector2D<U, C>) -> Self {
        Self::new(self.x - displacement.x(), self.y - displacement.y())
    }
}

impl<U: Unit, C> Sub for Point2D<U, C> {
    type Output = Vector2D<U, C>;

    fn sub(self, other: Self) -> Vector2D<U, C> {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use crate::geometry::direction::Direction2D;
    use crate::quantity::units::Meters;
    use crate::quantity::Length;

    use super::*;

    type Point = Point2D<Meters>;
    type Vector = Vector2D<Meters>;

    #[test_case(0.0, 0.0, 3.0, 4.0, 5.0; "pythagorean")]
    #[test_case(1.0, 1.0, 1.0, 1.0, 0.0; "coincident")]
    #[test_case(-2.0, 0.0, 2.0, 0.0, 4.0; "horizontal")]
    fn distances(x1: f64, y1: f64, x2: f64, y2: f64, expected: f64) {
        let a = Point::from_coordinates(x1, y1);
        let b = Point::from_coordinates(x2, y2);
        assert_eq!(a.distance_to(b), Length::new(expected));
        assert_eq!(b.distance_to(a), Length::new(expected));
        assert_relative_eq!(a.distance_squared_to(b).value(), expected * expected);
    }

    #[test]
    fn point_vector_arithmetic() {
        let p = Point::from_coordinates(1.0, 2.0);
        let v = Vector::from_components(3.0, -1.0);
        assert_eq!(p + v, Point::from_coordinates(4.0, 1.0));
        assert_eq!(p + v - v, p);
        assert_eq!(
            Point::from_coordinates(4.0, 1.0) - p,
            Vector::from_components(3.0, -1.0)
        );
    }

    #[test]
    fn midpoint_and_interpolation() {
        let a = Point::from_coordinates(0.0, 0.0);
        let b = Point::from_coordinates(4.0, 2.0);
        assert_eq!(Point::midpoint(a, b), Point::from_coordinates(2.0, 1.0));
        assert_eq!(
            Point::interpolate_from(a, b, 0.25),
            Point::from_coordinates(1.0, 0.5)
        );
    }

    #[test]
    fn rotation_around_center() {
        let p = Point::from_coordinates(2.0, 1.0);
        let center = Point::from_coordinates(1.0, 1.0);
        let rotated = p.rotate_around(center, Angle::degrees(90.0));
        assert_eq!(rotated, Point::from_coordinates(1.0, 2.0));
    }

    #[test]
    fn mirror_across_axis() {
        let axis = Axis2D::x();
        let p = Point::from_coordinates(3.0, 2.0);
        assert_eq!(p.mirror_across(&axis), Point::from_coordinates(3.0, -2.0));
    }

    #[test]
    fn axis_measurements() {
        let axis = Axis2D::through(
            Point::from_coordinates(1.0, 0.0),
            Direction2D::positive_y(),
        );
        let p = Point::from_coordinates(3.0, 5.0);
        assert_eq!(p.signed_distance_along(&axis), Length::new(5.0));
        // Left of the +Y direction is -X.
        assert_eq!(p.signed_distance_from(&axis), Length::new(-2.0));
        assert_eq!(p.project_onto(&axis), Point::from_coordinates(1.0, 5.0));
    }

    #[test]
    fn scaling_about_a_center() {
        let p = Point::from_coordinates(3.0, 1.0);
        let center = Point::from_coordinates(1.0, 1.0);
        assert_eq!(
            p.scale_about(center, 2.0),
            Point::from_coordinates(5.0, 1.0)
        );
    }

    #[test]
    fn circumcenter_of_right_triangle() {
        let c = Point::circumcenter(
            Point::from_coordinates(0.0, 0.0),
            Point::from_coordinates(2.0, 0.0),
            Point::from_coordinates(0.0, 2.0),
        )
        .unwrap();
        assert_eq!(c, Point::from_coordinates(1.0, 1.0));
    }

    #[test]
    fn circumcenter_degeneracies() {
        let a = Point::from_coordinates(0.0, 0.0);
        let b = Point::from_coordinates(1.0, 0.0);
        let c = Point::from_coordinates(2.0, 0.0);
        assert!(Point::circumcenter(a, b, c).is_none());
        assert!(Point::circumcenter(a, a, b).is_none());
    }
}
