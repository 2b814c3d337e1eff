use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math;
use crate::quantity::units::{Product, Unit};
use crate::quantity::{Angle, Quantity};

use super::axis::Axis2D;
use super::direction::Direction2D;
use super::frame::Frame2D;
use super::World;

/// A displacement in 2D, tagged with a unit and a coordinate space.
pub struct Vector2D<U: Unit, C = World> {
    x: Quantity<U>,
    y: Quantity<U>,
    space: PhantomData<C>,
}

impl<U: Unit, C> Vector2D<U, C> {
    /// A vector from its components.
    #[must_use]
    pub const fn new(x: Quantity<U>, y: Quantity<U>) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// A vector from raw component values.
    #[must_use]
    pub const fn from_components(x: f64, y: f64) -> Self {
        Self::new(Quantity::new(x), Quantity::new(y))
    }

    /// The zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_components(0.0, 0.0)
    }

    /// A vector of the given length along the given direction.
    #[must_use]
    pub fn with_length(length: Quantity<U>, direction: Direction2D<C>) -> Self {
        Self::new(length * direction.x(), length * direction.y())
    }

    /// X component.
    #[must_use]
    pub const fn x(self) -> Quantity<U> {
        self.x
    }

    /// Y component.
    #[must_use]
    pub const fn y(self) -> Quantity<U> {
        self.y
    }

    /// Both components.
    #[must_use]
    pub const fn components(self) -> (Quantity<U>, Quantity<U>) {
        (self.x, self.y)
    }

    /// Length of the vector.
    #[must_use]
    pub fn length(self) -> Quantity<U> {
        self.squared_length().sqrt()
    }

    /// Squared length, avoiding the square root.
    #[must_use]
    pub fn squared_length(self) -> Quantity<Product<U, U>> {
        self.x.squared() + self.y.squared()
    }

    /// The direction of this vector, or `None` for a tolerance-zero
    /// vector.
    #[must_use]
    pub fn direction(self) -> Option<Direction2D<C>> {
        Direction2D::from_components(self.x.value(), self.y.value())
    }

    /// Dot product; units compose.
    #[must_use]
    pub fn dot<V: Unit>(self, other: Vector2D<V, C>) -> Quantity<Product<U, V>> {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (the Z component of the 3D cross product); units
    /// compose.
    #[must_use]
    pub fn cross<V: Unit>(self, other: Vector2D<V, C>) -> Quantity<Product<U, V>> {
        self.x * other.y - self.y * other.x
    }

    /// The vector rotated a quarter turn counter-clockwise.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// The vector rotated by the given angle.
    #[must_use]
    pub fn rotate_by(self, angle: Angle) -> Self {
        let rotated = nalgebra::Rotation2::new(angle.value())
            * math::Vector2::new(self.x.value(), self.y.value());
        Self::from_components(rotated.x, rotated.y)
    }

    /// The component of this vector along a direction.
    #[must_use]
    pub fn component_in(self, direction: Direction2D<C>) -> Quantity<U> {
        self.x * direction.x() + self.y * direction.y()
    }

    /// The projection of this vector onto a direction.
    #[must_use]
    pub fn project_onto(self, direction: Direction2D<C>) -> Self {
        Self::with_length(self.component_in(direction), direction)
    }

    /// The vector mirrored across an axis (only the axis direction
    /// matters).
    #[must_use]
    pub fn mirror_across(self, axis: &Axis2D<U, C>) -> Self {
        let direction = axis.direction();
        let along = self.component_in(direction);
        Self::new(
            along * (2.0 * direction.x()) - self.x,
            along * (2.0 * direction.y()) - self.y,
        )
    }

    /// Componentwise interpolation; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate_from(a: Self, b: Self, t: f64) -> Self {
        Self::new(
            Quantity::interpolate_from(a.x, b.x, t),
            Quantity::interpolate_from(a.y, b.y, t),
        )
    }

    /// Expresses this vector, currently in the frame's local space, in
    /// the frame's parent space.
    #[must_use]
    pub fn place_in<P>(self, frame: &Frame2D<U, P, C>) -> Vector2D<U, P> {
        let x_dir = frame.x_direction();
        let y_dir = frame.y_direction();
        Vector2D::new(
            self.x * x_dir.x() + self.y * y_dir.x(),
            self.x * x_dir.y() + self.y * y_dir.y(),
        )
    }

    /// Expresses this vector, currently in the frame's parent space, in
    /// the frame's local space.
    #[must_use]
    pub fn relative_to<L>(self, frame: &Frame2D<U, C, L>) -> Vector2D<U, L> {
        Vector2D::new(
            self.component_in(frame.x_direction()),
            self.component_in(frame.y_direction()),
        )
    }
}

impl<U: Unit, C> Clone for Vector2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Vector2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Vector2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2D")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<U: Unit, C> PartialEq for Vector2D<U, C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<U: Unit, C> Add for Vector2D<U, C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<U: Unit, C> Sub for Vector2D<U, C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<U: Unit, C> Neg for Vector2D<U, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<U: Unit, C> Mul<f64> for Vector2D<U, C> {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl<U: Unit, C> Div<f64> for Vector2D<U, C> {
    type Output = Self;

    fn div(self, scale: f64) -> Self {
        Self::new(self.x / scale, self.y / scale)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::geometry::point::Point2D;
    use crate::quantity::units::Meters;
    use crate::quantity::{Area, Length};

    use super::*;

    type Vector = Vector2D<Meters>;

    #[test]
    fn length_composes_units() {
        let v = Vector::from_components(3.0, 4.0);
        assert_eq!(v.length(), Length::new(5.0));
        let squared: Area = v.squared_length();
        assert_relative_eq!(squared.value(), 25.0);
    }

    #[test]
    fn direction_of_zero_vector_is_none() {
        assert!(Vector::zero().direction().is_none());
        let d = Vector::from_components(0.0, -2.0).direction().unwrap();
        assert_eq!(d, Direction2D::negative_y());
    }

    #[test]
    fn with_length_recovers_length() {
        let d = Direction2D::from_components(1.0, 1.0).unwrap();
        let v = Vector::with_length(Length::new(2.0), d);
        assert_eq!(v.length(), Length::new(2.0));
    }

    #[test]
    fn dot_and_cross_compose_units() {
        let a = Vector::from_components(1.0, 2.0);
        let b = Vector::from_components(3.0, 4.0);
        let dot: Area = a.dot(b);
        let cross: Area = a.cross(b);
        assert_relative_eq!(dot.value(), 11.0);
        assert_relative_eq!(cross.value(), -2.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vector::from_components(1.0, 2.0);
        let b = Vector::from_components(3.0, -1.0);
        assert_eq!(a + b, Vector::from_components(4.0, 1.0));
        assert_eq!(a - b, Vector::from_components(-2.0, 3.0));
        assert_eq!(-a, Vector::from_components(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector::from_components(2.0, 4.0));
        assert_eq!(a / 2.0, Vector::from_components(0.5, 1.0));
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let v = Vector::from_components(1.0, 0.0);
        let r = v.rotate_by(Angle::degrees(90.0));
        assert_eq!(r, Vector::from_components(0.0, 1.0));
        assert_eq!(r, v.perpendicular());
    }

    #[test]
    fn projection_and_components() {
        let v = Vector::from_components(3.0, 4.0);
        let d = Direction2D::positive_x();
        assert_eq!(v.component_in(d), Length::new(3.0));
        assert_eq!(v.project_onto(d), Vector::from_components(3.0, 0.0));
    }

    #[test]
    fn mirror_across_x_axis_flips_y() {
        let axis = Axis2D::x();
        let v = Vector::from_components(2.0, 3.0);
        assert_eq!(v.mirror_across(&axis), Vector::from_components(2.0, -3.0));
    }

    #[test]
    fn mirror_across_diagonal_swaps_components() {
        let d = Direction2D::from_components(1.0, 1.0).unwrap();
        let axis = Axis2D::through(Point2D::origin(), d);
        let v = Vector::from_components(2.0, 0.0);
        assert_eq!(v.mirror_across(&axis), Vector::from_components(0.0, 2.0));
    }

    #[test]
    fn interpolation() {
        let a = Vector::from_components(0.0, 0.0);
        let b = Vector::from_components(4.0, -2.0);
        assert_eq!(
            Vector::interpolate_from(a, b, 0.75),
            Vector::from_components(3.0, -1.5)
        );
    }
}
