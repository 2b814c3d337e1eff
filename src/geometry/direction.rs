use std::fmt;
use std::marker::PhantomData;
use std::ops::Neg;

use crate::math;
use crate::quantity::units::Unit;
use crate::quantity::{Angle, Tolerance};

use super::axis::Axis2D;
use super::frame::Frame2D;
use super::World;

/// A unit vector in 2D, tagged with a coordinate space.
///
/// Construction normalizes, so the components always satisfy
/// `x² + y² = 1`; a tolerance-zero input vector has no direction.
pub struct Direction2D<C = World> {
    x: f64,
    y: f64,
    space: PhantomData<C>,
}

impl<C> Direction2D<C> {
    pub(crate) const fn new_unchecked(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// The direction of the vector `(x, y)`, or `None` when the vector is
    /// tolerance-zero.
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Option<Self> {
        Self::from_components_within(x, y, Tolerance::default())
    }

    /// [`Direction2D::from_components`] with an explicit tolerance.
    #[must_use]
    pub fn from_components_within(x: f64, y: f64, tolerance: Tolerance) -> Option<Self> {
        let norm = x.hypot(y);
        if tolerance.eq_zero(norm) {
            return None;
        }
        Some(Self::new_unchecked(x / norm, y / norm))
    }

    /// The direction at the given angle from the positive X axis.
    #[must_use]
    pub fn from_angle(angle: Angle) -> Self {
        Self::new_unchecked(angle.cos(), angle.sin())
    }

    /// The angle from the positive X axis, in `(-π, π]`.
    #[must_use]
    pub fn to_angle(self) -> Angle {
        Angle::radians(self.y.atan2(self.x))
    }

    /// The positive X direction.
    #[must_use]
    pub const fn positive_x() -> Self {
        Self::new_unchecked(1.0, 0.0)
    }

    /// The positive Y direction.
    #[must_use]
    pub const fn positive_y() -> Self {
        Self::new_unchecked(0.0, 1.0)
    }

    /// The negative X direction.
    #[must_use]
    pub const fn negative_x() -> Self {
        Self::new_unchecked(-1.0, 0.0)
    }

    /// The negative Y direction.
    #[must_use]
    pub const fn negative_y() -> Self {
        Self::new_unchecked(0.0, -1.0)
    }

    /// X component.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Y component.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Both components.
    #[must_use]
    pub const fn components(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new_unchecked(-self.x, -self.y)
    }

    /// The direction rotated a quarter turn counter-clockwise.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        Self::new_unchecked(-self.y, self.x)
    }

    /// The direction rotated by the given angle.
    #[must_use]
    pub fn rotate_by(self, angle: Angle) -> Self {
        let rotated = nalgebra::Rotation2::new(angle.value()) * math::Vector2::new(self.x, self.y);
        Self::new_unchecked(rotated.x, rotated.y)
    }

    /// Cosine of the angle between two directions.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Sine of the signed angle from `self` to `other`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The signed angle of `self` measured from `other`, in `(-π, π]`.
    #[must_use]
    pub fn angle_from(self, other: Self) -> Angle {
        Angle::radians(other.cross(self).atan2(other.dot(self)))
    }

    /// The direction mirrored across an axis (only the axis direction
    /// matters).
    #[must_use]
    pub fn mirror_across<U: Unit>(self, axis: &Axis2D<U, C>) -> Self {
        let m = axis.direction();
        let along = self.dot(m);
        Self::new_unchecked(
            2.0 * along * m.x() - self.x,
            2.0 * along * m.y() - self.y,
        )
    }

    /// Expresses this direction, currently in the frame's local space, in
    /// the frame's parent space.
    #[must_use]
    pub fn place_in<U: Unit, P>(self, frame: &Frame2D<U, P, C>) -> Direction2D<P> {
        let x_dir = frame.x_direction();
        let y_dir = frame.y_direction();
        Direction2D::new_unchecked(
            self.x * x_dir.x() + self.y * y_dir.x(),
            self.x * x_dir.y() + self.y * y_dir.y(),
        )
    }

    /// Expresses this direction, currently in the frame's parent space,
    /// in the frame's local space.
    #[must_use]
    pub fn relative_to<U: Unit, L>(self, frame: &Frame2D<U, C, L>) -> Direction2D<L> {
        let x_dir = frame.x_direction();
        let y_dir = frame.y_direction();
        Direction2D::new_unchecked(
            self.x * x_dir.x() + self.y * x_dir.y(),
            self.x * y_dir.x() + self.y * y_dir.y(),
        )
    }
}

impl<C> Clone for Direction2D<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Direction2D<C> {}

impl<C> fmt::Debug for Direction2D<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Direction2D")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<C> PartialEq for Direction2D<C> {
    fn eq(&self, other: &Self) -> bool {
        let tolerance = Tolerance::default();
        tolerance.eq(self.x, other.x) && tolerance.eq(self.y, other.y)
    }
}

impl<C> Neg for Direction2D<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.reversed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use super::*;

    type Direction = Direction2D;

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(Direction::from_components(0.0, 0.0).is_none());
        assert!(Direction::from_components(1e-12, -1e-12).is_none());
    }

    #[test_case(3.0, 4.0)]
    #[test_case(-1.0, 1.0)]
    #[test_case(0.0, -2.5)]
    #[test_case(1e8, 3.0)]
    fn construction_normalizes(x: f64, y: f64) {
        let d = Direction::from_components(x, y).unwrap();
        assert_relative_eq!(d.x() * d.x() + d.y() * d.y(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_round_trip() {
        let d = Direction::from_angle(Angle::degrees(30.0));
        assert_eq!(d.to_angle(), Angle::degrees(30.0));
        assert_relative_eq!(d.x(), 3.0_f64.sqrt() / 2.0);
        assert_relative_eq!(d.y(), 0.5);
    }

    #[test]
    fn perpendicular_is_quarter_turn() {
        let d = Direction::positive_x().perpendicular();
        assert_eq!(d, Direction::positive_y());
        assert_relative_eq!(Direction::positive_x().cross(d), 1.0);
    }

    #[test]
    fn rotation() {
        let d = Direction::positive_x().rotate_by(Angle::degrees(90.0));
        assert_eq!(d, Direction::positive_y());
        let back = d.rotate_by(Angle::degrees(-90.0));
        assert_eq!(back, Direction::positive_x());
    }

    #[test]
    fn signed_angle_between() {
        let a = Direction::positive_x();
        let b = Direction::positive_y();
        assert_eq!(b.angle_from(a), Angle::degrees(90.0));
        assert_eq!(a.angle_from(b), Angle::degrees(-90.0));
    }

    #[test]
    fn reversal() {
        let d = Direction::from_components(1.0, 2.0).unwrap();
        assert_eq!(-d, d.reversed());
        assert_relative_eq!(d.dot(d.reversed()), -1.0);
    }
}
