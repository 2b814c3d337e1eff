use std::fmt;
use std::marker::PhantomData;

use crate::quantity::units::Unit;
use crate::quantity::{Angle, Quantity};

use super::axis::Axis2D;
use super::direction::Direction2D;
use super::point::Point2D;
use super::vector::Vector2D;

/// Whether a frame's axes form a right- or left-handed basis.
///
/// Handedness is always derived from the axis directions, never stored,
/// so it cannot get out of sync with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    RightHanded,
    LeftHanded,
}

/// A local coordinate system inside a parent space.
///
/// `P` is the parent space the frame's origin and axes are expressed in;
/// `L` is the local space the frame defines. Values convert between the
/// two via [`Point2D::place_in`] / [`Point2D::relative_to`] (and the
/// vector/direction equivalents); no other operation crosses spaces.
///
/// All constructors produce orthonormal axes, which the conversion
/// functions rely on.
pub struct Frame2D<U: Unit, P, L> {
    origin: Point2D<U, P>,
    x_direction: Direction2D<P>,
    y_direction: Direction2D<P>,
    defines: PhantomData<L>,
}

impl<U: Unit, P, L> Frame2D<U, P, L> {
    /// The frame aligned with the parent space at its origin.
    #[must_use]
    pub fn at_origin() -> Self {
        Self::at_point(Point2D::origin())
    }

    /// An axis-aligned frame at the given origin.
    #[must_use]
    pub const fn at_point(origin: Point2D<U, P>) -> Self {
        Self {
            origin,
            x_direction: Direction2D::positive_x(),
            y_direction: Direction2D::positive_y(),
            defines: PhantomData,
        }
    }

    /// A right-handed frame with the given X direction; the Y direction
    /// is derived perpendicular.
    #[must_use]
    pub const fn with_x_direction(x_direction: Direction2D<P>, origin: Point2D<U, P>) -> Self {
        Self {
            origin,
            x_direction,
            y_direction: x_direction.perpendicular(),
            defines: PhantomData,
        }
    }

    /// A right-handed frame rotated by the given angle from the parent
    /// axes.
    #[must_use]
    pub fn with_angle(angle: Angle, origin: Point2D<U, P>) -> Self {
        Self::with_x_direction(Direction2D::from_angle(angle), origin)
    }

    /// Origin of the frame, in parent coordinates.
    #[must_use]
    pub const fn origin(&self) -> Point2D<U, P> {
        self.origin
    }

    /// X axis direction, in parent coordinates.
    #[must_use]
    pub const fn x_direction(&self) -> Direction2D<P> {
        self.x_direction
    }

    /// Y axis direction, in parent coordinates.
    #[must_use]
    pub const fn y_direction(&self) -> Direction2D<P> {
        self.y_direction
    }

    /// Derived handedness: the sign of `cross(x, y)`.
    #[must_use]
    pub fn handedness(&self) -> Handedness {
        if self.x_direction.cross(self.y_direction) > 0.0 {
            Handedness::RightHanded
        } else {
            Handedness::LeftHanded
        }
    }

    /// The same frame with the Y axis flipped, inverting handedness.
    #[must_use]
    pub const fn reverse_y(self) -> Self {
        Self {
            origin: self.origin,
            x_direction: self.x_direction,
            y_direction: self.y_direction.reversed(),
            defines: PhantomData,
        }
    }

    /// The frame's X axis.
    #[must_use]
    pub const fn x_axis(&self) -> Axis2D<U, P> {
        Axis2D::through(self.origin, self.x_direction)
    }

    /// The frame's Y axis.
    #[must_use]
    pub const fn y_axis(&self) -> Axis2D<U, P> {
        Axis2D::through(self.origin, self.y_direction)
    }

    /// The frame translated in its parent space.
    #[must_use]
    pub fn translate_by(self, displacement: Vector2D<U, P>) -> Self {
        Self {
            origin: self.origin + displacement,
            x_direction: self.x_direction,
            y_direction: self.y_direction,
            defines: PhantomData,
        }
    }

    /// The frame rotated around a point of its parent space.
    #[must_use]
    pub fn rotate_around(self, center: Point2D<U, P>, angle: Angle) -> Self {
        Self {
            origin: self.origin.rotate_around(center, angle),
            x_direction: self.x_direction.rotate_by(angle),
            y_direction: self.y_direction.rotate_by(angle),
            defines: PhantomData,
        }
    }

    /// Local X coordinate of a parent-space point.
    #[must_use]
    pub fn x_coordinate_of(&self, point: Point2D<U, P>) -> Quantity<U> {
        (point - self.origin).component_in(self.x_direction)
    }

    /// Local Y coordinate of a parent-space point.
    #[must_use]
    pub fn y_coordinate_of(&self, point: Point2D<U, P>) -> Quantity<U> {
        (point - self.origin).component_in(self.y_direction)
    }
}

impl<U: Unit, P, L> Clone for Frame2D<U, P, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, P, L> Copy for Frame2D<U, P, L> {}

impl<U: Unit, P, L> fmt::Debug for Frame2D<U, P, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame2D")
            .field("origin", &self.origin)
            .field("x_direction", &self.x_direction)
            .field("y_direction", &self.y_direction)
            .finish()
    }
}
