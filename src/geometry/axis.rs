use std::fmt;

use crate::quantity::units::Unit;
use crate::quantity::Angle;

use super::direction::Direction2D;
use super::point::Point2D;
use super::vector::Vector2D;
use super::World;

/// An oriented line: an origin point plus a direction.
pub struct Axis2D<U: Unit, C = World> {
    origin: Point2D<U, C>,
    direction: Direction2D<C>,
}

impl<U: Unit, C> Axis2D<U, C> {
    /// The X axis of the coordinate space.
    #[must_use]
    pub fn x() -> Self {
        Self::through(Point2D::origin(), Direction2D::positive_x())
    }

    /// The Y axis of the coordinate space.
    #[must_use]
    pub fn y() -> Self {
        Self::through(Point2D::origin(), Direction2D::positive_y())
    }

    /// An axis through a point along a direction.
    #[must_use]
    pub const fn through(origin: Point2D<U, C>, direction: Direction2D<C>) -> Self {
        Self { origin, direction }
    }

    /// Origin point.
    #[must_use]
    pub const fn origin(&self) -> Point2D<U, C> {
        self.origin
    }

    /// Direction of the axis.
    #[must_use]
    pub const fn direction(&self) -> Direction2D<C> {
        self.direction
    }

    /// The same line oriented the other way.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.reversed(),
        }
    }

    /// The axis translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self {
            origin: self.origin + displacement,
            direction: self.direction,
        }
    }

    /// The axis rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self {
            origin: self.origin.rotate_around(center, angle),
            direction: self.direction.rotate_by(angle),
        }
    }

    /// The axis mirrored across another axis.
    #[must_use]
    pub fn mirror_across(&self, other: &Self) -> Self {
        Self {
            origin: self.origin.mirror_across(other),
            direction: self.direction.mirror_across(other),
        }
    }
}

impl<U: Unit, C> Clone for Axis2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Axis2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Axis2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis2D")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::quantity::units::Meters;

    use super::*;

    type Axis = Axis2D<Meters>;
    type Point = Point2D<Meters>;

    #[test]
    fn coordinate_axes() {
        assert_eq!(Axis::x().origin(), Point::origin());
        assert_eq!(Axis::x().direction(), Direction2D::positive_x());
        assert_eq!(Axis::y().direction(), Direction2D::positive_y());
    }

    #[test]
    fn reversal_keeps_origin() {
        let axis = Axis::x().reversed();
        assert_eq!(axis.origin(), Point::origin());
        assert_eq!(axis.direction(), Direction2D::negative_x());
    }

    #[test]
    fn rotation() {
        let axis = Axis::x().rotate_around(Point::origin(), Angle::degrees(90.0));
        assert_eq!(axis.direction(), Direction2D::positive_y());
    }

    #[test]
    fn translation() {
        let axis = Axis::x().translate_by(Vector2D::from_components(0.0, 2.0));
        assert_eq!(axis.origin(), Point::from_coordinates(0.0, 2.0));
        assert_eq!(axis.direction(), Direction2D::positive_x());
    }

    #[test]
    fn mirroring_across_the_x_axis_flips_y() {
        let tilted = Axis::through(
            Point::from_coordinates(1.0, 2.0),
            Direction2D::positive_y(),
        );
        let mirrored = tilted.mirror_across(&Axis::x());
        assert_eq!(mirrored.origin(), Point::from_coordinates(1.0, -2.0));
        assert_eq!(mirrored.direction(), Direction2D::negative_y());
    }
}
