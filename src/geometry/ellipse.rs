use std::f64::consts::PI;
use std::fmt;

use crate::quantity::units::{Squared, Unit};
use crate::quantity::{Angle, Quantity};

use super::bounding_box::BoundingBox2D;
use super::direction::Direction2D;
use super::frame::Frame2D;
use super::point::Point2D;
use super::vector::Vector2D;
use super::World;

/// An ellipse: a center, an X axis direction and two radii.
///
/// The Y axis direction is derived perpendicular to the X axis, so the
/// axes cannot fall out of alignment.
pub struct Ellipse2D<U: Unit, C = World> {
    center: Point2D<U, C>,
    x_direction: Direction2D<C>,
    x_radius: Quantity<U>,
    y_radius: Quantity<U>,
}

impl<U: Unit, C> Ellipse2D<U, C> {
    /// An ellipse from its center, X axis direction and radii (absolute
    /// values are used).
    #[must_use]
    pub fn with(
        center: Point2D<U, C>,
        x_direction: Direction2D<C>,
        x_radius: Quantity<U>,
        y_radius: Quantity<U>,
    ) -> Self {
        Self {
            center,
            x_direction,
            x_radius: x_radius.abs(),
            y_radius: y_radius.abs(),
        }
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point2D<U, C> {
        self.center
    }

    /// X axis direction.
    #[must_use]
    pub const fn x_direction(&self) -> Direction2D<C> {
        self.x_direction
    }

    /// Derived Y axis direction.
    #[must_use]
    pub const fn y_direction(&self) -> Direction2D<C> {
        self.x_direction.perpendicular()
    }

    /// Radius along the X axis.
    #[must_use]
    pub const fn x_radius(&self) -> Quantity<U> {
        self.x_radius
    }

    /// Radius along the Y axis.
    #[must_use]
    pub const fn y_radius(&self) -> Quantity<U> {
        self.y_radius
    }

    /// The ellipse's axes as a frame defining a local space `L`.
    #[must_use]
    pub fn axes<L>(&self) -> Frame2D<U, C, L> {
        Frame2D::with_x_direction(self.x_direction, self.center)
    }

    /// Enclosed area, `π * a * b`.
    #[must_use]
    pub fn area(&self) -> Quantity<Squared<U>> {
        (self.x_radius * self.y_radius) * PI
    }

    /// Point on the ellipse at the given parameter angle: the X
    /// coordinate follows the cosine, the Y coordinate the sine.
    #[must_use]
    pub fn point_on(&self, parameter: Angle) -> Point2D<U, C> {
        self.center
            + Vector2D::with_length(self.x_radius * parameter.cos(), self.x_direction)
            + Vector2D::with_length(self.y_radius * parameter.sin(), self.y_direction())
    }

    /// Smallest axis-aligned box containing the ellipse.
    ///
    /// The half-extent of a tilted ellipse along a coordinate axis is
    /// `sqrt((a cos φ)² + (b sin φ)²)` with `φ` the tilt of the X axis.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        let tilt = self.x_direction.to_angle();
        let half_width = ((self.x_radius * tilt.cos()).squared()
            + (self.y_radius * tilt.sin()).squared())
        .sqrt();
        let half_height = ((self.x_radius * tilt.sin()).squared()
            + (self.y_radius * tilt.cos()).squared())
        .sqrt();
        BoundingBox2D::from_extrema(
            self.center.x() - half_width,
            self.center.x() + half_width,
            self.center.y() - half_height,
            self.center.y() + half_height,
        )
    }

    /// The ellipse translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self {
            center: self.center + displacement,
            ..*self
        }
    }

    /// The ellipse rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self {
            center: self.center.rotate_around(center, angle),
            x_direction: self.x_direction.rotate_by(angle),
            ..*self
        }
    }
}

impl<U: Unit, C> Clone for Ellipse2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Ellipse2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Ellipse2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ellipse2D")
            .field("center", &self.center)
            .field("x_direction", &self.x_direction)
            .field("x_radius", &self.x_radius)
            .field("y_radius", &self.y_radius)
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

    type Ellipse = Ellipse2D<Meters>;
    type Point = Point2D<Meters>;

    fn axis_aligned(a: f64, b: f64) -> Ellipse {
        Ellipse::with(
            Point::origin(),
            Direction2D::positive_x(),
            Length::new(a),
            Length::new(b),
        )
    }

    #[test]
    fn radii_are_stored_absolute() {
        let e = Ellipse::with(
            Point::origin(),
            Direction2D::positive_x(),
            Length::new(-3.0),
            Length::new(2.0),
        );
        assert_eq!(e.x_radius(), Length::new(3.0));
        assert_eq!(e.y_radius(), Length::new(2.0));
    }

    #[test]
    fn area() {
        let e = axis_aligned(3.0, 2.0);
        assert_relative_eq!(e.area().value(), 6.0 * PI);
    }

    #[test]
    fn points_on_the_axes() {
        let e = axis_aligned(3.0, 2.0);
        assert_eq!(e.point_on(Angle::radians(0.0)), Point::from_coordinates(3.0, 0.0));
        assert_eq!(
            e.point_on(Angle::degrees(90.0)),
            Point::from_coordinates(0.0, 2.0)
        );
        assert_eq!(
            e.point_on(Angle::degrees(180.0)),
            Point::from_coordinates(-3.0, 0.0)
        );
    }

    #[test]
    fn axis_aligned_bounding_box() {
        let bounds = axis_aligned(3.0, 2.0).bounding_box();
        assert_eq!(bounds.min_x(), Length::new(-3.0));
        assert_eq!(bounds.max_x(), Length::new(3.0));
        assert_eq!(bounds.min_y(), Length::new(-2.0));
        assert_eq!(bounds.max_y(), Length::new(2.0));
    }

    #[test]
    fn rotated_bounding_box_covers_samples() {
        let e = axis_aligned(3.0, 1.0).rotate_around(Point::origin(), Angle::degrees(30.0));
        let bounds = e.bounding_box();
        for k in 0..360 {
            let p = e.point_on(Angle::degrees(f64::from(k)));
            assert!(bounds.contains(p), "{p:?} escaped {bounds:?}");
        }
        // The tilted extent is tight, not the circumscribed-circle box.
        let exact = (9.0_f64 * 0.75 + 1.0 * 0.25).sqrt();
        assert_relative_eq!(bounds.max_x().value(), exact, epsilon = 1e-9);
    }

    #[test]
    fn circle_special_case() {
        let e = axis_aligned(2.0, 2.0);
        let p = e.point_on(Angle::degrees(45.0));
        assert_relative_eq!(p.x().value(), 2.0 * 0.5_f64.sqrt());
        assert_relative_eq!(p.y().value(), 2.0 * 0.5_f64.sqrt());
    }

    #[test]
    fn frame_conversion_round_trip() {
        enum Local {}
        let e = Ellipse::with(
            Point::from_coordinates(1.0, 2.0),
            Direction2D::from_angle(Angle::degrees(30.0)),
            Length::new(3.0),
            Length::new(1.0),
        );
        let axes: Frame2D<Meters, _, Local> = e.axes();
        let local = Point2D::<Meters, Local>::from_coordinates(1.0, 0.5);
        assert_eq!(local.place_in(&axes).relative_to(&axes), local);
    }
}
