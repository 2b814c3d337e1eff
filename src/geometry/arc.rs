use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt;

use crate::quantity::units::Unit;
use crate::quantity::{Angle, Quantity, Tolerance};

use super::bounding_box::BoundingBox2D;
use super::direction::Direction2D;
use super::point::Point2D;
use super::vector::Vector2D;
use super::World;

/// Which of the four qualitative solutions [`Arc2D::with_radius`] should
/// produce: the short or long way around, sweeping counter-clockwise
/// (positive) or clockwise (negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSweep {
    SmallPositive,
    SmallNegative,
    LargePositive,
    LargeNegative,
}

/// A circular arc.
///
/// Stores the start point, the X direction of the arc's local frame at
/// the start, the signed arc length and the swept angle. The center and
/// radius are derived on access, never stored, so they cannot disagree
/// with the defining data. A positive swept angle is counter-clockwise;
/// for clockwise arcs both the swept angle and the signed length are
/// negative and travel starts along the reversed X direction.
///
/// A tolerance-zero swept angle is the degenerate case: the "arc" is a
/// straight run along its X direction, [`Arc2D::center_point`] is `None`,
/// and the parameterization interpolates linearly.
pub struct Arc2D<U: Unit, C = World> {
    start: Point2D<U, C>,
    x_direction: Direction2D<C>,
    signed_length: Quantity<U>,
    swept_angle: Angle,
}

impl<U: Unit, C> Arc2D<U, C> {
    /// The arc sweeping the given angle around a center point, starting
    /// at `start`.
    ///
    /// A start point coincident with the center produces a degenerate
    /// zero-radius arc.
    #[must_use]
    pub fn swept_around(center: Point2D<U, C>, swept_angle: Angle, start: Point2D<U, C>) -> Self {
        let radius_vector = start - center;
        match radius_vector.direction() {
            None => Self {
                start,
                x_direction: Direction2D::positive_x(),
                signed_length: Quantity::zero(),
                swept_angle,
            },
            Some(radial) => Self {
                start,
                x_direction: radial.perpendicular(),
                signed_length: radius_vector.length() * swept_angle.value(),
                swept_angle,
            },
        }
    }

    /// The arc from `start` to `end` subtending the given swept angle.
    ///
    /// The radius is derived from the chord length as
    /// `chord / (2 |sin(angle / 2)|)`. A tolerance-zero swept angle gives
    /// the degenerate straight arc along the chord; a degenerate chord
    /// gives a zero-length arc.
    #[must_use]
    pub fn from_swept_angle(start: Point2D<U, C>, end: Point2D<U, C>, swept_angle: Angle) -> Self {
        let chord = end - start;
        let Some(chord_direction) = chord.direction() else {
            return Self {
                start,
                x_direction: Direction2D::positive_x(),
                signed_length: Quantity::zero(),
                swept_angle,
            };
        };
        let distance = chord.length();
        if Tolerance::default().eq_zero(swept_angle.value()) {
            return Self {
                start,
                x_direction: chord_direction,
                signed_length: distance,
                swept_angle,
            };
        }
        let half_angle = swept_angle * 0.5;
        let sin_half = half_angle.sin();
        let radius = distance / (2.0 * sin_half.abs());
        // The tangent at the start sits half the swept angle back from
        // the chord; when sin(angle/2) is negative the local frame is on
        // the other side of the chord, a further half turn away.
        let mut rotation = -half_angle;
        if sin_half < 0.0 {
            rotation = rotation + Angle::pi();
        }
        Self {
            start,
            x_direction: chord_direction.rotate_by(rotation),
            signed_length: radius * swept_angle.value(),
            swept_angle,
        }
    }

    /// The arc of the given radius from `start` to `end`, picking one of
    /// the four qualitative solutions.
    ///
    /// Returns `None` when the chord is degenerate or the radius is
    /// tolerance-smaller than half the chord (no circle of that radius
    /// touches both points). A radius tolerance-equal to half the chord
    /// produces the semicircle solutions.
    #[must_use]
    pub fn with_radius(
        radius: Quantity<U>,
        sweep: ArcSweep,
        start: Point2D<U, C>,
        end: Point2D<U, C>,
    ) -> Option<Self> {
        Self::with_radius_within(radius, sweep, start, end, Tolerance::default())
    }

    /// [`Arc2D::with_radius`] with an explicit tolerance.
    #[must_use]
    pub fn with_radius_within(
        radius: Quantity<U>,
        sweep: ArcSweep,
        start: Point2D<U, C>,
        end: Point2D<U, C>,
        tolerance: Tolerance,
    ) -> Option<Self> {
        let distance = end.distance_to(start);
        if tolerance.eq_zero(distance.value()) {
            return None;
        }
        let radius = radius.abs();
        let half_distance = distance * 0.5;
        if tolerance.cmp(radius.value(), half_distance.value()) == Ordering::Less {
            return None;
        }
        let ratio = (half_distance / radius).min(1.0);
        let short_angle = 2.0 * ratio.asin();
        let swept = match sweep {
            ArcSweep::SmallPositive => short_angle,
            ArcSweep::SmallNegative => -short_angle,
            ArcSweep::LargePositive => TAU - short_angle,
            ArcSweep::LargeNegative => short_angle - TAU,
        };
        Some(Self::from_swept_angle(start, end, Angle::radians(swept)))
    }

    /// The arc through three points, traversed from the first through the
    /// second to the third. `None` when the points are collinear or
    /// coincident.
    #[must_use]
    pub fn through_points(
        p1: Point2D<U, C>,
        p2: Point2D<U, C>,
        p3: Point2D<U, C>,
    ) -> Option<Self> {
        let center = Point2D::circumcenter(p1, p2, p3)?;
        let a1 = (p1 - center).direction()?.to_angle();
        let a2 = (p2 - center).direction()?.to_angle();
        let a3 = (p3 - center).direction()?.to_angle();
        let partial = (a2 - a1).value().rem_euclid(TAU);
        let full = (a3 - a1).value().rem_euclid(TAU);
        // Sweep counter-clockwise if that order passes through p2 first,
        // otherwise go the other way around.
        let swept = if partial <= full { full } else { full - TAU };
        Some(Self::swept_around(center, Angle::radians(swept), p1))
    }

    /// Start point.
    #[must_use]
    pub const fn start_point(&self) -> Point2D<U, C> {
        self.start
    }

    /// End point.
    #[must_use]
    pub fn end_point(&self) -> Point2D<U, C> {
        self.point_on(1.0)
    }

    /// Point halfway along the arc.
    #[must_use]
    pub fn midpoint(&self) -> Point2D<U, C> {
        self.point_on(0.5)
    }

    /// The X direction of the arc's local frame at the start point (the
    /// counter-clockwise tangent).
    #[must_use]
    pub const fn x_direction(&self) -> Direction2D<C> {
        self.x_direction
    }

    /// Swept angle; positive counter-clockwise.
    #[must_use]
    pub const fn swept_angle(&self) -> Angle {
        self.swept_angle
    }

    /// Signed arc length; negative for clockwise arcs.
    #[must_use]
    pub const fn signed_length(&self) -> Quantity<U> {
        self.signed_length
    }

    /// Arc length.
    #[must_use]
    pub fn length(&self) -> Quantity<U> {
        self.signed_length.abs()
    }

    /// Derived radius, `|signed length / swept angle|`. A degenerate arc
    /// yields IEEE infinity or NaN; check [`Arc2D::center_point`] first.
    #[must_use]
    pub fn radius(&self) -> Quantity<U> {
        (self.signed_length / self.swept_angle.value()).abs()
    }

    /// Whether the swept angle is tolerance-zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        Tolerance::default().eq_zero(self.swept_angle.value())
    }

    /// Derived center point, or `None` for a degenerate arc (callers fall
    /// back to [`Arc2D::start_point`]).
    #[must_use]
    pub fn center_point(&self) -> Option<Point2D<U, C>> {
        if self.is_degenerate() {
            return None;
        }
        let radius = self.signed_length / self.swept_angle.value();
        Some(self.start + Vector2D::with_length(radius, self.x_direction.perpendicular()))
    }

    /// Point at parameter `t` in `[0, 1]` along the arc.
    ///
    /// Degenerate arcs interpolate linearly along the X direction.
    #[must_use]
    pub fn point_on(&self, t: f64) -> Point2D<U, C> {
        let theta = self.swept_angle.value() * t;
        let distance = self.signed_length * t;
        if Tolerance::default().eq_zero(theta) {
            return self.start + Vector2D::with_length(distance, self.x_direction);
        }
        let radius = self.signed_length / self.swept_angle.value();
        let x = radius * theta.sin();
        let y = radius * (1.0 - theta.cos());
        self.start
            + Vector2D::with_length(x, self.x_direction)
            + Vector2D::with_length(y, self.x_direction.perpendicular())
    }

    /// Derivative with respect to the parameter: a vector of magnitude
    /// equal to the arc length, tangent to the arc at `t`.
    #[must_use]
    pub fn first_derivative(&self, t: f64) -> Vector2D<U, C> {
        let rotated = self
            .x_direction
            .rotate_by(Angle::radians(self.swept_angle.value() * t));
        Vector2D::with_length(self.signed_length, rotated)
    }

    /// Direction of travel at parameter `t`, or `None` for a zero-length
    /// arc.
    #[must_use]
    pub fn tangent_direction(&self, t: f64) -> Option<Direction2D<C>> {
        self.first_derivative(t).direction()
    }

    /// The same arc traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end_point(),
            x_direction: self.x_direction.rotate_by(self.swept_angle),
            signed_length: -self.signed_length,
            swept_angle: -self.swept_angle,
        }
    }

    /// Smallest axis-aligned box containing the arc.
    ///
    /// For swept angles under five degrees the arc hugs its chord, and
    /// the hull of the endpoints plus a tangent-offset point covers it
    /// without the center construction. Otherwise the exact angular
    /// extrema come from interval cosine/sine bound propagation over the
    /// start/end angles.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        if self.swept_angle.value().abs() < Angle::degrees(5.0).value() {
            let tangent_offset = Vector2D::with_length(self.signed_length * 0.5, self.x_direction);
            return BoundingBox2D::hull_of([
                self.start,
                self.end_point(),
                self.start + tangent_offset,
            ])
            .unwrap_or_else(|| BoundingBox2D::singleton(self.start));
        }
        let Some(center) = self.center_point() else {
            return BoundingBox2D::singleton(self.start);
        };
        let Some(radial) = (self.start - center).direction() else {
            // Zero radius: the whole arc is the start point.
            return BoundingBox2D::singleton(self.start);
        };
        let radius = self.radius();
        let start_angle = radial.to_angle();
        let angles = crate::quantity::Interval::from_endpoints(
            start_angle,
            start_angle + self.swept_angle,
        );
        let cos_bounds = angles.cos();
        let sin_bounds = angles.sin();
        BoundingBox2D::from_extrema(
            center.x() + radius * cos_bounds.min_value().value(),
            center.x() + radius * cos_bounds.max_value().value(),
            center.y() + radius * sin_bounds.min_value().value(),
            center.y() + radius * sin_bounds.max_value().value(),
        )
    }

    /// The arc translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self {
            start: self.start + displacement,
            x_direction: self.x_direction,
            signed_length: self.signed_length,
            swept_angle: self.swept_angle,
        }
    }

    /// The arc rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self {
            start: self.start.rotate_around(center, angle),
            x_direction: self.x_direction.rotate_by(angle),
            signed_length: self.signed_length,
            swept_angle: self.swept_angle,
        }
    }
}

impl<U: Unit, C> Clone for Arc2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Arc2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Arc2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arc2D")
            .field("start", &self.start)
            .field("x_direction", &self.x_direction)
            .field("signed_length", &self.signed_length)
            .field("swept_angle", &self.swept_angle)
            .finish()
    }
}
