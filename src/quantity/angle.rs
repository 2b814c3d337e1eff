//! Angle construction, normalization and trigonometry.
//!
//! An [`Angle`] is a [`Quantity`] over radians, so the whole arithmetic
//! engine applies unchanged. `==` compares raw radian values under
//! tolerance; identity modulo full turns is the separate predicate
//! `is_coterminal_to`, which compares the `(-π, π]` normal forms.
//!
//! [`Angle`]: super::Angle

use std::f64::consts::{PI, TAU};

use super::tolerance::Tolerance;
use super::units::{Radians, Unit};
use super::Quantity;

impl Quantity<Radians> {
    /// An angle from a value in radians.
    #[must_use]
    pub const fn radians(value: f64) -> Self {
        Self::new(value)
    }

    /// An angle from a value in degrees.
    #[must_use]
    pub fn degrees(value: f64) -> Self {
        Self::new(value.to_radians())
    }

    /// An angle from a number of full turns.
    #[must_use]
    pub fn turns(value: f64) -> Self {
        Self::new(value * TAU)
    }

    /// Half a turn.
    #[must_use]
    pub const fn pi() -> Self {
        Self::new(PI)
    }

    /// A full turn.
    #[must_use]
    pub const fn two_pi() -> Self {
        Self::new(TAU)
    }

    /// The value in degrees.
    #[must_use]
    pub fn in_degrees(self) -> f64 {
        self.value().to_degrees()
    }

    /// The value in full turns.
    #[must_use]
    pub fn in_turns(self) -> f64 {
        self.value() / TAU
    }

    /// Sine of the angle.
    #[must_use]
    pub fn sin(self) -> f64 {
        self.value().sin()
    }

    /// Cosine of the angle.
    #[must_use]
    pub fn cos(self) -> f64 {
        self.value().cos()
    }

    /// Tangent of the angle.
    #[must_use]
    pub fn tan(self) -> f64 {
        self.value().tan()
    }

    /// The equivalent angle in `(-π, π]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let wrapped = self.value().rem_euclid(TAU);
        if wrapped > PI {
            Self::new(wrapped - TAU)
        } else {
            Self::new(wrapped)
        }
    }

    /// Whether two angles describe the same direction of rotation end
    /// state: their `(-π, π]` normal forms are tolerance-equal, treating
    /// results just above `-π` and just below `π` as the same turn.
    #[must_use]
    pub fn is_coterminal_to(self, other: Self) -> bool {
        let tol = Tolerance::default();
        let a = self.normalized().value();
        let b = other.normalized().value();
        tol.eq(a, b) || tol.eq((a - b).abs(), TAU)
    }

    /// The angle of the vector `(x, y)` measured from the positive X axis,
    /// for any same-unit coordinate pair.
    #[must_use]
    pub fn atan2<V: Unit>(y: Quantity<V>, x: Quantity<V>) -> Self {
        Self::new(y.value().atan2(x.value()))
    }
}
