//! Closed intervals over quantities.
//!
//! The constructor normalizes endpoint order, so `min <= max` always
//! holds. Union and intersection follow interval-lattice semantics:
//! touching intervals intersect to the touching point, not to nothing.
//!
//! For angle intervals, `sin` and `cos` compute tight output bounds
//! without sampling: whether the interval crosses a multiple of 2π is
//! decided by comparing `floor(min / 2π)` with `floor(max / 2π)`, which
//! pins the +1 extremum; the -1 extremum reuses the same test through the
//! π-shift identity `cos(x + π) = -cos(x)`, and sine reduces to cosine via
//! `sin x = cos(x - π/2)`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use super::tolerance::Tolerance;
use super::units::{Radians, Unit, Unitless};
use super::Quantity;

/// A closed interval between two quantities of the same unit.
pub struct Interval<U: Unit> {
    min: Quantity<U>,
    max: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates the interval spanning two endpoints, given in either order.
    #[must_use]
    pub fn from_endpoints(a: Quantity<U>, b: Quantity<U>) -> Self {
        if a.value() <= b.value() {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// The zero-width interval containing exactly one value.
    #[must_use]
    pub fn singleton(value: Quantity<U>) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower endpoint.
    #[must_use]
    pub fn min_value(self) -> Quantity<U> {
        self.min
    }

    /// Upper endpoint.
    #[must_use]
    pub fn max_value(self) -> Quantity<U> {
        self.max
    }

    /// Both endpoints as `(min, max)`.
    #[must_use]
    pub fn endpoints(self) -> (Quantity<U>, Quantity<U>) {
        (self.min, self.max)
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn midpoint(self) -> Quantity<U> {
        Quantity::midpoint(self.min, self.max)
    }

    /// Width of the interval; zero for singletons.
    #[must_use]
    pub fn width(self) -> Quantity<U> {
        self.max - self.min
    }

    /// Whether the value lies inside the interval, boundary-tolerant.
    #[must_use]
    pub fn contains(self, value: Quantity<U>) -> bool {
        self.contains_within(value, Tolerance::default())
    }

    /// [`Interval::contains`] with an explicit tolerance.
    #[must_use]
    pub fn contains_within(self, value: Quantity<U>, tolerance: Tolerance) -> bool {
        tolerance.leq(self.min.value(), value.value())
            && tolerance.leq(value.value(), self.max.value())
    }

    /// Whether this interval lies entirely inside `other`,
    /// boundary-tolerant.
    #[must_use]
    pub fn is_contained_in(self, other: Self) -> bool {
        let tolerance = Tolerance::default();
        tolerance.leq(other.min.value(), self.min.value())
            && tolerance.leq(self.max.value(), other.max.value())
    }

    /// Interpolates across the interval; `t` outside `[0, 1]`
    /// extrapolates.
    #[must_use]
    pub fn interpolate(self, t: f64) -> Quantity<U> {
        Quantity::interpolate_from(self.min, self.max, t)
    }

    /// The parameter at which [`Interval::interpolate`] produces `value`.
    ///
    /// A zero-width interval yields IEEE infinity or NaN; callers check
    /// explicitly.
    #[must_use]
    pub fn interpolation_parameter(self, value: Quantity<U>) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Smallest interval containing both operands.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Largest interval contained in both operands, or `None` when they
    /// are disjoint. Touching intervals intersect to the touching point.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        if Tolerance::default().leq(lo.value(), hi.value()) {
            Some(Self::from_endpoints(lo, hi))
        } else {
            None
        }
    }

    /// Smallest interval containing every value produced by the iterator,
    /// or `None` for an empty iterator.
    #[must_use]
    pub fn hull_of(values: impl IntoIterator<Item = Quantity<U>>) -> Option<Self> {
        values
            .into_iter()
            .map(Self::singleton)
            .reduce(Self::union)
    }

    /// Smallest interval containing every interval produced by the
    /// iterator, or `None` for an empty iterator.
    #[must_use]
    pub fn aggregate_of(intervals: impl IntoIterator<Item = Self>) -> Option<Self> {
        intervals.into_iter().reduce(Self::union)
    }
}

/// True when `[a, b]` contains some multiple of 2π; endpoint values that
/// are themselves multiples are covered by the endpoint evaluations.
fn crosses_multiple_of_two_pi(a: f64, b: f64) -> bool {
    (b - a).abs() >= TAU || (a / TAU).floor() != (b / TAU).floor()
}

impl Interval<Radians> {
    /// Tight bounds of `cos` over the interval.
    #[must_use]
    pub fn cos(self) -> Interval<Unitless> {
        let a = self.min.value();
        let b = self.max.value();
        let cos_a = a.cos();
        let cos_b = b.cos();
        // cos attains +1 exactly at multiples of 2π; it attains -1 where
        // the π-shifted interval crosses a multiple of 2π.
        let includes_max = crosses_multiple_of_two_pi(a, b);
        let includes_min = crosses_multiple_of_two_pi(a + PI, b + PI);
        let low = if includes_min { -1.0 } else { cos_a.min(cos_b) };
        let high = if includes_max { 1.0 } else { cos_a.max(cos_b) };
        Interval::from_endpoints(Quantity::new(low), Quantity::new(high))
    }

    /// Tight bounds of `sin` over the interval.
    #[must_use]
    pub fn sin(self) -> Interval<Unitless> {
        Interval::from_endpoints(
            self.min - Quantity::new(FRAC_PI_2),
            self.max - Quantity::new(FRAC_PI_2),
        )
        .cos()
    }
}

impl<U: Unit> Clone for Interval<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Interval<U> {}

impl<U: Unit> fmt::Debug for Interval<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interval")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl<U: Unit> PartialEq for Interval<U> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}
