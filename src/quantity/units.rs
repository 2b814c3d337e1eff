//! Unit tags and type-level unit composition.
//!
//! A unit is the category that distinguishes a metre from a radian. Base
//! units are empty enums: they have no runtime representation and exist
//! only to make the type checker reject cross-unit arithmetic. Derived
//! units ([`Product`], [`Rate`]) are built by the quantity operators and
//! never constructed as values.

use std::marker::PhantomData;

/// Marker trait for unit tags.
///
/// Model a new base unit as an empty enum:
///
/// ```
/// use planis::quantity::units::Unit;
///
/// pub enum Pixels {}
/// impl Unit for Pixels {}
/// ```
pub trait Unit {}

/// Dimensionless values (ratios, trig results, interpolation parameters).
pub enum Unitless {}
impl Unit for Unitless {}

/// Lengths in metres.
pub enum Meters {}
impl Unit for Meters {}

/// Angles in radians.
pub enum Radians {}
impl Unit for Radians {}

/// Durations in seconds.
pub enum Seconds {}
impl Unit for Seconds {}

/// Unit formed by multiplying two units, e.g. `Product<Meters, Meters>`
/// for an area. Produced by `Quantity` multiplication.
pub struct Product<A: Unit, B: Unit>(PhantomData<(A, B)>);
impl<A: Unit, B: Unit> Unit for Product<A, B> {}

/// Unit formed by dividing a dependent unit by an independent one, e.g.
/// `Rate<Meters, Seconds>` for a speed. Produced by [`Quantity::per`].
///
/// [`Quantity::per`]: super::Quantity::per
pub struct Rate<Dep: Unit, Indep: Unit>(PhantomData<(Dep, Indep)>);
impl<Dep: Unit, Indep: Unit> Unit for Rate<Dep, Indep> {}

/// A unit multiplied by itself. Alias of [`Product`] so that `a * a` and
/// `a.squared()` agree on the resulting unit.
pub type Squared<U> = Product<U, U>;

/// A unit to the third power.
pub type Cubed<U> = Product<U, Product<U, U>>;
