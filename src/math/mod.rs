//! Raw floating-point kernels behind the typed geometry layer.
//!
//! These functions work on plain nalgebra points and vectors; the typed
//! primitives unwrap their quantities, call in here, and re-wrap the
//! results. Every classification decision takes an explicit
//! [`Tolerance`](crate::quantity::Tolerance).

pub mod circumcenter_2d;
pub mod hull_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type for raw kernels.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type for raw kernels.
pub type Vector2 = nalgebra::Vector2<f64>;
