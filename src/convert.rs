//! Flat-list serialization boundary.
//!
//! Serialization adapters encode primitives to flat numeric sequences and
//! rebuild them through public constructors only. Decoding a slice of the
//! wrong arity, or data that cannot be reconstructed (a zero direction),
//! yields `None` — never a partially built value.

use crate::geometry::{BoundingBox2D, Direction2D, LineSegment2D, Point2D, Vector2D};
use crate::quantity::units::Unit;
use crate::quantity::Quantity;

/// Round-trip encoding of a primitive to a flat list of raw values.
pub trait FlatList: Sized {
    /// Number of values in the encoded form.
    const ARITY: usize;

    /// Encodes to a flat list of `ARITY` values.
    fn to_list(&self) -> Vec<f64>;

    /// Decodes from a flat slice. Wrong arity or unreconstructible data
    /// yields `None`.
    fn from_list(values: &[f64]) -> Option<Self>;
}

impl<U: Unit, C> FlatList for Point2D<U, C> {
    const ARITY: usize = 2;

    fn to_list(&self) -> Vec<f64> {
        vec![self.x().value(), self.y().value()]
    }

    fn from_list(values: &[f64]) -> Option<Self> {
        match values {
            [x, y] => Some(Self::from_coordinates(*x, *y)),
            _ => None,
        }
    }
}

impl<U: Unit, C> FlatList for Vector2D<U, C> {
    const ARITY: usize = 2;

    fn to_list(&self) -> Vec<f64> {
        vec![self.x().value(), self.y().value()]
    }

    fn from_list(values: &[f64]) -> Option<Self> {
        match values {
            [x, y] => Some(Self::from_components(*x, *y)),
            _ => None,
        }
    }
}

impl<C> FlatList for Direction2D<C> {
    const ARITY: usize = 2;

    fn to_list(&self) -> Vec<f64> {
        vec![self.x(), self.y()]
    }

    fn from_list(values: &[f64]) -> Option<Self> {
        match values {
            // Renormalizes; a zero vector has no direction.
            [x, y] => Self::from_components(*x, *y),
            _ => None,
        }
    }
}

impl<U: Unit, C> FlatList for LineSegment2D<U, C> {
    const ARITY: usize = 4;

    fn to_list(&self) -> Vec<f64> {
        let (start, finish) = self.endpoints();
        vec![
            start.x().value(),
            start.y().value(),
            finish.x().value(),
            finish.y().value(),
        ]
    }

    fn from_list(values: &[f64]) -> Option<Self> {
        match values {
            [x1, y1, x2, y2] => Some(Self::from_endpoints(
                Point2D::from_coordinates(*x1, *y1),
                Point2D::from_coordinates(*x2, *y2),
            )),
            _ => None,
        }
    }
}

impl<U: Unit, C> FlatList for BoundingBox2D<U, C> {
    const ARITY: usize = 4;

    fn to_list(&self) -> Vec<f64> {
        vec![
            self.min_x().value(),
            self.max_x().value(),
            self.min_y().value(),
            self.max_y().value(),
        ]
    }

    fn from_list(values: &[f64]) -> Option<Self> {
        match values {
            [min_x, max_x, min_y, max_y] => Some(Self::from_extrema(
                Quantity::new(*min_x),
                Quantity::new(*max_x),
                Quantity::new(*min_y),
                Quantity::new(*max_y),
            )),
            _ => None,
        }
    }
}
