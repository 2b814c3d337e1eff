use std::fmt;

use crate::error::GeometryError;
use crate::quantity::units::Unit;
use crate::quantity::{Angle, Quantity};
use crate::Result;

use super::bounding_box::BoundingBox2D;
use super::point::Point2D;
use super::segment::LineSegment2D;
use super::vector::Vector2D;
use super::World;

/// An open chain of line segments through a vertex list.
pub struct Polyline2D<U: Unit, C = World> {
    vertices: Vec<Point2D<U, C>>,
}

impl<U: Unit, C> Polyline2D<U, C> {
    /// A polyline through the given vertices.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than two vertices are given.
    pub fn from_vertices(vertices: Vec<Point2D<U, C>>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                entity: "polyline",
                minimum: 2,
                actual: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// The vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2D<U, C>] {
        &self.vertices
    }

    /// First vertex.
    #[must_use]
    pub fn start_point(&self) -> Point2D<U, C> {
        self.vertices[0]
    }

    /// Last vertex.
    #[must_use]
    pub fn end_point(&self) -> Point2D<U, C> {
        self.vertices[self.vertices.len() - 1]
    }

    /// The segments between consecutive vertices.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment2D<U, C>> {
        self.vertices
            .windows(2)
            .map(|pair| LineSegment2D::from_endpoints(pair[0], pair[1]))
            .collect()
    }

    /// Total length of all segments.
    #[must_use]
    pub fn length(&self) -> Quantity<U> {
        self.segments().iter().map(LineSegment2D::length).sum()
    }

    /// Smallest axis-aligned box containing the polyline.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        BoundingBox2D::hull_of(self.vertices.iter().copied())
            .unwrap_or_else(|| BoundingBox2D::singleton(self.vertices[0]))
    }

    /// The polyline traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// The polyline translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| *p + displacement).collect(),
        }
    }

    /// The polyline rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.rotate_around(center, angle))
                .collect(),
        }
    }
}

impl<U: Unit, C> Clone for Polyline2D<U, C> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
        }
    }
}

impl<U: Unit, C> fmt::Debug for Polyline2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polyline2D")
            .field("vertices", &self.vertices)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::quantity::units::Meters;
    use crate::quantity::Length;

    use super::*;

    type Polyline = Polyline2D<Meters>;
    type Point = Point2D<Meters>;

    fn staircase() -> Polyline {
        Polyline::from_vertices(vec![
            Point::from_coordinates(0.0, 0.0),
            Point::from_coordinates(3.0, 0.0),
            Point::from_coordinates(3.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn needs_two_vertices() {
        assert!(Polyline::from_vertices(vec![]).is_err());
        assert!(Polyline::from_vertices(vec![Point::origin()]).is_err());
        assert!(Polyline::from_vertices(vec![Point::origin(), Point::origin()]).is_ok());
    }

    #[test]
    fn length_is_segment_sum() {
        assert_eq!(staircase().length(), Length::new(7.0));
        assert_eq!(staircase().segments().len(), 2);
    }

    #[test]
    fn endpoints() {
        let line = staircase();
        assert_eq!(line.start_point(), Point::from_coordinates(0.0, 0.0));
        assert_eq!(line.end_point(), Point::from_coordinates(3.0, 4.0));
        let back = line.reversed();
        assert_eq!(back.start_point(), line.end_point());
        assert_eq!(back.end_point(), line.start_point());
        assert_eq!(back.length(), line.length());
    }

    #[test]
    fn bounding_box_covers_vertices() {
        let bounds = staircase().bounding_box();
        assert_eq!(bounds.min_x(), Length::new(0.0));
        assert_eq!(bounds.max_x(), Length::new(3.0));
        assert_eq!(bounds.max_y(), Length::new(4.0));
    }

    #[test]
    fn transforms_preserve_length() {
        let line = staircase();
        let moved = line.translate_by(Vector2D::from_components(1.0, 1.0));
        assert_eq!(moved.length(), line.length());
        let rotated = line.rotate_around(Point::origin(), Angle::degrees(37.0));
        assert_eq!(rotated.length(), line.length());
    }
}
