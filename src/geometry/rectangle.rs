use std::fmt;

use crate::quantity::units::{Squared, Unit};
use crate::quantity::{Angle, Quantity, Tolerance};

use super::bounding_box::BoundingBox2D;
use super::direction::Direction2D;
use super::frame::Frame2D;
use super::point::Point2D;
use super::segment::LineSegment2D;
use super::vector::Vector2D;
use super::World;

/// An oriented rectangle: a center, an X axis direction and dimensions.
///
/// The axes frame is derived on demand; an axis-aligned rectangle is just
/// the special case of an X direction along positive X.
pub struct Rectangle2D<U: Unit, C = World> {
    center: Point2D<U, C>,
    x_direction: Direction2D<C>,
    width: Quantity<U>,
    height: Quantity<U>,
}

impl<U: Unit, C> Rectangle2D<U, C> {
    /// An axis-aligned rectangle centered on a point (absolute dimensions
    /// are used).
    #[must_use]
    pub fn centered_on(center: Point2D<U, C>, width: Quantity<U>, height: Quantity<U>) -> Self {
        Self::with_x_direction(Direction2D::positive_x(), center, width, height)
    }

    /// An oriented rectangle with the given X axis direction.
    #[must_use]
    pub fn with_x_direction(
        x_direction: Direction2D<C>,
        center: Point2D<U, C>,
        width: Quantity<U>,
        height: Quantity<U>,
    ) -> Self {
        Self {
            center,
            x_direction,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// The axis-aligned rectangle filling a bounding box.
    #[must_use]
    pub fn from_bounding_box(bounds: &BoundingBox2D<U, C>) -> Self {
        let (width, height) = bounds.dimensions();
        Self::centered_on(bounds.center_point(), width, height)
    }

    /// Center point.
    #[must_use]
    pub const fn center_point(&self) -> Point2D<U, C> {
        self.center
    }

    /// X axis direction.
    #[must_use]
    pub const fn x_direction(&self) -> Direction2D<C> {
        self.x_direction
    }

    /// Width and height.
    #[must_use]
    pub const fn dimensions(&self) -> (Quantity<U>, Quantity<U>) {
        (self.width, self.height)
    }

    /// The rectangle's axes as a frame defining a local space `L`.
    #[must_use]
    pub fn axes<L>(&self) -> Frame2D<U, C, L> {
        Frame2D::with_x_direction(self.x_direction, self.center)
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> Quantity<Squared<U>> {
        self.width * self.height
    }

    /// The four corners, counter-clockwise starting from the corner at
    /// negative X and negative Y in the rectangle's own frame.
    #[must_use]
    pub fn vertices(&self) -> [Point2D<U, C>; 4] {
        let x = Vector2D::with_length(self.width * 0.5, self.x_direction);
        let y = Vector2D::with_length(self.height * 0.5, self.x_direction.perpendicular());
        [
            self.center - x - y,
            self.center + x - y,
            self.center + x + y,
            self.center - x + y,
        ]
    }

    /// The four edges, counter-clockwise.
    #[must_use]
    pub fn edges(&self) -> [LineSegment2D<U, C>; 4] {
        let [a, b, c, d] = self.vertices();
        [
            LineSegment2D::from_endpoints(a, b),
            LineSegment2D::from_endpoints(b, c),
            LineSegment2D::from_endpoints(c, d),
            LineSegment2D::from_endpoints(d, a),
        ]
    }

    /// Whether a point lies inside the rectangle, boundary-tolerant.
    #[must_use]
    pub fn contains(&self, point: Point2D<U, C>) -> bool {
        self.contains_within(point, Tolerance::default())
    }

    /// [`Rectangle2D::contains`] with an explicit tolerance.
    #[must_use]
    pub fn contains_within(&self, point: Point2D<U, C>, tolerance: Tolerance) -> bool {
        let displacement = point - self.center;
        let local_x = displacement.component_in(self.x_direction).abs();
        let local_y = displacement
            .component_in(self.x_direction.perpendicular())
            .abs();
        tolerance.leq(local_x.value(), self.width.value() * 0.5)
            && tolerance.leq(local_y.value(), self.height.value() * 0.5)
    }

    /// Smallest axis-aligned box containing the rectangle.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D<U, C> {
        BoundingBox2D::hull_of(self.vertices())
            .unwrap_or_else(|| BoundingBox2D::singleton(self.center))
    }

    /// The rectangle translated by a displacement.
    #[must_use]
    pub fn translate_by(&self, displacement: Vector2D<U, C>) -> Self {
        Self {
            center: self.center + displacement,
            ..*self
        }
    }

    /// The rectangle rotated around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2D<U, C>, angle: Angle) -> Self {
        Self {
            center: self.center.rotate_around(center, angle),
            x_direction: self.x_direction.rotate_by(angle),
            ..*self
        }
    }
}

impl<U: Unit, C> Clone for Rectangle2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for Rectangle2D<U, C> {}

impl<U: Unit, C> fmt::Debug for Rectangle2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rectangle2D")
            .field("center", &self.center)
            .field("x_direction", &self.x_direction)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
