use std::fmt;
use std::marker::PhantomData;

use crate::quantity::units::Unit;
use crate::quantity::{Interval, Quantity, Tolerance};

use super::point::Point2D;
use super::World;

/// An axis-aligned bounding box.
///
/// The extrema are constructor-normalized so `min <= max` holds on both
/// axes; the corners are derived, never stored.
pub struct BoundingBox2D<U: Unit, C = World> {
    min_x: Quantity<U>,
    max_x: Quantity<U>,
    min_y: Quantity<U>,
    max_y: Quantity<U>,
    space: PhantomData<C>,
}

impl<U: Unit, C> BoundingBox2D<U, C> {
    /// A box from its extrema, swapping each axis pair if given out of
    /// order.
    #[must_use]
    pub fn from_extrema(
        min_x: Quantity<U>,
        max_x: Quantity<U>,
        min_y: Quantity<U>,
        max_y: Quantity<U>,
    ) -> Self {
        let (min_x, max_x) = if min_x.value() <= max_x.value() {
            (min_x, max_x)
        } else {
            (max_x, min_x)
        };
        let (min_y, max_y) = if min_y.value() <= max_y.value() {
            (min_y, max_y)
        } else {
            (max_y, min_y)
        };
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            space: PhantomData,
        }
    }

    /// The box spanning two diagonal corners, in any order.
    #[must_use]
    pub fn from_corners(first: Point2D<U, C>, second: Point2D<U, C>) -> Self {
        Self::from_extrema(first.x(), second.x(), first.y(), second.y())
    }

    /// The zero-size box containing exactly one point.
    #[must_use]
    pub fn singleton(point: Point2D<U, C>) -> Self {
        Self::from_corners(point, point)
    }

    /// Smallest box containing every point, or `None` for an empty
    /// iterator.
    #[must_use]
    pub fn hull_of(points: impl IntoIterator<Item = Point2D<U, C>>) -> Option<Self> {
        points
            .into_iter()
            .map(Self::singleton)
            .reduce(Self::union)
    }

    /// Smallest box containing every box, or `None` for an empty
    /// iterator.
    #[must_use]
    pub fn aggregate_of(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        boxes.into_iter().reduce(Self::union)
    }

    /// Minimum X extremum.
    #[must_use]
    pub const fn min_x(&self) -> Quantity<U> {
        self.min_x
    }

    /// Maximum X extremum.
    #[must_use]
    pub const fn max_x(&self) -> Quantity<U> {
        self.max_x
    }

    /// Minimum Y extremum.
    #[must_use]
    pub const fn min_y(&self) -> Quantity<U> {
        self.min_y
    }

    /// Maximum Y extremum.
    #[must_use]
    pub const fn max_y(&self) -> Quantity<U> {
        self.max_y
    }

    /// The X extent as an interval.
    #[must_use]
    pub fn x_interval(&self) -> Interval<U> {
        Interval::from_endpoints(self.min_x, self.max_x)
    }

    /// The Y extent as an interval.
    #[must_use]
    pub fn y_interval(&self) -> Interval<U> {
        Interval::from_endpoints(self.min_y, self.max_y)
    }

    /// The four corners, counter-clockwise from the minimum corner.
    #[must_use]
    pub fn corners(&self) -> [Point2D<U, C>; 4] {
        [
            Point2D::new(self.min_x, self.min_y),
            Point2D::new(self.max_x, self.min_y),
            Point2D::new(self.max_x, self.max_y),
            Point2D::new(self.min_x, self.max_y),
        ]
    }

    /// Center of the box.
    #[must_use]
    pub fn center_point(&self) -> Point2D<U, C> {
        Point2D::new(
            Quantity::midpoint(self.min_x, self.max_x),
            Quantity::midpoint(self.min_y, self.max_y),
        )
    }

    /// Width and height.
    #[must_use]
    pub fn dimensions(&self) -> (Quantity<U>, Quantity<U>) {
        (self.max_x - self.min_x, self.max_y - self.min_y)
    }

    /// Whether a point lies inside the box, boundary-tolerant.
    #[must_use]
    pub fn contains(&self, point: Point2D<U, C>) -> bool {
        self.contains_within(point, Tolerance::default())
    }

    /// [`BoundingBox2D::contains`] with an explicit tolerance.
    #[must_use]
    pub fn contains_within(&self, point: Point2D<U, C>, tolerance: Tolerance) -> bool {
        tolerance.leq(self.min_x.value(), point.x().value())
            && tolerance.leq(point.x().value(), self.max_x.value())
            && tolerance.leq(self.min_y.value(), point.y().value())
            && tolerance.leq(point.y().value(), self.max_y.value())
    }

    /// Whether this box lies entirely inside another, boundary-tolerant.
    #[must_use]
    pub fn is_contained_in(&self, other: &Self) -> bool {
        self.x_interval().is_contained_in(other.x_interval())
            && self.y_interval().is_contained_in(other.y_interval())
    }

    /// Whether two boxes overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Smallest box containing both operands.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
            space: PhantomData,
        }
    }

    /// Largest box contained in both operands, or `None` when they are
    /// disjoint. Touching boxes intersect to their shared edge or corner.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x_interval().intersection(other.x_interval())?;
        let y = self.y_interval().intersection(other.y_interval())?;
        Some(Self::from_extrema(
            x.min_value(),
            x.max_value(),
            y.min_value(),
            y.max_value(),
        ))
    }

    /// The box grown by a margin on all four sides, or `None` when a
    /// negative margin collapses an axis.
    #[must_use]
    pub fn expand_by(&self, margin: Quantity<U>) -> Option<Self> {
        let min_x = self.min_x - margin;
        let max_x = self.max_x + margin;
        let min_y = self.min_y - margin;
        let max_y = self.max_y + margin;
        let tolerance = Tolerance::default();
        if tolerance.leq(min_x.value(), max_x.value())
            && tolerance.leq(min_y.value(), max_y.value())
        {
            Some(Self::from_extrema(min_x, max_x, min_y, max_y))
        } else {
            None
        }
    }
}

impl<U: Unit, C> Clone for BoundingBox2D<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, C> Copy for BoundingBox2D<U, C> {}

impl<U: Unit, C> fmt::Debug for BoundingBox2D<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundingBox2D")
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .finish()
    }
}

impl<U: Unit, C> PartialEq for BoundingBox2D<U, C> {
    fn eq(&self, other: &Self) -> bool {
        self.min_x == other.min_x
            && self.max_x == other.max_x
            && self.min_y == other.min_y
            && self.max_y == other.max_y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::quantity::units::Meters;
    use crate::quantity::Length;

    use super::*;

    type Bounds = BoundingBox2D<Meters>;
    type Point = Point2D<Meters>;

    fn bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Bounds {
        Bounds::from_extrema(
            Length::new(min_x),
            Length::new(max_x),
            Length::new(min_y),
            Length::new(max_y),
        )
    }

    #[test]
    fn extrema_are_normalized() {
        let b = bounds(4.0, 0.0, 5.0, -1.0);
        assert_eq!(b, bounds(0.0, 4.0, -1.0, 5.0));
        assert!(b.min_x() <= b.max_x());
        assert!(b.min_y() <= b.max_y());
    }

    #[test]
    fn union_of_overlapping_boxes() {
        let a = bounds(0.0, 4.0, 0.0, 4.0);
        let b = bounds(2.0, 6.0, 2.0, 6.0);
        assert_eq!(a.union(b), bounds(0.0, 6.0, 0.0, 6.0));
    }

    #[test]
    fn intersection_of_overlapping_boxes() {
        let a = bounds(0.0, 4.0, 0.0, 4.0);
        let b = bounds(2.0, 6.0, 2.0, 6.0);
        assert_eq!(a.intersection(&b), Some(bounds(2.0, 4.0, 2.0, 4.0)));
    }

    #[test]
    fn touching_boxes_intersect_at_the_shared_edge() {
        let a = bounds(0.0, 2.0, 0.0, 2.0);
        let b = bounds(2.0, 4.0, 0.0, 2.0);
        let edge = a.intersection(&b).unwrap();
        assert_eq!(edge, bounds(2.0, 2.0, 0.0, 2.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&bounds(3.0, 4.0, 0.0, 2.0)));
    }

    #[test]
    fn containment() {
        let b = bounds(0.0, 4.0, 0.0, 4.0);
        assert!(b.contains(Point::from_coordinates(2.0, 2.0)));
        assert!(b.contains(Point::from_coordinates(0.0, 4.0)));
        assert!(!b.contains(Point::from_coordinates(-0.1, 2.0)));
        assert!(bounds(1.0, 2.0, 1.0, 2.0).is_contained_in(&b));
        assert!(!b.is_contained_in(&bounds(1.0, 2.0, 1.0, 2.0)));
    }

    #[test]
    fn hull_and_aggregate() {
        let hull = Bounds::hull_of([
            Point::from_coordinates(1.0, 5.0),
            Point::from_coordinates(-2.0, 0.0),
            Point::from_coordinates(3.0, 2.0),
        ]);
        assert_eq!(hull, Some(bounds(-2.0, 3.0, 0.0, 5.0)));
        assert_eq!(Bounds::hull_of([]), None);

        let agg = Bounds::aggregate_of([bounds(0.0, 1.0, 0.0, 1.0), bounds(5.0, 6.0, -1.0, 0.5)]);
        assert_eq!(agg, Some(bounds(0.0, 6.0, -1.0, 1.0)));
    }

    #[test]
    fn derived_geometry() {
        let b = bounds(0.0, 4.0, 0.0, 2.0);
        assert_eq!(b.center_point(), Point::from_coordinates(2.0, 1.0));
        let (width, height) = b.dimensions();
        assert_eq!(width, Length::new(4.0));
        assert_eq!(height, Length::new(2.0));
        let corners = b.corners();
        assert_eq!(corners[0], Point::from_coordinates(0.0, 0.0));
        assert_eq!(corners[2], Point::from_coordinates(4.0, 2.0));
    }

    #[test]
    fn expansion_and_collapse() {
        let b = bounds(0.0, 4.0, 0.0, 2.0);
        assert_eq!(b.expand_by(Length::new(1.0)), Some(bounds(-1.0, 5.0, -1.0, 3.0)));
        assert_eq!(b.expand_by(Length::new(-0.5)), Some(bounds(0.5, 3.5, 0.5, 1.5)));
        // Shrinking past the half-height collapses the Y axis.
        assert_eq!(b.expand_by(Length::new(-1.5)), None);
    }
}
