//! Ordered collection of sample points.
//!
//! [`PointSet`] keeps samples sorted ascending by `x` after every bulk insert
//! ([`PointSet::add_points`]) or explicit [`PointSet::sort_points`].
//! Single inserts via [`PointSet::add_point`] append without reordering.
//!
//! Duplicate `x` values are allowed.

use std::cmp::Ordering;
use crate::sampling::errors::IndexError;
use crate::sampling::point::Point;


#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn len(&self) -> usize { self.points.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }
    #[inline] pub fn as_slice(&self) -> &[Point] { &self.points }
    #[inline] pub fn first(&self) -> Option<&Point> { self.points.first() }
    #[inline] pub fn last(&self) -> Option<&Point> { self.points.last() }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    /// Appends `point`; order is not restored.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Appends every point, then sorts.
    pub fn add_points<I>(&mut self, points: I)
    where I: IntoIterator<Item = Point> {
        self.points.extend(points);
        self.sort_points();
    }

    /// Stable ascending sort by `x`.
    pub fn sort_points(&mut self) {
        self.points.sort_by(|a, b| cmp_x(a, b));
    }

    pub fn get_point(&self, index: usize) -> Result<Point, IndexError> {
        self.points
            .get(index)
            .copied()
            .ok_or(IndexError::Point { index, len: self.points.len() })
    }

    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), IndexError> {
        let len = self.points.len();
        let slot = self.points
            .get_mut(index)
            .ok_or(IndexError::Point { index, len })?;
        *slot = point;
        Ok(())
    }

    /// `true` if any sample has an undefined `y`.
    pub fn has_undefined(&self) -> bool {
        self.points.iter().any(Point::is_undefined)
    }

    /// `last.x - first.x`, or `None` with fewer than two points.
    pub fn span(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() >= 2 => Some(b.x() - a.x()),
            _ => None,
        }
    }

    /// `true` if `points[i].x <= points[i + 1].x` for all `i`.
    pub fn is_sorted(&self) -> bool {
        self.points.windows(2).all(|w| cmp_x(&w[0], &w[1]) != Ordering::Greater)
    }
}

#[inline]
fn cmp_x(a: &Point, b: &Point) -> Ordering {
    a.x().total_cmp(&b.x())
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
