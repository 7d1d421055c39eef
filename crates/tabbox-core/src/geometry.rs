//! Geometry primitives shared by the edge engine and the drawing sinks.
//!
//! Coordinates are millimetres in a Cartesian frame with y increasing upward.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Tolerance used when collapsing duplicate consecutive points.
pub const POINT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns true when both coordinates are within `eps` of `other`.
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    pub fn scale(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Ordered vertex list. Closed outlines repeat their first point at the end.
pub type Polyline = Vec<Point>;

/// Push a point unless it coincides with the previous one.
pub fn push_unique_point(path: &mut Polyline, point: Point) {
    if let Some(last) = path.last() {
        if last.approx_eq(&point, POINT_EPSILON) {
            return;
        }
    }
    path.push(point);
}

/// Axis-aligned bounds of a set of points as `(min, max)`.
pub fn bounds<'a, I>(points: I) -> Option<(Point, Point)>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    Some(iter.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}
