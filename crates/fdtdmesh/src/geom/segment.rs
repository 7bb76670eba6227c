//! Straight segments: relations, intersection and 1D overlap/merge.

use super::types::{
    axis_of, cross, eq_eps, orientation, points_eq, Bounding2, Point, PointRelation, Rotation,
    SegmentAxis, SegmentRelation,
};
use crate::params::EQUALITY_TOLERANCE;

/// Closed segment `p0 → p1`. Edges and overlap ranges share this shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

/// A segment used as a 1D span along an edge.
pub type Range = Segment;

impl Segment {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn vec(&self) -> Point {
        self.p1 - self.p0
    }

    #[inline]
    pub fn axis(&self) -> SegmentAxis {
        axis_of(&self.vec())
    }

    #[inline]
    pub fn mid(&self) -> Point {
        (self.p0 + self.p1) * 0.5
    }

    pub fn bounding(&self) -> Bounding2 {
        Bounding2::from_points([&self.p0, &self.p1])
    }

    /// Coordinate of the line an H or V segment lies on.
    pub fn line_coord(&self) -> Option<f64> {
        match self.axis() {
            SegmentAxis::H => Some(self.p0.y),
            SegmentAxis::V => Some(self.p0.x),
            _ => None,
        }
    }

    pub fn relation_to(&self, other: &Segment) -> SegmentRelation {
        let r1 = orientation(&self.p0, &self.p1, &other.p0);
        let r2 = orientation(&self.p0, &self.p1, &other.p1);
        let r3 = orientation(&other.p0, &other.p1, &self.p0);
        let r4 = orientation(&other.p0, &other.p1, &self.p1);

        if [r1, r2, r3, r4].iter().all(|r| *r == Rotation::Colinear) {
            if self.bounding().does_overlap(&other.bounding()) {
                SegmentRelation::Overlapping
            } else {
                SegmentRelation::Colinear
            }
        } else if r1 != r2 && r3 != r4 {
            SegmentRelation::Crossing
        } else {
            SegmentRelation::Apart
        }
    }

    pub fn relation_to_point(&self, p: &Point) -> PointRelation {
        if orientation(&self.p0, &self.p1, p) == Rotation::Colinear && self.bounding().contains(p)
        {
            PointRelation::On
        } else {
            PointRelation::Out
        }
    }

    /// Single intersection point of two non-parallel segments, if any.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        match (self.axis(), other.axis()) {
            (SegmentAxis::H, SegmentAxis::V) => {
                let p = Point::new(other.p0.x, self.p0.y);
                self.holds(&p, other)
            }
            (SegmentAxis::V, SegmentAxis::H) => {
                let p = Point::new(self.p0.x, other.p0.y);
                self.holds(&p, other)
            }
            (SegmentAxis::Point, _) | (_, SegmentAxis::Point) => None,
            _ => {
                let r = self.vec();
                let s = other.vec();
                let div = cross(&r, &s);
                if div.abs() <= EQUALITY_TOLERANCE * r.norm() * s.norm() {
                    return None;
                }
                let qp = other.p0 - self.p0;
                let t = cross(&qp, &s) / div;
                let m = cross(&qp, &r) / div;
                let unit = |k: f64| (-EQUALITY_TOLERANCE..=1.0 + EQUALITY_TOLERANCE).contains(&k);
                if unit(t) && unit(m) {
                    Some(other.p0 + s * m.clamp(0.0, 1.0))
                } else {
                    None
                }
            }
        }
    }

    fn holds(&self, p: &Point, other: &Segment) -> Option<Point> {
        (self.bounding().contains(p) && other.bounding().contains(p)).then_some(*p)
    }

    pub fn is_parallel(&self, other: &Segment) -> bool {
        match (self.axis(), other.axis()) {
            (SegmentAxis::Point, _) | (_, SegmentAxis::Point) => true,
            (SegmentAxis::H, SegmentAxis::H) | (SegmentAxis::V, SegmentAxis::V) => true,
            (SegmentAxis::Diagonal, SegmentAxis::Diagonal) => {
                let (a, b) = (self.vec(), other.vec());
                cross(&a, &b).abs() <= EQUALITY_TOLERANCE * a.norm() * b.norm()
            }
            _ => false,
        }
    }

    /// Shared part of two colinear segments, oriented along `self`.
    pub fn overlap(&self, other: &Segment) -> Option<Range> {
        let (origin, dir, a, b) = self.spans_with(other)?;
        let lo = a.0.max(b.0);
        let hi = a.1.min(b.1);
        if lo > hi + EQUALITY_TOLERANCE {
            return None;
        }
        let hi = hi.max(lo);
        Some(Segment::new(origin + dir * lo, origin + dir * hi))
    }

    /// Union of two touching colinear segments, oriented along `self`.
    pub fn merge(&self, other: &Segment) -> Option<Range> {
        let (origin, dir, a, b) = self.spans_with(other)?;
        if a.0.max(b.0) > a.1.min(b.1) + EQUALITY_TOLERANCE {
            return None;
        }
        Some(Segment::new(
            origin + dir * a.0.min(b.0),
            origin + dir * a.1.max(b.1),
        ))
    }

    /// Signed distance of `p` from `p0`, measured along `dir`.
    #[inline]
    pub fn project(&self, dir: &Point, p: &Point) -> f64 {
        (p - self.p0).dot(dir)
    }

    /// Common 1D parametrization of two colinear segments.
    #[allow(clippy::type_complexity)]
    fn spans_with(&self, other: &Segment) -> Option<(Point, Point, (f64, f64), (f64, f64))> {
        if !self.is_parallel(other) {
            return None;
        }
        let (base, dir) = match (self.axis(), other.axis()) {
            (SegmentAxis::Point, SegmentAxis::Point) => {
                return points_eq(&self.p0, &other.p0)
                    .then_some((self.p0, Point::new(1.0, 0.0), (0.0, 0.0), (0.0, 0.0)));
            }
            (SegmentAxis::Point, _) => (other.p0, other.vec().normalize()),
            _ => (self.p0, self.vec().normalize()),
        };
        for p in [&self.p0, &self.p1, &other.p0, &other.p1] {
            if !eq_eps(cross(&dir, &(p - base)), 0.0) {
                return None;
            }
        }
        let span = |s: &Segment| {
            let t0 = (s.p0 - base).dot(&dir);
            let t1 = (s.p1 - base).dot(&dir);
            (t0.min(t1), t0.max(t1))
        };
        Some((base, dir, span(self), span(other)))
    }
}
