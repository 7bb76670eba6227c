//! Basic 2D types, tolerant comparisons and classification tags.

use nalgebra::Vector2;

use crate::params::EQUALITY_TOLERANCE;

/// Plane-local point (and displacement) type.
pub type Point = Vector2<f64>;

#[inline]
pub fn eq_eps(a: f64, b: f64) -> bool {
    (a - b).abs() <= EQUALITY_TOLERANCE
}

#[inline]
pub fn points_eq(a: &Point, b: &Point) -> bool {
    eq_eps(a.x, b.x) && eq_eps(a.y, b.y)
}

/// z-component of `a × b`.
#[inline]
pub fn cross(a: &Point, b: &Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Direction class of a segment vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentAxis {
    H,
    V,
    Diagonal,
    Point,
}

pub fn axis_of(v: &Point) -> SegmentAxis {
    let flat_x = eq_eps(v.x, 0.0);
    let flat_y = eq_eps(v.y, 0.0);
    match (flat_x, flat_y) {
        (true, true) => SegmentAxis::Point,
        (true, false) => SegmentAxis::V,
        (false, true) => SegmentAxis::H,
        (false, false) => SegmentAxis::Diagonal,
    }
}

/// Turn direction of a point triple, or winding of a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Cw,
    Ccw,
    Colinear,
}

impl Rotation {
    #[inline]
    pub fn from_area(area: f64) -> Self {
        if eq_eps(area, 0.0) {
            Rotation::Colinear
        } else if area > 0.0 {
            Rotation::Ccw
        } else {
            Rotation::Cw
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Rotation::Cw => Rotation::Ccw,
            Rotation::Ccw => Rotation::Cw,
            Rotation::Colinear => Rotation::Colinear,
        }
    }
}

/// Orientation of `c` relative to the directed line `a → b`.
#[inline]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Rotation {
    Rotation::from_area(cross(&(b - a), &(c - a)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentRelation {
    Crossing,
    Colinear,
    Overlapping,
    Apart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointRelation {
    On,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolygonRelation {
    In,
    On,
    Out,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounding2 {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounding2 {
    /// Bounding box of a point set; a degenerate box at the origin when empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut it = points.into_iter();
        let Some(first) = it.next() else {
            return Self {
                xmin: 0.0,
                xmax: 0.0,
                ymin: 0.0,
                ymax: 0.0,
            };
        };
        it.fold(
            Self {
                xmin: first.x,
                xmax: first.x,
                ymin: first.y,
                ymax: first.y,
            },
            |b, p| Self {
                xmin: b.xmin.min(p.x),
                xmax: b.xmax.max(p.x),
                ymin: b.ymin.min(p.y),
                ymax: b.ymax.max(p.y),
            },
        )
    }

    /// True if the boxes share at least one point (touching counts).
    #[inline]
    pub fn does_overlap(&self, other: &Bounding2) -> bool {
        self.xmin <= other.xmax + EQUALITY_TOLERANCE
            && other.xmin <= self.xmax + EQUALITY_TOLERANCE
            && self.ymin <= other.ymax + EQUALITY_TOLERANCE
            && other.ymin <= self.ymax + EQUALITY_TOLERANCE
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.xmin - EQUALITY_TOLERANCE
            && p.x <= self.xmax + EQUALITY_TOLERANCE
            && p.y >= self.ymin - EQUALITY_TOLERANCE
            && p.y <= self.ymax + EQUALITY_TOLERANCE
    }

    #[inline]
    pub fn span(&self) -> f64 {
        (self.xmax - self.xmin) + (self.ymax - self.ymin)
    }
}
