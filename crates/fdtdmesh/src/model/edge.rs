//! Polygon edges with direction and outward normal.

use crate::conflict::ConflictId;
use crate::geom::{cycle_segments, Point, Rotation, Segment, SegmentAxis};
use crate::space::ViewAxis;

use super::types::{EdgeId, PolygonId};

/// Travel direction of an axis-aligned edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    XMin,
    XMax,
    YMin,
    YMax,
    None,
}

/// Outward normal of an H or V edge, along the perpendicular local axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Normal {
    Min,
    Max,
    None,
}

impl Normal {
    pub fn reversed(self) -> Self {
        match self {
            Normal::Min => Normal::Max,
            Normal::Max => Normal::Min,
            Normal::None => Normal::None,
        }
    }
}

pub fn direction_of(seg: &Segment) -> Direction {
    let v = seg.vec();
    match seg.axis() {
        SegmentAxis::H if v.x > 0.0 => Direction::XMax,
        SegmentAxis::H => Direction::XMin,
        SegmentAxis::V if v.y > 0.0 => Direction::YMax,
        SegmentAxis::V => Direction::YMin,
        _ => Direction::None,
    }
}

/// Outward normal from the polygon winding and the edge direction.
pub fn normal_for(rotation: Rotation, direction: Direction) -> Normal {
    match (rotation, direction) {
        (Rotation::Cw, Direction::XMin) => Normal::Min,
        (Rotation::Cw, Direction::XMax) => Normal::Max,
        (Rotation::Cw, Direction::YMin) => Normal::Max,
        (Rotation::Cw, Direction::YMax) => Normal::Min,
        (Rotation::Ccw, Direction::XMin) => Normal::Max,
        (Rotation::Ccw, Direction::XMax) => Normal::Min,
        (Rotation::Ccw, Direction::YMin) => Normal::Min,
        (Rotation::Ccw, Direction::YMax) => Normal::Max,
        _ => Normal::None,
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub id: EdgeId,
    pub polygon: PolygonId,
    pub seg: Segment,
    pub axis: SegmentAxis,
    pub direction: Direction,
    pub normal: Normal,
    pub to_mesh: bool,
    pub to_reverse: bool,
    pub conflicts: Vec<ConflictId>,
}

impl Edge {
    pub fn new(id: EdgeId, polygon: PolygonId, seg: Segment, rotation: Rotation) -> Self {
        let direction = direction_of(&seg);
        Self {
            id,
            polygon,
            seg,
            axis: seg.axis(),
            direction,
            normal: normal_for(rotation, direction),
            to_mesh: true,
            to_reverse: false,
            conflicts: Vec::new(),
        }
    }

    #[inline]
    pub fn p0(&self) -> Point {
        self.seg.p0
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.seg.p1
    }

    /// Normal after applying `to_reverse`.
    #[inline]
    pub fn effective_normal(&self) -> Normal {
        if self.to_reverse {
            self.normal.reversed()
        } else {
            self.normal
        }
    }

    /// View axis of the meshline an H or V edge asks for.
    pub fn view_axis(&self) -> Option<ViewAxis> {
        match self.axis {
            SegmentAxis::H => Some(ViewAxis::H),
            SegmentAxis::V => Some(ViewAxis::V),
            _ => None,
        }
    }

    /// Line coordinate of an H or V edge.
    #[inline]
    pub fn coord(&self) -> Option<f64> {
        self.seg.line_coord()
    }
}

/// Edges of a point cycle, ids assigned from `first`.
pub fn build_edges(
    polygon: PolygonId,
    points: &[Point],
    rotation: Rotation,
    first: usize,
) -> Vec<Edge> {
    cycle_segments(points)
        .enumerate()
        .map(|(i, seg)| Edge::new(EdgeId(first + i), polygon, seg, rotation))
        .collect()
}
