use std::cmp::Ordering;

use crate::geom::{Point, Range};
use crate::model::{Edge, EdgeId, Normal, PolygonId};
use crate::params::EQUALITY_TOLERANCE;

use super::types::Solution;

/// Part of an edge lying inside (or along the boundary of) another polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    pub polygon: PolygonId,
    pub range: Range,
    /// Edge of `polygon` the range is shared with, if any.
    pub edge: Option<EdgeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeInPolygon {
    pub edge: EdgeId,
    pub overlaps: Vec<Overlap>,
}

/// How far the merged overlaps reach along an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coverage {
    Total,
    Gap,
}

impl EdgeInPolygon {
    /// Merge the overlap spans along `dir` and test them against the edge.
    pub fn coverage_along(&self, edge: &Edge, dir: &Point) -> Coverage {
        let len = dir.norm();
        if len <= EQUALITY_TOLERANCE || self.overlaps.is_empty() {
            return Coverage::Gap;
        }
        let unit = dir / len;
        let mut spans: Vec<(f64, f64)> = self
            .overlaps
            .iter()
            .map(|o| {
                let t0 = edge.seg.project(&unit, &o.range.p0);
                let t1 = edge.seg.project(&unit, &o.range.p1);
                (t0.min(t1), t0.max(t1))
            })
            .collect();
        spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let (lo, mut hi) = spans[0];
        for &(s, e) in &spans[1..] {
            if s > hi + EQUALITY_TOLERANCE {
                return Coverage::Gap;
            }
            hi = hi.max(e);
        }
        let (first, last) = {
            let a = edge.seg.project(&unit, &edge.p0());
            let b = edge.seg.project(&unit, &edge.p1());
            (a.min(b), a.max(b))
        };
        if lo <= first + EQUALITY_TOLERANCE && hi >= last - EQUALITY_TOLERANCE {
            Coverage::Total
        } else {
            Coverage::Gap
        }
    }

    /// Whether the edge still marks a physical boundary.
    pub fn decide_to_mesh(&self, edges: &[Edge]) -> Option<bool> {
        let edge = edges.get(self.edge.0)?;
        if self.coverage_along(edge, &edge.seg.vec()) == Coverage::Gap {
            return Some(true);
        }
        let mut known = self
            .overlaps
            .iter()
            .filter_map(|o| o.edge)
            .filter_map(|id| edges.get(id.0))
            .map(|shared| shared.normal)
            .filter(|n| *n != Normal::None)
            .peekable();
        if known.peek().is_none() {
            return Some(false);
        }
        Some(known.all(|n| n == edge.normal))
    }

    pub(super) fn auto_solve(&self, edges: &mut [Edge]) -> Option<Solution> {
        let to_mesh = self.decide_to_mesh(edges)?;
        let edge = edges.get_mut(self.edge.0)?;
        edge.to_mesh = to_mesh;
        Some(Solution::Edge(self.edge))
    }
}
