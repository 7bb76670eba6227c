//! Conflict detection passes over the polygons of one board.

use std::cmp::Ordering;

use crate::conflict::{ConflictManager, ConflictTag};
use crate::geom::{points_eq, Point, PolygonRelation, Range, Segment, SegmentAxis, SegmentRelation};
use crate::model::{Edge, EdgeId, Polygon};

/// Register every edge lying (partly) inside or along another polygon.
///
/// Overlapping edge pairs register the shared span with the other edge.
/// Crossings cut the edge into spans, and a span counts as inside when its
/// midpoint is inside the other polygon, or when it ends at an edge
/// endpoint that is itself inside. An edge with no cut at all registers its
/// full length when both endpoints are inside.
///
/// A polygon of lower material priority never covers the edges of a
/// higher one: a pad drawn on a substrate keeps its boundary.
pub(super) fn edges_in_polygons(
    polygons: &[Polygon],
    edges: &mut [Edge],
    conflicts: &mut ConflictManager,
) {
    for a in polygons {
        for b in polygons {
            if a.id == b.id
                || b.material.priority() < a.material.priority()
                || !a.bounding.does_overlap(&b.bounding)
            {
                continue;
            }
            for &ea in &a.edges {
                let Some(seg) = edges.get(ea.0).map(|e| e.seg) else {
                    continue;
                };
                edge_in_polygon(seg, ea, b, edges, conflicts);
            }
        }
    }
}

fn edge_in_polygon(
    seg: Segment,
    id: EdgeId,
    poly: &Polygon,
    edges: &mut [Edge],
    conflicts: &mut ConflictManager,
) {
    let mut cuts: Vec<Point> = Vec::new();
    let mut shared: Vec<Range> = Vec::new();
    for &eb in &poly.edges {
        let Some(other) = edges.get(eb.0).map(|e| e.seg) else {
            continue;
        };
        match seg.relation_to(&other) {
            SegmentRelation::Crossing => cuts.extend(seg.intersection(&other)),
            SegmentRelation::Overlapping => {
                let Some(r) = seg.overlap(&other) else {
                    continue;
                };
                cuts.push(r.p0);
                cuts.push(r.p1);
                if r.axis() != SegmentAxis::Point {
                    shared.push(r);
                    conflicts.add_edge_in_polygon(edges, id, poly.id, Some(r), Some(eb));
                }
            }
            _ => {}
        }
    }

    let rel0 = poly.relation_to(&seg.p0);
    let rel1 = poly.relation_to(&seg.p1);
    if cuts.is_empty() {
        if rel0 == PolygonRelation::In && rel1 == PolygonRelation::In {
            conflicts.add_edge_in_polygon(edges, id, poly.id, None, None);
        }
        return;
    }

    cuts.push(seg.p0);
    cuts.push(seg.p1);
    let dir = seg.vec();
    cuts.sort_by(|p, q| {
        seg.project(&dir, p)
            .partial_cmp(&seg.project(&dir, q))
            .unwrap_or(Ordering::Equal)
    });
    cuts.dedup_by(|p, q| points_eq(p, q));

    let last = cuts.len().saturating_sub(2);
    for (i, w) in cuts.windows(2).enumerate() {
        let range = Segment::new(w[0], w[1]);
        if shared
            .iter()
            .any(|s| points_eq(&s.p0, &range.p0) && points_eq(&s.p1, &range.p1))
        {
            continue;
        }
        let inside = poly.relation_to(&range.mid()) == PolygonRelation::In
            || (i == 0 && rel0 == PolygonRelation::In)
            || (i == last && rel1 == PolygonRelation::In);
        if inside {
            conflicts.add_edge_in_polygon(edges, id, poly.id, Some(range), None);
        }
    }
}

/// Group H/V edges sitting on the same line, one conflict per line.
pub(super) fn colinear_edges(edges: &mut [Edge], conflicts: &mut ConflictManager) {
    let candidates: Vec<EdgeId> = edges
        .iter()
        .filter(|e| e.view_axis().is_some())
        .map(|e| e.id)
        .collect();
    for (i, &a) in candidates.iter().enumerate() {
        for &b in &candidates[i + 1..] {
            conflicts.add_colinear_edges(edges, a, b);
        }
    }
}

/// H/V edges that ended up in no colinear-edges conflict.
pub(super) fn non_conflicting_edges(edges: &[Edge], conflicts: &ConflictManager) -> Vec<EdgeId> {
    edges
        .iter()
        .filter(|e| e.view_axis().is_some())
        .filter(|e| {
            !e.conflicts.iter().any(|c| {
                conflicts
                    .get(*c)
                    .is_some_and(|c| c.tag() == ConflictTag::ColinearEdges)
            })
        })
        .map(|e| e.id)
        .collect()
}
