//! Predicates over closed point cycles.

use super::segment::Segment;
use super::types::{Bounding2, Point, PointRelation, PolygonRelation, Rotation, SegmentRelation};

/// Shoelace signed area; positive for counter-clockwise cycles.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[(i + n - 1) % n];
            let b = points[i];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * twice
}

pub fn rotation(points: &[Point]) -> Rotation {
    Rotation::from_area(signed_area(points))
}

/// Closing segments of a cycle; segment `i` runs from point `i-1` to point `i`.
pub fn cycle_segments(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = points.len();
    (0..n).map(move |i| Segment::new(points[(i + n - 1) % n], points[i]))
}

/// Classify `p` against the polygon `points` (bounding box `bb`).
///
/// Counts crossings of a ray leaving the box. A ray through a vertex is
/// ambiguous, so the next ray of a fixed fan is tried instead.
pub fn relation_to_polygon(points: &[Point], bb: &Bounding2, p: &Point) -> PolygonRelation {
    if points.len() < 2 {
        return PolygonRelation::Out;
    }
    if cycle_segments(points).any(|s| s.relation_to_point(p) == PointRelation::On) {
        return PolygonRelation::On;
    }
    if !bb.contains(p) {
        return PolygonRelation::Out;
    }

    let reach = bb.span() + 1.0;
    let mut targets = vec![
        Point::new(bb.xmax + reach, p.y),
        Point::new(bb.xmin - reach, p.y),
        Point::new(p.x, bb.ymax + reach),
        Point::new(p.x, bb.ymin - reach),
    ];
    for k in 1..=8 {
        let dy = reach * 0.37 * k as f64;
        targets.push(Point::new(bb.xmax + reach, p.y + dy));
        targets.push(Point::new(bb.xmin - reach, p.y - dy));
    }

    let mut crossings = 0usize;
    for target in targets {
        let ray = Segment::new(*p, target);
        if points
            .iter()
            .any(|v| ray.relation_to_point(v) == PointRelation::On)
        {
            continue;
        }
        crossings = cycle_segments(points)
            .filter(|s| ray.relation_to(s) == SegmentRelation::Crossing)
            .count();
        break;
    }
    if crossings % 2 == 1 {
        PolygonRelation::In
    } else {
        PolygonRelation::Out
    }
}
