//! Geometric kernel: tolerant 2D predicates used by the board.
//!
//! - `types`: `Point`, tolerant equality, orientation, classification tags,
//!   `Bounding2`.
//! - `segment`: `Segment`/`Range` with relation, intersection, overlap and
//!   merge.
//! - `polygon`: shoelace rotation, cycle segments, point-in-polygon.
//!
//! All comparisons go through the absolute `EQUALITY_TOLERANCE`.

mod polygon;
mod segment;
mod types;

pub use polygon::{cycle_segments, relation_to_polygon, rotation, signed_area};
pub use segment::{Range, Segment};
pub use types::{
    axis_of, cross, eq_eps, orientation, points_eq, Bounding2, Point, PointRelation,
    PolygonRelation, Rotation, SegmentAxis, SegmentRelation,
};

#[cfg(test)]
mod tests;
