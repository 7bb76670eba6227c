//! Conflicts: geometric situations that need an automated meshing decision.
//!
//! A `Conflict` is a closed sum over three kinds, each with its own
//! `auto_solve` rule:
//! - `ColinearEdges`: edges sharing an H/V line yield one THIRDS or HALFS
//!   policy depending on which sides they face.
//! - `EdgeInPolygon`: an edge covered by another polygon may stop being a
//!   boundary; the decision lands on the edge's `to_mesh` flag.
//! - `TooCloseMeshlinePolicies`: two near policies merge into one.
//!
//! `ConflictManager` owns them and deduplicates registrations.

mod colinear_edges;
mod edge_in_polygon;
mod manager;
mod too_close;
mod types;

pub use colinear_edges::ColinearEdges;
pub use edge_in_polygon::{Coverage, EdgeInPolygon, Overlap};
pub use manager::ConflictManager;
pub use too_close::{combine, TooCloseMeshlinePolicies};
pub use types::{Conflict, ConflictId, ConflictKind, ConflictTag, Solution};
