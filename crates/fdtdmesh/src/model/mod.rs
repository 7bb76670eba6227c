//! Edge & polygon model: polygons owned by a board and the edges derived
//! from their vertex cycles.

mod edge;
mod material;
mod types;

pub use edge::{build_edges, direction_of, normal_for, Direction, Edge, Normal};
pub use material::Material;
pub use types::{EdgeId, Polygon, PolygonId, Shape};

#[cfg(test)]
mod tests;
