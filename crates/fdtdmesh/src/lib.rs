//! Orthogonal FDTD mesh-grid generation from 2D polygon boards.
//!
//! One `Board` per plane (YZ, ZX, XY) turns polygon edges into meshline
//! policies through a fixed `Step` sequence; `Mesher` drives the three
//! boards and merges their lines per global axis.
//!
//! Module map
//! - `geom`: tolerant 2D kernel (segments, point-in-polygon).
//! - `model`: materials, polygons and their edges.
//! - `conflict`: conflict kinds and `ConflictManager`.
//! - `mesh`: meshline policies, intervals and the spacing algorithm.
//! - `board`, `mesher`: pipeline drivers.
//! - `params`, `space`: configuration and plane/axis bookkeeping.
//! - `rand`: seeded random boards for tests and benches.
//!
//! The crate performs no I/O.

pub mod api;
pub mod board;
pub mod conflict;
pub mod geom;
pub mod mesh;
pub mod mesher;
pub mod model;
pub mod params;
pub mod rand;
pub mod space;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use mesher::Mesher;
pub use params::{GlobalParams, ParamsError, EQUALITY_TOLERANCE};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::board::{Board, NoopObserver, Step, StepObserver, TracingObserver};
    pub use crate::geom::Point;
    pub use crate::mesh::{Meshline, MeshlinePolicy, Policy};
    pub use crate::mesher::Mesher;
    pub use crate::model::{Material, Normal, Shape};
    pub use crate::params::GlobalParams;
    pub use crate::space::{Axis, AxisSpace, Plane, PlaneSpace, ViewAxis};
    pub use nalgebra::Vector2 as Vec2;
}
