//! Curated surface for front ends (CLI, benches).
//!
//! Re-exports only; no stability promise beyond the workspace.

// Pipeline
pub use crate::board::{Board, NoopObserver, RecordingObserver, Step, StepObserver, TracingObserver};
pub use crate::mesher::Mesher;
// Inputs
pub use crate::model::{Material, Shape};
pub use crate::params::{GlobalParams, ParamsError};
pub use crate::space::{planes_for, transpose, Axis, AxisSpace, Plane, PlaneSpace, ViewAxis};
// Outputs
pub use crate::conflict::{ConflictManager, ConflictTag};
pub use crate::mesh::{Meshline, MeshlinePolicy, Origin, Policy, PolicyId};
pub use crate::model::Normal;
// Random boards
pub use crate::rand::{draw_planes, draw_rect_board, RectBoardCfg, ReplayToken};
