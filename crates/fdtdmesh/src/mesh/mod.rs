//! Meshline policies, intervals and the final spacing algorithm.
//!
//! - `policy`: `MeshlinePolicy`, its rule lines, `Meshline`.
//! - `interval`: `Interval` between two enabled policies and the graded
//!   `Fill` placed inside it.
//! - `manager`: `MeshlinePolicyManager`, owner of all of the above per view
//!   axis; runs the proximity-merge fixpoint and `mesh`.
//!
//! Spacing guarantees of `mesh` for every non-degenerate interval: no gap
//! exceeds `dmax`, adjacent gaps differ at most by `smoothness`, and each
//! interval half holds at least `lmin` lines.

mod interval;
mod manager;
mod policy;

pub use interval::{closing_factor, Fill, Interval, IntervalId, Side};
pub use manager::MeshlinePolicyManager;
pub use policy::{is_valid_combination, Meshline, MeshlinePolicy, Origin, Policy, PolicyId};
