//! Per-plane pipeline: conflict detection, solving and meshing.
//!
//! A `Board` walks the fixed `Step` sequence once. Steps can be driven one
//! at a time (`run_next_step`) so callers can inspect intermediate state,
//! or all at once (`run_all_steps`). Progress goes to a `StepObserver`
//! passed by the caller.

mod detect;
mod steps;
mod types;

pub use steps::{NoopObserver, RecordingObserver, Step, StepObserver, TracingObserver};
pub use types::Board;

#[cfg(test)]
mod tests;
