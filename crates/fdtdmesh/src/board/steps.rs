//! Pipeline steps and progress observers.

use tracing::info;

use crate::space::Plane;

/// One stage of the per-plane pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    AdjustEdgeToMaterial,
    DetectConflictEip,
    DetectConflictCe,
    DetectNonConflictingEdges,
    AddFixedMlp,
    SolveAllEip,
    SolveAllCe,
    DetectAndSolveTcmlp,
    DetectIntervals,
    Mesh,
}

impl Step {
    pub const ALL: [Step; 10] = [
        Step::AdjustEdgeToMaterial,
        Step::DetectConflictEip,
        Step::DetectConflictCe,
        Step::DetectNonConflictingEdges,
        Step::AddFixedMlp,
        Step::SolveAllEip,
        Step::SolveAllCe,
        Step::DetectAndSolveTcmlp,
        Step::DetectIntervals,
        Step::Mesh,
    ];

    #[inline]
    pub fn first() -> Step {
        Step::ALL[0]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Following step; `None` after `Mesh`.
    #[inline]
    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    /// This step and every later one.
    #[inline]
    pub fn that_and_after(self) -> &'static [Step] {
        &Step::ALL[self.index()..]
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::AdjustEdgeToMaterial => "adjust_edge_to_material",
            Step::DetectConflictEip => "detect_conflict_eip",
            Step::DetectConflictCe => "detect_conflict_ce",
            Step::DetectNonConflictingEdges => "detect_non_conflicting_edges",
            Step::AddFixedMlp => "add_fixed_mlp",
            Step::SolveAllEip => "solve_all_eip",
            Step::SolveAllCe => "solve_all_ce",
            Step::DetectAndSolveTcmlp => "detect_and_solve_tcmlp",
            Step::DetectIntervals => "detect_intervals",
            Step::Mesh => "mesh",
        }
    }
}

/// Receives progress from the step runners.
pub trait StepObserver {
    fn on_step(&mut self, plane: Plane, step: Step);
    fn on_done(&mut self, _plane: Plane) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _plane: Plane, _step: Step) {}
}

/// Reports each step as an `info` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_step(&mut self, plane: Plane, step: Step) {
        info!(?plane, step = step.name(), "step");
    }

    fn on_done(&mut self, plane: Plane) {
        info!(?plane, "plane done");
    }
}

/// Records every notification; handy in tests and the CLI report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingObserver {
    pub steps: Vec<(Plane, Step)>,
    pub done: Vec<Plane>,
}

impl StepObserver for RecordingObserver {
    fn on_step(&mut self, plane: Plane, step: Step) {
        self.steps.push((plane, step));
    }

    fn on_done(&mut self, plane: Plane) {
        self.done.push(plane);
    }
}
