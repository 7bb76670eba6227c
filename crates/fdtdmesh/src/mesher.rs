//! Three-plane orchestrator.
//!
//! Runs one `Board` per plane in lock step and combines the plane-local
//! lines into one sorted grid per global axis.

use std::cmp::Ordering;

use tracing::debug;

use crate::board::{Board, NoopObserver, Step, StepObserver};
use crate::mesh::MeshlinePolicy;
use crate::model::Shape;
use crate::params::{GlobalParams, EQUALITY_TOLERANCE};
use crate::space::{planes_for, transpose, Axis, AxisSpace, Plane, PlaneSpace, ViewAxisSpace};

#[derive(Clone, Debug)]
pub struct Mesher {
    params: GlobalParams,
    shapes: PlaneSpace<Vec<Shape>>,
    fixed: AxisSpace<Vec<f64>>,
    boards: PlaneSpace<Board>,
}

impl Mesher {
    pub fn new(
        params: GlobalParams,
        shapes: PlaneSpace<Vec<Shape>>,
        fixed: AxisSpace<Vec<f64>>,
    ) -> Self {
        let boards = Self::fresh_boards(&params, &shapes, &fixed);
        Self {
            params,
            shapes,
            fixed,
            boards,
        }
    }

    fn fresh_boards(
        params: &GlobalParams,
        shapes: &PlaneSpace<Vec<Shape>>,
        fixed: &AxisSpace<Vec<f64>>,
    ) -> PlaneSpace<Board> {
        PlaneSpace::from_fn(|plane| {
            let lines = ViewAxisSpace::from_fn(|view| fixed[transpose(plane, view)].clone());
            Board::new(plane, *params, shapes[plane].clone(), lines)
        })
    }

    #[inline]
    pub fn params(&self) -> &GlobalParams {
        &self.params
    }

    /// Replace the parameters; takes effect at the next `do_from`.
    pub fn set_params(&mut self, params: GlobalParams) {
        self.params = params;
    }

    #[inline]
    pub fn board(&self, plane: Plane) -> &Board {
        &self.boards[plane]
    }

    /// Last step run on every plane.
    pub fn current_step(&self) -> Option<Step> {
        self.boards[Plane::XY].last_step()
    }

    pub fn can_do_next_step(&self) -> bool {
        self.boards.iter().any(|(_, b)| b.can_run_next_step())
    }

    /// Advance every plane by one step; returns the step run.
    pub fn do_x_step(&mut self, observer: &mut dyn StepObserver) -> Option<Step> {
        let mut ran = None;
        for (_, board) in self.boards.iter_mut() {
            ran = board.run_next_step(observer).or(ran);
        }
        ran
    }

    /// Run every remaining step.
    pub fn do_all_step(&mut self, observer: &mut dyn StepObserver) {
        while self.do_x_step(observer).is_some() {}
        for plane in Plane::ALL {
            observer.on_done(plane);
        }
        debug!(
            x = self.meshlines(Axis::X).len(),
            y = self.meshlines(Axis::Y).len(),
            z = self.meshlines(Axis::Z).len(),
            "grid done"
        );
    }

    /// Rebuild the boards and rerun from `step` to the end.
    ///
    /// Earlier steps are replayed silently; `observer` sees `step` and
    /// every later one.
    pub fn do_from(&mut self, step: Step, observer: &mut dyn StepObserver) {
        self.boards = Self::fresh_boards(&self.params, &self.shapes, &self.fixed);
        for (_, board) in self.boards.iter_mut() {
            for s in &Step::ALL[..step.index()] {
                board.run_step(*s, &mut NoopObserver);
            }
        }
        self.do_all_step(observer);
    }

    /// Sorted lines of one global axis, both contributing planes merged and
    /// coincident coordinates collapsed.
    pub fn meshlines(&self, axis: Axis) -> Vec<f64> {
        let mut coords: Vec<f64> = planes_for(axis)
            .into_iter()
            .flat_map(|(plane, view)| self.boards[plane].policies().coords(view))
            .collect();
        coords.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        coords.dedup_by(|a, b| (*a - *b).abs() <= EQUALITY_TOLERANCE);
        coords
    }

    /// The full grid.
    pub fn grid(&self) -> AxisSpace<Vec<f64>> {
        AxisSpace::from_fn(|axis| self.meshlines(axis))
    }

    /// Policies behind the lines of `axis`, tagged with their plane.
    pub fn policies(&self, axis: Axis) -> Vec<(Plane, &MeshlinePolicy)> {
        planes_for(axis)
            .into_iter()
            .flat_map(|(plane, view)| {
                self.boards[plane]
                    .policies()
                    .policies(view)
                    .iter()
                    .map(move |p| (plane, p))
            })
            .collect()
    }

    /// Unsolved conflicts summed over the planes.
    pub fn count_unsolved(&self) -> usize {
        self.boards
            .iter()
            .map(|(_, b)| b.conflicts().count_unsolved())
            .sum()
    }
}
