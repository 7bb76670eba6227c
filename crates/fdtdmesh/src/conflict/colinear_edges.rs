use crate::mesh::{MeshlinePolicyManager, Origin, Policy};
use crate::model::{Edge, EdgeId, Normal};
use crate::space::ViewAxis;

use super::types::{ConflictId, Solution};

/// Edges lying on one axis-aligned line.
#[derive(Clone, Debug, PartialEq)]
pub struct ColinearEdges {
    pub axis: ViewAxis,
    pub coord: f64,
    pub edges: Vec<EdgeId>,
}

impl ColinearEdges {
    /// Rule for the line from the meshable edges' effective normals.
    pub fn decide(&self, edges: &[Edge]) -> Option<(Policy, Normal)> {
        let (mut min, mut max) = (false, false);
        for e in self.edges.iter().filter_map(|id| edges.get(id.0)) {
            if !e.to_mesh {
                continue;
            }
            match e.effective_normal() {
                Normal::Min => min = true,
                Normal::Max => max = true,
                Normal::None => {}
            }
        }
        match (min, max) {
            (true, true) => Some((Policy::Halfs, Normal::None)),
            (true, false) => Some((Policy::Thirds, Normal::Min)),
            (false, true) => Some((Policy::Thirds, Normal::Max)),
            (false, false) => None,
        }
    }

    pub(super) fn auto_solve(
        &self,
        id: ConflictId,
        edges: &[Edge],
        policies: &mut MeshlinePolicyManager,
    ) -> Option<Solution> {
        let (policy, normal) = self.decide(edges)?;
        policies
            .add_meshline_policy(
                Origin::Conflict(id),
                self.axis,
                policy,
                normal,
                self.coord,
                true,
            )
            .map(Solution::Policy)
    }
}
