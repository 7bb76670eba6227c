//! Conflict record and its kind-specific payloads.

use crate::mesh::{MeshlinePolicyManager, PolicyId};
use crate::model::{Edge, EdgeId};

use super::colinear_edges::ColinearEdges;
use super::edge_in_polygon::EdgeInPolygon;
use super::too_close::TooCloseMeshlinePolicies;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConflictId(pub usize);

/// What a solved conflict resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Solution {
    Policy(PolicyId),
    /// The decision was written onto the edge's `to_mesh` flag.
    Edge(EdgeId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConflictTag {
    ColinearEdges,
    EdgeInPolygon,
    TooCloseMeshlinePolicies,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConflictKind {
    ColinearEdges(ColinearEdges),
    EdgeInPolygon(EdgeInPolygon),
    TooCloseMeshlinePolicies(TooCloseMeshlinePolicies),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    pub id: ConflictId,
    pub kind: ConflictKind,
    is_solved: bool,
    solution: Option<Solution>,
}

impl Conflict {
    pub fn new(id: ConflictId, kind: ConflictKind) -> Self {
        Self {
            id,
            kind,
            is_solved: false,
            solution: None,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.is_solved
    }

    #[inline]
    pub fn solution(&self) -> Option<Solution> {
        self.solution
    }

    pub fn tag(&self) -> ConflictTag {
        match self.kind {
            ConflictKind::ColinearEdges(_) => ConflictTag::ColinearEdges,
            ConflictKind::EdgeInPolygon(_) => ConflictTag::EdgeInPolygon,
            ConflictKind::TooCloseMeshlinePolicies(_) => ConflictTag::TooCloseMeshlinePolicies,
        }
    }

    /// Decide this conflict once. A solved conflict returns its solution
    /// again without touching edges or policies.
    pub fn auto_solve(
        &mut self,
        edges: &mut [Edge],
        policies: &mut MeshlinePolicyManager,
    ) -> Option<Solution> {
        if self.is_solved {
            return self.solution;
        }
        let id = self.id;
        let solution = match &self.kind {
            ConflictKind::ColinearEdges(c) => c.auto_solve(id, edges, policies),
            ConflictKind::EdgeInPolygon(c) => c.auto_solve(edges),
            ConflictKind::TooCloseMeshlinePolicies(c) => c.auto_solve(id, policies),
        };
        if solution.is_some() {
            self.is_solved = true;
            self.solution = solution;
        }
        solution
    }
}
