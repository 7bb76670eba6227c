//! Owner of all conflicts of a board.

use crate::geom::{eq_eps, Range, Segment};
use crate::mesh::{MeshlinePolicyManager, PolicyId};
use crate::model::{Edge, EdgeId, PolygonId};

use super::colinear_edges::ColinearEdges;
use super::edge_in_polygon::{EdgeInPolygon, Overlap};
use super::too_close::TooCloseMeshlinePolicies;
use super::types::{Conflict, ConflictId, ConflictKind, ConflictTag, Solution};

#[derive(Clone, Debug, Default)]
pub struct ConflictManager {
    conflicts: Vec<Conflict>,
}

impl ConflictManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn all(&self) -> &[Conflict] {
        &self.conflicts
    }

    #[inline]
    pub fn get(&self, id: ConflictId) -> Option<&Conflict> {
        self.conflicts.get(id.0)
    }

    pub fn count(&self, tag: ConflictTag) -> usize {
        self.conflicts.iter().filter(|c| c.tag() == tag).count()
    }

    pub fn count_unsolved(&self) -> usize {
        self.conflicts.iter().filter(|c| !c.is_solved()).count()
    }

    fn push(&mut self, kind: ConflictKind) -> ConflictId {
        let id = ConflictId(self.conflicts.len());
        self.conflicts.push(Conflict::new(id, kind));
        id
    }

    fn find_on_edge(&self, edge: &Edge, tag: ConflictTag) -> Option<ConflictId> {
        edge.conflicts
            .iter()
            .copied()
            .find(|id| self.get(*id).is_some_and(|c| c.tag() == tag))
    }

    /// Group two edges lying on one H or V line.
    ///
    /// No-op (returns `None`) unless both edges share the view axis and the
    /// line coordinate.
    pub fn add_colinear_edges(
        &mut self,
        edges: &mut [Edge],
        a: EdgeId,
        b: EdgeId,
    ) -> Option<ConflictId> {
        if a == b {
            return None;
        }
        let (ea, eb) = (edges.get(a.0)?, edges.get(b.0)?);
        let axis = ea.view_axis()?;
        let coord = ea.coord()?;
        if eb.view_axis() != Some(axis) || !eb.coord().is_some_and(|c| eq_eps(c, coord)) {
            return None;
        }

        let existing = self
            .find_on_edge(ea, ConflictTag::ColinearEdges)
            .or_else(|| self.find_on_edge(eb, ConflictTag::ColinearEdges));
        let id = match existing {
            Some(id) => {
                if let Some(ConflictKind::ColinearEdges(c)) =
                    self.conflicts.get_mut(id.0).map(|c| &mut c.kind)
                {
                    for e in [a, b] {
                        if !c.edges.contains(&e) {
                            c.edges.push(e);
                        }
                    }
                }
                id
            }
            None => self.push(ConflictKind::ColinearEdges(ColinearEdges {
                axis,
                coord,
                edges: vec![a, b],
            })),
        };
        for e in [a, b] {
            if let Some(edge) = edges.get_mut(e.0) {
                if !edge.conflicts.contains(&id) {
                    edge.conflicts.push(id);
                }
            }
        }
        Some(id)
    }

    /// Record that (part of) `edge` lies in `polygon`.
    ///
    /// One conflict per edge; later calls append overlaps. A missing range
    /// stands for the whole edge.
    pub fn add_edge_in_polygon(
        &mut self,
        edges: &mut [Edge],
        edge: EdgeId,
        polygon: PolygonId,
        range: Option<Range>,
        shared: Option<EdgeId>,
    ) -> Option<ConflictId> {
        let e = edges.get(edge.0)?;
        let overlap = Overlap {
            polygon,
            range: range.unwrap_or_else(|| Segment::new(e.p0(), e.p1())),
            edge: shared,
        };
        if let Some(id) = self.find_on_edge(e, ConflictTag::EdgeInPolygon) {
            if let Some(ConflictKind::EdgeInPolygon(c)) =
                self.conflicts.get_mut(id.0).map(|c| &mut c.kind)
            {
                c.overlaps.push(overlap);
            }
            return Some(id);
        }
        let id = self.push(ConflictKind::EdgeInPolygon(EdgeInPolygon {
            edge,
            overlaps: vec![overlap],
        }));
        if let Some(e) = edges.get_mut(edge.0) {
            e.conflicts.push(id);
        }
        Some(id)
    }

    /// Create and immediately solve a merge of two enabled policies.
    pub fn add_too_close_meshline_policies(
        &mut self,
        a: PolicyId,
        b: PolicyId,
        policies: &mut MeshlinePolicyManager,
    ) -> Option<ConflictId> {
        let (pa, pb) = (policies.get(a)?, policies.get(b)?);
        if a == b || pa.axis() != pb.axis() || !pa.is_enabled || !pb.is_enabled {
            return None;
        }
        let id = self.push(ConflictKind::TooCloseMeshlinePolicies(
            TooCloseMeshlinePolicies { a, b },
        ));
        self.auto_solve(id, &mut [], policies);
        Some(id)
    }

    pub fn auto_solve(
        &mut self,
        id: ConflictId,
        edges: &mut [Edge],
        policies: &mut MeshlinePolicyManager,
    ) -> Option<Solution> {
        self.conflicts.get_mut(id.0)?.auto_solve(edges, policies)
    }

    /// Solve every conflict of one kind; returns how many ended up solved.
    pub fn auto_solve_all(
        &mut self,
        tag: ConflictTag,
        edges: &mut [Edge],
        policies: &mut MeshlinePolicyManager,
    ) -> usize {
        self.conflicts
            .iter_mut()
            .filter(|c| c.tag() == tag)
            .filter_map(|c| c.auto_solve(edges, policies))
            .count()
    }
}
