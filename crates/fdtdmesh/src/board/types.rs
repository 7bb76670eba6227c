use tracing::debug;

use crate::conflict::{ConflictKind, ConflictManager, ConflictTag, Solution};
use crate::mesh::{MeshlinePolicyManager, Origin, Policy, PolicyId};
use crate::model::{build_edges, Edge, EdgeId, Material, Normal, Polygon, PolygonId, Shape};
use crate::params::GlobalParams;
use crate::space::{Plane, ViewAxis, ViewAxisSpace};

use super::detect;
use super::steps::{Step, StepObserver};

/// Pipeline state of one plane.
///
/// Owns every entity of the plane in arenas; conflicts and policies refer
/// to edges and polygons by handle.
#[derive(Clone, Debug)]
pub struct Board {
    plane: Plane,
    params: GlobalParams,
    polygons: Vec<Polygon>,
    edges: Vec<Edge>,
    conflicts: ConflictManager,
    policies: MeshlinePolicyManager,
    fixed: ViewAxisSpace<Vec<f64>>,
    non_conflicting: Vec<EdgeId>,
    last_step: Option<Step>,
}

impl Board {
    /// Build polygons and their edges; no step has run yet.
    pub fn new(
        plane: Plane,
        params: GlobalParams,
        shapes: Vec<Shape>,
        fixed: ViewAxisSpace<Vec<f64>>,
    ) -> Self {
        let mut polygons = Vec::with_capacity(shapes.len());
        let mut edges = Vec::new();
        for (i, shape) in shapes.into_iter().enumerate() {
            let mut poly = Polygon::new(PolygonId(i), shape);
            let built = build_edges(poly.id, &poly.points, poly.rotation, edges.len());
            poly.edges = built.iter().map(|e| e.id).collect();
            edges.extend(built);
            polygons.push(poly);
        }
        Self {
            plane,
            params,
            polygons,
            edges,
            conflicts: ConflictManager::new(),
            policies: MeshlinePolicyManager::new(params),
            fixed,
            non_conflicting: Vec::new(),
            last_step: None,
        }
    }

    #[inline]
    pub fn plane(&self) -> Plane {
        self.plane
    }

    #[inline]
    pub fn params(&self) -> &GlobalParams {
        &self.params
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn conflicts(&self) -> &ConflictManager {
        &self.conflicts
    }

    #[inline]
    pub fn policies(&self) -> &MeshlinePolicyManager {
        &self.policies
    }

    /// Edges recorded by `DetectNonConflictingEdges`.
    #[inline]
    pub fn non_conflicting_edges(&self) -> &[EdgeId] {
        &self.non_conflicting
    }

    #[inline]
    pub fn last_step(&self) -> Option<Step> {
        self.last_step
    }

    /// Step `run_next_step` would run.
    pub fn next_step(&self) -> Option<Step> {
        match self.last_step {
            None => Some(Step::first()),
            Some(s) => s.next(),
        }
    }

    #[inline]
    pub fn can_run_next_step(&self) -> bool {
        self.next_step().is_some()
    }

    pub fn run_next_step(&mut self, observer: &mut dyn StepObserver) -> Option<Step> {
        let step = self.next_step()?;
        self.run_step(step, observer);
        Some(step)
    }

    pub fn run_all_steps(&mut self, observer: &mut dyn StepObserver) {
        while self.run_next_step(observer).is_some() {}
        observer.on_done(self.plane);
    }

    /// Run one step and record it as the last one.
    pub fn run_step(&mut self, step: Step, observer: &mut dyn StepObserver) {
        observer.on_step(self.plane, step);
        match step {
            Step::AdjustEdgeToMaterial => self.adjust_edges_to_material(),
            Step::DetectConflictEip => {
                detect::edges_in_polygons(&self.polygons, &mut self.edges, &mut self.conflicts);
                debug!(
                    plane = ?self.plane,
                    conflicts = self.conflicts.count(ConflictTag::EdgeInPolygon),
                    "detected edges in polygons"
                );
            }
            Step::DetectConflictCe => {
                detect::colinear_edges(&mut self.edges, &mut self.conflicts);
                debug!(
                    plane = ?self.plane,
                    conflicts = self.conflicts.count(ConflictTag::ColinearEdges),
                    "detected colinear edges"
                );
            }
            Step::DetectNonConflictingEdges => {
                self.non_conflicting = detect::non_conflicting_edges(&self.edges, &self.conflicts);
                debug!(plane = ?self.plane, edges = self.non_conflicting.len(), "non conflicting edges");
            }
            Step::AddFixedMlp => self.add_fixed_meshline_policies(),
            Step::SolveAllEip => {
                let solved = self.conflicts.auto_solve_all(
                    ConflictTag::EdgeInPolygon,
                    &mut self.edges,
                    &mut self.policies,
                );
                debug!(
                    plane = ?self.plane,
                    solved,
                    unsolved = self.conflicts.count_unsolved(),
                    "solved edges in polygons"
                );
            }
            Step::SolveAllCe => self.solve_colinear_edges(),
            Step::DetectAndSolveTcmlp => {
                let merges = self
                    .policies
                    .detect_and_solve_too_close_meshline_policies(&mut self.conflicts);
                debug!(plane = ?self.plane, merges, "merged too close policies");
            }
            Step::DetectIntervals => self.policies.detect_intervals(),
            Step::Mesh => {
                self.policies.mesh();
                debug!(
                    plane = ?self.plane,
                    h = self.policies.meshlines(ViewAxis::H).len(),
                    v = self.policies.meshlines(ViewAxis::V).len(),
                    "meshed plane"
                );
            }
        }
        self.last_step = Some(step);
    }

    /// Air carves into its surroundings: its edges face the other way.
    fn adjust_edges_to_material(&mut self) {
        for poly in self.polygons.iter().filter(|p| p.material == Material::Air) {
            for id in &poly.edges {
                if let Some(e) = self.edges.get_mut(id.0) {
                    e.to_reverse = true;
                }
            }
        }
    }

    fn add_fixed_meshline_policies(&mut self) {
        for axis in ViewAxis::ALL {
            for &coord in &self.fixed[axis] {
                self.policies.add_meshline_policy(
                    Origin::Fixed,
                    axis,
                    Policy::OneLine,
                    Normal::None,
                    coord,
                    true,
                );
            }
        }
    }

    fn solve_colinear_edges(&mut self) {
        let solved = self.conflicts.auto_solve_all(
            ConflictTag::ColinearEdges,
            &mut self.edges,
            &mut self.policies,
        );
        let substrate = self.params.substrate_res_factor();

        let mut dielectric: Vec<PolicyId> = Vec::new();
        for c in self.conflicts.all() {
            let (ConflictKind::ColinearEdges(ce), Some(Solution::Policy(pid))) =
                (&c.kind, c.solution())
            else {
                continue;
            };
            let has_conductor = ce
                .edges
                .iter()
                .filter_map(|id| self.edges.get(id.0))
                .filter(|e| e.to_mesh)
                .any(|e| self.material_of(e) == Some(Material::Conductor));
            if !has_conductor {
                dielectric.push(pid);
            }
        }

        let mut added = 0;
        for id in &self.non_conflicting {
            let Some(e) = self.edges.get(id.0) else {
                continue;
            };
            let normal = e.effective_normal();
            let (Some(axis), Some(coord)) = (e.view_axis(), e.coord()) else {
                continue;
            };
            if !e.to_mesh || normal == Normal::None {
                continue;
            }
            let is_conductor = self.material_of(e) == Some(Material::Conductor);
            if let Some(pid) = self.policies.add_meshline_policy(
                Origin::Edge(*id),
                axis,
                Policy::Thirds,
                normal,
                coord,
                true,
            ) {
                added += 1;
                if !is_conductor {
                    dielectric.push(pid);
                }
            }
        }
        for pid in dielectric {
            self.policies.set_res_factor(pid, substrate);
        }
        debug!(
            plane = ?self.plane,
            solved,
            edge_policies = added,
            unsolved = self.conflicts.count_unsolved(),
            "solved colinear edges"
        );
    }

    fn material_of(&self, e: &Edge) -> Option<Material> {
        self.polygons.get(e.polygon.0).map(|p| p.material)
    }
}
