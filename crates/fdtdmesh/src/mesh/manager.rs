//! Registry of meshline policies for one board.

use std::cmp::Ordering;

use tracing::debug;

use crate::conflict::ConflictManager;
use crate::model::Normal;
use crate::params::{GlobalParams, EQUALITY_TOLERANCE};
use crate::space::{ViewAxis, ViewAxisSpace};

use super::interval::{Fill, Interval, IntervalId, Side};
use super::policy::{is_valid_combination, Meshline, MeshlinePolicy, Origin, Policy, PolicyId};

#[derive(Clone, Debug)]
pub struct MeshlinePolicyManager {
    params: GlobalParams,
    policies: ViewAxisSpace<Vec<MeshlinePolicy>>,
    meshlines: ViewAxisSpace<Vec<Meshline>>,
    intervals: ViewAxisSpace<Vec<Interval>>,
}

impl MeshlinePolicyManager {
    pub fn new(params: GlobalParams) -> Self {
        Self {
            params,
            policies: ViewAxisSpace::default(),
            meshlines: ViewAxisSpace::default(),
            intervals: ViewAxisSpace::default(),
        }
    }

    #[inline]
    pub fn params(&self) -> &GlobalParams {
        &self.params
    }

    /// Register a policy. Returns `None` for an invalid policy/normal pair.
    pub fn add_meshline_policy(
        &mut self,
        origin: Origin,
        axis: ViewAxis,
        policy: Policy,
        normal: Normal,
        coord: f64,
        enabled: bool,
    ) -> Option<PolicyId> {
        if !is_valid_combination(policy, normal) {
            return None;
        }
        let list = &mut self.policies[axis];
        let id = PolicyId {
            axis,
            index: list.len(),
        };
        list.push(MeshlinePolicy {
            id,
            policy,
            normal,
            coord,
            is_enabled: enabled,
            res_factor: 1.0,
            d: self.params.metal_res.min(self.params.dmax),
            origins: vec![origin],
            meshlines: Vec::new(),
        });
        Some(id)
    }

    #[inline]
    pub fn get(&self, id: PolicyId) -> Option<&MeshlinePolicy> {
        self.policies[id.axis].get(id.index)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PolicyId) -> Option<&mut MeshlinePolicy> {
        self.policies[id.axis].get_mut(id.index)
    }

    /// Every policy on `axis`, disabled ones included, in creation order.
    #[inline]
    pub fn policies(&self, axis: ViewAxis) -> &[MeshlinePolicy] {
        &self.policies[axis]
    }

    #[inline]
    pub fn intervals(&self, axis: ViewAxis) -> &[Interval] {
        &self.intervals[axis]
    }

    /// Final lines of `axis`, sorted by coordinate (filled by `mesh`).
    #[inline]
    pub fn meshlines(&self, axis: ViewAxis) -> &[Meshline] {
        &self.meshlines[axis]
    }

    pub fn coords(&self, axis: ViewAxis) -> Vec<f64> {
        self.meshlines[axis].iter().map(|l| l.coord).collect()
    }

    pub fn set_res_factor(&mut self, id: PolicyId, res_factor: f64) {
        if let Some(p) = self.get_mut(id) {
            if res_factor.is_finite() && res_factor > 0.0 {
                p.res_factor = res_factor;
            }
        }
    }

    pub fn disable(&mut self, id: PolicyId) {
        if let Some(p) = self.get_mut(id) {
            p.is_enabled = false;
        }
    }

    /// Closest pair of mergeable policies no farther apart than `limit`.
    ///
    /// Disabled and ONELINE policies never merge. Ties keep the first pair in
    /// ascending coordinate order.
    pub fn detect_closest_meshline_policies(
        policies: &[MeshlinePolicy],
        limit: f64,
    ) -> Option<(PolicyId, PolicyId)> {
        let mut candidates: Vec<&MeshlinePolicy> = policies
            .iter()
            .filter(|p| p.is_enabled && p.policy != Policy::OneLine)
            .collect();
        candidates.sort_by(|a, b| a.coord.partial_cmp(&b.coord).unwrap_or(Ordering::Equal));

        let mut best: Option<(f64, PolicyId, PolicyId)> = None;
        for w in candidates.windows(2) {
            let gap = w[1].coord - w[0].coord;
            if best.map_or(true, |(g, _, _)| gap < g - EQUALITY_TOLERANCE) {
                best = Some((gap, w[0].id, w[1].id));
            }
        }
        best.filter(|(gap, _, _)| *gap <= limit + EQUALITY_TOLERANCE)
            .map(|(_, a, b)| (a, b))
    }

    /// Merge too-close policies until no pair is within the proximity limit.
    ///
    /// Returns the number of merges. Each merge disables two enabled policies
    /// and adds at most one, so the loop terminates.
    pub fn detect_and_solve_too_close_meshline_policies(
        &mut self,
        conflicts: &mut ConflictManager,
    ) -> usize {
        let limit = self.params.proximity_limit;
        let mut merges = 0;
        for axis in ViewAxis::ALL {
            loop {
                let snapshot = self.policies[axis].clone();
                let Some((a, b)) = Self::detect_closest_meshline_policies(&snapshot, limit) else {
                    break;
                };
                let solved = conflicts.add_too_close_meshline_policies(a, b, self);
                self.disable(a);
                self.disable(b);
                merges += 1;
                debug!(?axis, ?a, ?b, ?solved, "merged too close policies");
            }
        }
        merges
    }

    /// Rebuild intervals between coordinate-adjacent enabled policies.
    pub fn detect_intervals(&mut self) {
        let lmin = self.params.lmin;
        let lambda = self.params.growth();
        for axis in ViewAxis::ALL {
            let mut enabled: Vec<&MeshlinePolicy> =
                self.policies[axis].iter().filter(|p| p.is_enabled).collect();
            enabled.sort_by(|a, b| a.coord.partial_cmp(&b.coord).unwrap_or(Ordering::Equal));
            let intervals = enabled
                .windows(2)
                .enumerate()
                .map(|(index, w)| {
                    let side = |p: &MeshlinePolicy| Side {
                        policy: p.id,
                        lmin,
                        lambda,
                    };
                    Interval::new(
                        IntervalId { axis, index },
                        side(w[0]),
                        side(w[1]),
                        w[0].coord,
                        w[1].coord,
                    )
                })
                .collect();
            self.intervals[axis] = intervals;
        }
    }

    /// Settle each enabled policy's spacing and emit every line.
    pub fn mesh(&mut self) {
        for axis in ViewAxis::ALL {
            self.mesh_axis(axis);
            debug!(?axis, lines = self.meshlines[axis].len(), "meshed axis");
        }
    }

    fn mesh_axis(&mut self, axis: ViewAxis) {
        let params = self.params;
        for p in self.policies[axis].iter_mut() {
            p.meshlines.clear();
            if p.is_enabled {
                p.d = (params.metal_res / p.res_factor).min(params.dmax);
            }
        }

        let intervals = self.intervals[axis].clone();
        for iv in intervals.iter().filter(|iv| !iv.is_degenerate()) {
            let cap = iv.spacing_cap(params.dmax);
            for id in [iv.before.policy, iv.after.policy] {
                if let Some(p) = self.get_mut(id) {
                    p.d = p.d.min(cap);
                }
            }
        }

        let mut lines: Vec<Meshline> = Vec::new();
        for p in self.policies[axis].iter().filter(|p| p.is_enabled) {
            lines.extend(p.rule_lines().into_iter().map(|coord| Meshline {
                coord,
                policy: p.id,
            }));
        }
        for iv in intervals.iter().filter(|iv| !iv.is_degenerate()) {
            let (Some(b), Some(a)) = (self.get(iv.before.policy), self.get(iv.after.policy)) else {
                continue;
            };
            let fill = Fill {
                start: b.coord + b.reach_up(),
                end: a.coord - a.reach_down(),
                d_start: b.d,
                d_end: a.d,
                step_start: b.policy == Policy::OneLine,
                step_end: a.policy == Policy::OneLine,
                lambda: iv.lambda(),
                cap: iv.spacing_cap(params.dmax),
            };
            lines.extend(fill.lines().into_iter().map(|coord| Meshline {
                coord,
                policy: if coord <= iv.m { b.id } else { a.id },
            }));
        }
        lines.sort_by(|a, b| a.coord.partial_cmp(&b.coord).unwrap_or(Ordering::Equal));

        for (i, line) in lines.iter().enumerate() {
            if let Some(p) = self.policies[axis].get_mut(line.policy.index) {
                p.meshlines.push(i);
            }
        }
        self.meshlines[axis] = lines;
    }
}
