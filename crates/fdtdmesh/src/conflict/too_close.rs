use crate::mesh::{MeshlinePolicy, MeshlinePolicyManager, Origin, Policy, PolicyId};
use crate::model::Normal;

use super::types::{ConflictId, Solution};

/// Two policies on one axis closer than the proximity limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooCloseMeshlinePolicies {
    pub a: PolicyId,
    pub b: PolicyId,
}

/// Merged rule of two policies, or `None` when they cannot merge.
pub fn combine(a: &MeshlinePolicy, b: &MeshlinePolicy) -> Option<(Policy, Normal)> {
    if a.axis() != b.axis() {
        return None;
    }
    match (a.policy, b.policy) {
        (Policy::Thirds, Policy::Thirds) if a.normal != b.normal => {
            Some((Policy::Halfs, Normal::None))
        }
        (Policy::Thirds, Policy::Thirds) => Some((Policy::Thirds, a.normal)),
        (Policy::Halfs, Policy::Halfs | Policy::Thirds)
        | (Policy::Thirds, Policy::Halfs) => Some((Policy::Halfs, Normal::None)),
        _ => None,
    }
}

impl TooCloseMeshlinePolicies {
    pub(super) fn auto_solve(
        &self,
        id: ConflictId,
        policies: &mut MeshlinePolicyManager,
    ) -> Option<Solution> {
        let a = policies.get(self.a)?;
        let b = policies.get(self.b)?;
        let (policy, normal) = combine(a, b)?;
        let coord = 0.5 * (a.coord + b.coord);
        let res_factor = a.res_factor.max(b.res_factor);
        let axis = a.axis();
        let merged = policies.add_meshline_policy(
            Origin::Conflict(id),
            axis,
            policy,
            normal,
            coord,
            true,
        )?;
        policies.set_res_factor(merged, res_factor);
        Some(Solution::Policy(merged))
    }
}
