//! Meshline policies and the lines they produce.

use crate::conflict::ConflictId;
use crate::model::{EdgeId, Normal};
use crate::space::ViewAxis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolicyId {
    pub axis: ViewAxis,
    pub index: usize,
}

/// Line placement rule around a policy coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    OneLine,
    Halfs,
    Thirds,
}

/// Who asked for a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    Conflict(ConflictId),
    Edge(EdgeId),
    /// User-supplied fixed meshline.
    Fixed,
}

/// THIRDS needs a side, ONELINE and HALFS must not have one.
pub fn is_valid_combination(policy: Policy, normal: Normal) -> bool {
    match policy {
        Policy::Thirds => normal != Normal::None,
        Policy::OneLine | Policy::Halfs => normal == Normal::None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshlinePolicy {
    pub id: PolicyId,
    pub policy: Policy,
    pub normal: Normal,
    pub coord: f64,
    pub is_enabled: bool,
    pub res_factor: f64,
    /// Local spacing, settled by `MeshlinePolicyManager::mesh`.
    pub d: f64,
    pub origins: Vec<Origin>,
    /// Indices into the axis meshline list.
    pub meshlines: Vec<usize>,
}

impl MeshlinePolicy {
    #[inline]
    pub fn axis(&self) -> ViewAxis {
        self.id.axis
    }

    /// Lines placed by the rule itself, ascending.
    ///
    /// THIRDS puts one third of `d` on the conductor side (opposite the
    /// normal) and two thirds on the normal side.
    pub fn rule_lines(&self) -> Vec<f64> {
        let (c, d) = (self.coord, self.d);
        match (self.policy, self.normal) {
            (Policy::OneLine, _) => vec![c],
            (Policy::Halfs, _) => vec![c - d / 2.0, c + d / 2.0],
            (Policy::Thirds, Normal::Min) => vec![c - 2.0 * d / 3.0, c + d / 3.0],
            (Policy::Thirds, _) => vec![c - d / 3.0, c + 2.0 * d / 3.0],
        }
    }

    /// Distance from `coord` to the highest rule line.
    pub fn reach_up(&self) -> f64 {
        match (self.policy, self.normal) {
            (Policy::OneLine, _) => 0.0,
            (Policy::Halfs, _) => self.d / 2.0,
            (Policy::Thirds, Normal::Min) => self.d / 3.0,
            (Policy::Thirds, _) => 2.0 * self.d / 3.0,
        }
    }

    /// Distance from `coord` to the lowest rule line.
    pub fn reach_down(&self) -> f64 {
        match (self.policy, self.normal) {
            (Policy::OneLine, _) => 0.0,
            (Policy::Halfs, _) => self.d / 2.0,
            (Policy::Thirds, Normal::Min) => 2.0 * self.d / 3.0,
            (Policy::Thirds, _) => self.d / 3.0,
        }
    }
}

/// Final output primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Meshline {
    pub coord: f64,
    pub policy: PolicyId,
}
