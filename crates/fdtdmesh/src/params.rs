//! Global meshing parameters.
//!
//! One `GlobalParams` snapshot is shared by every plane of a run. Lengths are
//! in drawing units; `smoothness` and `lambda` are dimensionless ratios.

use thiserror::Error;

/// Absolute tolerance for every coordinate comparison.
pub const EQUALITY_TOLERANCE: f64 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalParams {
    /// Target line spacing next to conductor edges.
    pub metal_res: f64,
    /// Target line spacing next to dielectric-only edges.
    pub substrate_res: f64,
    /// Two policies at most this far apart are merged.
    pub proximity_limit: f64,
    /// Upper bound on the ratio of two adjacent spacings.
    pub smoothness: f64,
    /// Growth factor of the interval fill; clamped to `smoothness`.
    pub lambda: f64,
    /// Minimum number of lines in each interval half.
    pub lmin: usize,
    /// Maximum spacing between two adjacent lines.
    pub dmax: f64,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            metal_res: 1.0,
            substrate_res: 2.0,
            proximity_limit: 1.0,
            smoothness: 2.0,
            lambda: 2.0,
            lmin: 10,
            dmax: 2.5,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be a positive finite length, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be a finite ratio greater than 1, got {value}")]
    RatioTooSmall { name: &'static str, value: f64 },
}

impl GlobalParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("metal_res", self.metal_res),
            ("substrate_res", self.substrate_res),
            ("proximity_limit", self.proximity_limit),
            ("dmax", self.dmax),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NonPositive { name, value });
            }
        }
        for (name, value) in [("smoothness", self.smoothness), ("lambda", self.lambda)] {
            if !(value.is_finite() && value > 1.0) {
                return Err(ParamsError::RatioTooSmall { name, value });
            }
        }
        Ok(())
    }

    /// Growth factor used when grading an interval.
    ///
    /// Never exceeds `smoothness`; bounded away from 1 so the fill terminates
    /// even on unvalidated input.
    #[inline]
    pub fn growth(&self) -> f64 {
        self.lambda.min(self.smoothness).max(1.0 + 1e-3)
    }

    /// Resolution factor of a policy whose edges are all dielectric.
    #[inline]
    pub fn substrate_res_factor(&self) -> f64 {
        if self.substrate_res > 0.0 {
            self.metal_res / self.substrate_res
        } else {
            1.0
        }
    }
}
