//! Intervals between adjacent enabled policies and their graded fill.
//!
//! The fill grows spacing geometrically away from both bounding policies,
//! always extending the side whose last gap is smaller, so the two fronts
//! never differ by more than the growth factor. Once the remaining span is
//! small compared to the current spacing it is closed with equal gaps that
//! fit the ratio bound on both sides.

use crate::params::EQUALITY_TOLERANCE;
use crate::space::ViewAxis;

use super::policy::PolicyId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalId {
    pub axis: ViewAxis,
    pub index: usize,
}

/// Smoothing parameters of one interval end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Side {
    pub policy: PolicyId,
    pub lmin: usize,
    pub lambda: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub id: IntervalId,
    pub before: Side,
    pub after: Side,
    /// Midpoint between the two policy coordinates.
    pub m: f64,
    /// Half-width.
    pub h: f64,
}

impl Interval {
    pub fn new(id: IntervalId, before: Side, after: Side, a: f64, b: f64) -> Self {
        Self {
            id,
            before,
            after,
            m: 0.5 * (a + b),
            h: 0.5 * (b - a).abs(),
        }
    }

    #[inline]
    pub fn lambda(&self) -> f64 {
        self.before.lambda.min(self.after.lambda)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.h <= EQUALITY_TOLERANCE
    }

    /// Largest spacing allowed anywhere in or next to this interval.
    ///
    /// Leaves room for `lmin` lines per half plus the closing reserve of the
    /// fill, so `Fill::lines` always finds a valid closure.
    pub fn spacing_cap(&self, dmax: f64) -> f64 {
        let lmin = self.before.lmin.max(self.after.lmin) as f64;
        let k = closing_factor(self.lambda()) as f64;
        dmax.min(2.0 * self.h / (2.0 * lmin + 2.0 * k + 4.0))
    }
}

/// Number of closing gaps that always fit a window of ratio `lambda`.
pub fn closing_factor(lambda: f64) -> usize {
    let excess = (lambda - 1.0).max(1e-3);
    (1.0 / excess).ceil().max(1.0) as usize
}

/// Graded fill between two rule lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub start: f64,
    pub end: f64,
    /// Spacing already present just below `start`.
    pub d_start: f64,
    /// Spacing already present just above `end`.
    pub d_end: f64,
    /// Take one step of exactly `d_start` first (single-line policies).
    pub step_start: bool,
    pub step_end: bool,
    pub lambda: f64,
    pub cap: f64,
}

impl Fill {
    /// Intermediate coordinates strictly between `start` and `end`, ascending.
    pub fn lines(&self) -> Vec<f64> {
        let tol = EQUALITY_TOLERANCE;
        let (mut lo, mut hi) = (self.start, self.end);
        let mut g_lo = self.d_start.min(self.cap);
        let mut g_hi = self.d_end.min(self.cap);
        if hi - lo <= tol || g_lo <= tol || g_hi <= tol || self.lambda <= 1.0 {
            return Vec::new();
        }

        let mut low = Vec::new();
        let mut high = Vec::new();
        if self.step_start && hi - lo > g_lo + tol {
            lo += g_lo;
            low.push(lo);
        }
        if self.step_end && hi - lo > g_hi + tol {
            hi -= g_hi;
            high.push(hi);
        }

        let k = closing_factor(self.lambda) as f64;
        loop {
            let grow_low = g_lo <= g_hi;
            let small = g_lo.min(g_hi);
            let g = (small * self.lambda).min(self.cap);
            let balanced = g_lo.max(g_hi) <= small * self.lambda + tol;
            let next_small = if grow_low { g.min(g_hi) } else { g_lo.min(g) };
            let width = (next_small * self.lambda).min(self.cap);
            if hi - lo - g <= tol || (balanced && hi - lo - g < k * width + tol) {
                break;
            }
            if grow_low {
                lo += g;
                low.push(lo);
                g_lo = g;
            } else {
                hi -= g;
                high.push(hi);
                g_hi = g;
            }
        }

        let rest = hi - lo;
        let width = (g_lo.min(g_hi) * self.lambda).min(self.cap);
        let n = ((rest / width) - tol).ceil().max(1.0) as usize;
        let step = rest / n as f64;
        low.extend((1..n).map(|i| lo + step * i as f64));
        low.extend(high.into_iter().rev());
        low
    }
}
