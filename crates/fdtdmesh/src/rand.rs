//! Random rectilinear boards (grid cells + replay tokens).
//!
//! Model
//! - A `cols x rows` grid of square cells. Each cell is left empty or holds
//!   one axis-aligned rectangle, either the full cell (so neighbours abut
//!   and share edges) or an inset snapped to quarter cells.
//! - Rectangles never overlap in their interiors; the only contacts are
//!   shared or touching edges, which exercises the colinear-edges and
//!   edge-in-polygon paths of the board.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Material, Shape};
use crate::space::{Plane, PlaneSpace};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token of the `k`-th sub-draw, e.g. one per plane.
    #[inline]
    pub fn child(self, k: u64) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_mul(31).wrapping_add(k),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectBoardCfg {
    pub cols: usize,
    pub rows: usize,
    /// Cell edge length.
    pub cell: f64,
    /// Probability that a cell holds a rectangle.
    pub fill: f64,
    /// Probability that a filled cell is covered completely.
    pub full_cell: f64,
    /// Probability of `Conductor`; the rest splits evenly between
    /// `Dielectric` and `Air`.
    pub conductor: f64,
}

impl Default for RectBoardCfg {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            cell: 8.0,
            fill: 0.6,
            full_cell: 0.3,
            conductor: 0.6,
        }
    }
}

/// Draw one plane's worth of rectangles.
pub fn draw_rect_board(cfg: RectBoardCfg, tok: ReplayToken) -> Vec<Shape> {
    let mut rng = tok.to_std_rng();
    let cell = if cfg.cell.is_finite() && cfg.cell > 0.0 {
        cfg.cell
    } else {
        1.0
    };
    let q = cell / 4.0;
    let mut shapes = Vec::new();
    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            if !rng.gen_bool(cfg.fill.clamp(0.0, 1.0)) {
                continue;
            }
            let (x0, y0) = (col as f64 * cell, row as f64 * cell);
            let (lo, hi) = if rng.gen_bool(cfg.full_cell.clamp(0.0, 1.0)) {
                ((0, 0), (4, 4))
            } else {
                let lx = rng.gen_range(0..3);
                let ly = rng.gen_range(0..3);
                ((lx, ly), (rng.gen_range(lx + 1..=4), rng.gen_range(ly + 1..=4)))
            };
            let material = draw_material(&mut rng, cfg.conductor);
            shapes.push(Shape::rect(
                material,
                format!("r{row}c{col}"),
                x0 + lo.0 as f64 * q,
                y0 + lo.1 as f64 * q,
                x0 + hi.0 as f64 * q,
                y0 + hi.1 as f64 * q,
            ));
        }
    }
    shapes
}

/// Independent boards for the three planes.
pub fn draw_planes(cfg: RectBoardCfg, tok: ReplayToken) -> PlaneSpace<Vec<Shape>> {
    PlaneSpace::from_fn(|plane: Plane| draw_rect_board(cfg, tok.child(plane.index() as u64)))
}

fn draw_material<R: Rng>(rng: &mut R, conductor: f64) -> Material {
    let u: f64 = rng.gen();
    let c = conductor.clamp(0.0, 1.0);
    if u < c {
        Material::Conductor
    } else if u < c + 0.5 * (1.0 - c) {
        Material::Dielectric
    } else {
        Material::Air
    }
}
