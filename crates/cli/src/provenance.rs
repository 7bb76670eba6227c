//! `<grid>.provenance.json` sidecars: which code, input and parameters
//! produced a grid file, and what the grid looks like.

use anyhow::{Context, Result};
use fdtdmesh::api::{Axis, GlobalParams, Mesher};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Line count per axis and conflicts left unsolved after a full run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridStats {
    pub lines: BTreeMap<&'static str, usize>,
    pub unsolved_conflicts: usize,
}

impl GridStats {
    pub fn of(mesher: &Mesher) -> Self {
        Self {
            lines: Axis::ALL
                .iter()
                .map(|a| (a.name(), mesher.meshlines(*a).len()))
                .collect(),
            unsolved_conflicts: mesher.count_unsolved(),
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    input: String,
    params: Value,
    stats: &'a GridStats,
    outputs: Vec<String>,
}

pub fn params_json(p: &GlobalParams) -> Value {
    json!({
        "metal_res": p.metal_res,
        "substrate_res": p.substrate_res,
        "proximity_limit": p.proximity_limit,
        "smoothness": p.smoothness,
        "lambda": p.lambda,
        "lmin": p.lmin,
        "dmax": p.dmax,
    })
}

/// Record how `grid` was produced; returns the sidecar path.
#[track_caller]
pub fn write_sidecar(
    grid: &Path,
    input: &Path,
    params: &GlobalParams,
    stats: &GridStats,
) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        version: fdtdmesh::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        input: input.display().to_string(),
        params: params_json(params),
        stats,
        outputs: vec![grid.display().to_string()],
    };
    let path = provenance_path(grid);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing sidecar {}", path.display()))?;
    Ok(path)
}

/// `out/grid.csv` -> `out/grid.provenance.json`.
pub fn provenance_path(grid: &Path) -> PathBuf {
    grid.with_extension("provenance.json")
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
