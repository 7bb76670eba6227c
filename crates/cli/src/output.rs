//! Grid and policy tables.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fdtdmesh::api::{Axis, Mesher, Normal, Origin, Plane, Policy};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Parquet,
}

/// One row per meshline: `axis` (x/y/z) and `coord`, axes in order.
pub fn grid_frame(mesher: &Mesher) -> PolarsResult<DataFrame> {
    let mut axes: Vec<&str> = Vec::new();
    let mut coords: Vec<f64> = Vec::new();
    for axis in Axis::ALL {
        let lines = mesher.meshlines(axis);
        axes.extend(std::iter::repeat(axis.name()).take(lines.len()));
        coords.extend(lines);
    }
    df!("axis" => axes, "coord" => coords)
}

pub fn write_frame(df: &mut DataFrame, out: &Path, format: Format) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        Format::Csv => {
            let mut file = file;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("writing csv {}", out.display()))?;
        }
        Format::Parquet => {
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing parquet {}", out.display()))?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PolicyRow {
    pub axis: &'static str,
    pub plane: &'static str,
    pub coord: f64,
    pub policy: &'static str,
    pub normal: &'static str,
    pub enabled: bool,
    pub res_factor: f64,
    pub d: f64,
    pub origin: String,
    pub lines: usize,
}

pub fn policy_rows(mesher: &Mesher) -> Vec<PolicyRow> {
    let mut rows = Vec::new();
    for axis in Axis::ALL {
        for (plane, p) in mesher.policies(axis) {
            rows.push(PolicyRow {
                axis: axis.name(),
                plane: plane_name(plane),
                coord: p.coord,
                policy: match p.policy {
                    Policy::OneLine => "oneline",
                    Policy::Halfs => "halfs",
                    Policy::Thirds => "thirds",
                },
                normal: match p.normal {
                    Normal::Min => "min",
                    Normal::Max => "max",
                    Normal::None => "none",
                },
                enabled: p.is_enabled,
                res_factor: p.res_factor,
                d: p.d,
                origin: p
                    .origins
                    .iter()
                    .map(|o| match o {
                        Origin::Conflict(c) => format!("conflict:{}", c.0),
                        Origin::Edge(e) => format!("edge:{}", e.0),
                        Origin::Fixed => "fixed".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                lines: p.meshlines.len(),
            });
        }
    }
    rows
}

pub fn plane_name(plane: Plane) -> &'static str {
    match plane {
        Plane::YZ => "yz",
        Plane::ZX => "zx",
        Plane::XY => "xy",
    }
}
