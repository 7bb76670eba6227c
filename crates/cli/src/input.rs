//! JSON board description.
//!
//! ```json
//! {
//!   "params": { "metal_res": 0.5, "lmin": 8 },
//!   "planes": {
//!     "xy": [{ "material": "conductor", "name": "trace",
//!              "points": [[0, 0], [10, 0], [10, 2], [0, 2]] }],
//!     "zx": [{ "material": { "epsilon": 4.4 }, "points": [[0, 0], [10, 0], [10, 1], [0, 1]] }]
//!   },
//!   "fixed": { "z": [0.0, 1.6] }
//! }
//! ```

use anyhow::{Context, Result};
use fdtdmesh::api::{Axis, AxisSpace, GlobalParams, Material, Plane, PlaneSpace, Shape};
use fdtdmesh::geom::Point;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardFile {
    #[serde(default)]
    pub params: ParamsDto,
    #[serde(default)]
    pub planes: PlanesDto,
    #[serde(default)]
    pub fixed: FixedDto,
}

/// Every field falls back to `GlobalParams::default()`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsDto {
    pub metal_res: Option<f64>,
    pub substrate_res: Option<f64>,
    pub proximity_limit: Option<f64>,
    pub smoothness: Option<f64>,
    pub lambda: Option<f64>,
    pub lmin: Option<usize>,
    pub dmax: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanesDto {
    #[serde(default)]
    pub yz: Vec<PolygonDto>,
    #[serde(default)]
    pub zx: Vec<PolygonDto>,
    #[serde(default)]
    pub xy: Vec<PolygonDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedDto {
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(default)]
    pub y: Vec<f64>,
    #[serde(default)]
    pub z: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolygonDto {
    pub material: MaterialDto,
    #[serde(default)]
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// A material name, or the physical properties it is deduced from.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MaterialDto {
    Named(MaterialName),
    Properties {
        #[serde(default = "one")]
        epsilon: f64,
        #[serde(default = "one")]
        mue: f64,
        #[serde(default)]
        kappa: f64,
    },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialName {
    Conductor,
    Dielectric,
    Air,
}

fn one() -> f64 {
    1.0
}

impl MaterialDto {
    pub fn material(&self) -> Material {
        match *self {
            MaterialDto::Named(MaterialName::Conductor) => Material::Conductor,
            MaterialDto::Named(MaterialName::Dielectric) => Material::Dielectric,
            MaterialDto::Named(MaterialName::Air) => Material::Air,
            MaterialDto::Properties {
                epsilon,
                mue,
                kappa,
            } => Material::deduce(epsilon, mue, kappa),
        }
    }
}

impl ParamsDto {
    pub fn resolve(&self) -> GlobalParams {
        let d = GlobalParams::default();
        GlobalParams {
            metal_res: self.metal_res.unwrap_or(d.metal_res),
            substrate_res: self.substrate_res.unwrap_or(d.substrate_res),
            proximity_limit: self.proximity_limit.unwrap_or(d.proximity_limit),
            smoothness: self.smoothness.unwrap_or(d.smoothness),
            lambda: self.lambda.unwrap_or(d.lambda),
            lmin: self.lmin.unwrap_or(d.lmin),
            dmax: self.dmax.unwrap_or(d.dmax),
        }
    }
}

impl BoardFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn shapes(&self) -> PlaneSpace<Vec<Shape>> {
        PlaneSpace::from_fn(|plane| {
            let polygons = match plane {
                Plane::YZ => &self.planes.yz,
                Plane::ZX => &self.planes.zx,
                Plane::XY => &self.planes.xy,
            };
            polygons
                .iter()
                .map(|p| {
                    Shape::new(
                        p.material.material(),
                        p.name.clone(),
                        p.points.iter().map(|[x, y]| Point::new(*x, *y)).collect(),
                    )
                })
                .collect()
        })
    }

    pub fn fixed(&self) -> AxisSpace<Vec<f64>> {
        AxisSpace::from_fn(|axis| match axis {
            Axis::X => self.fixed.x.clone(),
            Axis::Y => self.fixed.y.clone(),
            Axis::Z => self.fixed.z.clone(),
        })
    }

    pub fn polygon_count(&self) -> usize {
        self.planes.yz.len() + self.planes.zx.len() + self.planes.xy.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_deduced_materials() {
        let doc = r#"{
            "params": { "lmin": 4 },
            "planes": {
                "xy": [
                    { "material": "conductor", "name": "t", "points": [[0,0],[1,0],[1,1]] },
                    { "material": { "epsilon": 4.4 }, "points": [[0,0],[2,0],[2,2]] },
                    { "material": { "kappa": 5.8e7 }, "points": [[0,0],[3,0],[3,3]] },
                    { "material": {}, "points": [[0,0],[4,0],[4,4]] }
                ]
            },
            "fixed": { "z": [0.5] }
        }"#;
        let board: BoardFile = serde_json::from_str(doc).unwrap();
        let shapes = board.shapes();
        let got: Vec<Material> = shapes[Plane::XY].iter().map(|s| s.material).collect();
        assert_eq!(
            got,
            vec![Material::Conductor, Material::Dielectric, Material::Conductor, Material::Air]
        );
        assert!(shapes[Plane::YZ].is_empty());
        assert_eq!(board.fixed()[Axis::Z], vec![0.5]);
        let params = board.params.resolve();
        assert_eq!(params.lmin, 4);
        assert_eq!(params.dmax, GlobalParams::default().dmax);
        assert_eq!(board.polygon_count(), 4);
    }

    #[test]
    fn rejects_unknown_fields() {
        let doc = r#"{ "params": { "resolution": 1.0 } }"#;
        assert!(serde_json::from_str::<BoardFile>(doc).is_err());
    }
}
