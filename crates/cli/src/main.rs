mod input;
mod output;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fdtdmesh::api::{GlobalParams, Mesher, TracingObserver};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use input::BoardFile;
use output::Format;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Orthogonal FDTD mesh-grid generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Mesh a JSON board description and write one row per meshline
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// Print the meshline policies of every axis as JSON
    Policies {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// Print version, code revision and default parameters
    Report,
}

/// Command-line values win over the ones in the board file.
#[derive(Args, Debug, Default, Clone)]
struct ParamOverrides {
    #[arg(long)]
    metal_res: Option<f64>,
    #[arg(long)]
    substrate_res: Option<f64>,
    #[arg(long)]
    proximity_limit: Option<f64>,
    #[arg(long)]
    smoothness: Option<f64>,
    #[arg(long)]
    lambda: Option<f64>,
    #[arg(long)]
    lmin: Option<usize>,
    #[arg(long)]
    dmax: Option<f64>,
}

impl ParamOverrides {
    fn apply(&self, p: GlobalParams) -> GlobalParams {
        GlobalParams {
            metal_res: self.metal_res.unwrap_or(p.metal_res),
            substrate_res: self.substrate_res.unwrap_or(p.substrate_res),
            proximity_limit: self.proximity_limit.unwrap_or(p.proximity_limit),
            smoothness: self.smoothness.unwrap_or(p.smoothness),
            lambda: self.lambda.unwrap_or(p.lambda),
            lmin: self.lmin.unwrap_or(p.lmin),
            dmax: self.dmax.unwrap_or(p.dmax),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            format,
            overrides,
        } => run(&input, &out, format, &overrides),
        Action::Policies { input, overrides } => policies(&input, &overrides),
        Action::Report => report(),
    }
}

/// Load, validate and mesh a board file.
fn mesh(input: &Path, overrides: &ParamOverrides) -> Result<Mesher> {
    let board = BoardFile::load(input)?;
    let params = overrides.apply(board.params.resolve());
    params
        .validate()
        .with_context(|| format!("invalid parameters for {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        polygons = board.polygon_count(),
        "mesh"
    );
    let mut mesher = Mesher::new(params, board.shapes(), board.fixed());
    mesher.do_all_step(&mut TracingObserver);
    let unsolved = mesher.count_unsolved();
    if unsolved > 0 {
        tracing::warn!(unsolved, "conflicts left unsolved");
    }
    Ok(mesher)
}

fn run(input: &Path, out: &Path, format: Format, overrides: &ParamOverrides) -> Result<()> {
    let mesher = mesh(input, overrides)?;
    let mut df = output::grid_frame(&mesher).context("building grid table")?;
    output::write_frame(&mut df, out, format)?;

    let stats = provenance::GridStats::of(&mesher);
    let sidecar = provenance::write_sidecar(out, input, mesher.params(), &stats)?;
    tracing::info!(
        out = %out.display(),
        rows = df.height(),
        sidecar = %sidecar.display(),
        "grid written"
    );
    Ok(())
}

fn policies(input: &Path, overrides: &ParamOverrides) -> Result<()> {
    let mesher = mesh(input, overrides)?;
    let rows = output::policy_rows(&mesher);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": fdtdmesh::VERSION,
        "params": provenance::params_json(&GlobalParams::default()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
