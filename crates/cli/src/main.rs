use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::SubscriberBuilder;

use cakeplan::partition::{plan_cuts, InteriorOracle, SearchCfg};
use cakeplan::{Boundary, Polygon, Vec2};

mod report;

#[derive(Parser)]
#[command(name = "cakeplan")]
#[command(about = "Equal-area cake partition planner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search for a cut plan and print or write it as JSON
    Solve {
        /// Cake file: {"vertices": [[x, y], ...]}
        #[arg(long)]
        cake: PathBuf,
        /// Number of final pieces
        #[arg(long)]
        children: usize,
        /// Probe lines per axis
        #[arg(long, default_value_t = 100)]
        resolution: usize,
        /// Absolute area slack per final piece
        #[arg(long, default_value_t = 0.5)]
        tolerance: f64,
        /// Abort the search after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Write the plan here instead of stdout (adds a .report.json sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print area, perimeter, and bounds of a cake file
    Inspect {
        #[arg(long)]
        cake: PathBuf,
    },
}

#[derive(Deserialize)]
struct CakeFile {
    vertices: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct PlanOut {
    children: usize,
    feasible: bool,
    chords: Vec<ChordOut>,
}

#[derive(Serialize)]
struct ChordOut {
    a: [f64; 2],
    b: [f64; 2],
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            cake,
            children,
            resolution,
            tolerance,
            timeout_ms,
            out,
        } => solve(&cake, children, resolution, tolerance, timeout_ms, out),
        Action::Inspect { cake } => inspect(&cake),
    }
}

fn load_cake(path: &Path) -> Result<Polygon> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading cake file {}", path.display()))?;
    let file: CakeFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing cake file {}", path.display()))?;
    let verts = file
        .vertices
        .iter()
        .map(|&[x, y]| Vec2::new(x, y))
        .collect();
    Polygon::new(verts).context("cake polygon is degenerate")
}

fn solve(
    cake_path: &Path,
    children: usize,
    resolution: usize,
    tolerance: f64,
    timeout_ms: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let cake = load_cake(cake_path)?;
    let cfg = SearchCfg {
        sweep_resolution: resolution,
        area_tolerance: tolerance,
        deadline: timeout_ms.map(|ms| Instant::now() + Duration::from_millis(ms)),
        ..SearchCfg::default()
    };
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    tracing::info!(children, resolution, tolerance, area = cake.area(), "solve");

    let started = Instant::now();
    let plan = plan_cuts(&cake, children, &oracle, &cfg)?;
    let elapsed = started.elapsed();

    let doc = PlanOut {
        children,
        feasible: plan.is_some(),
        chords: plan
            .as_ref()
            .map(|p| {
                p.chords
                    .iter()
                    .map(|c| ChordOut {
                        a: [c.a.x, c.a.y],
                        b: [c.b.x, c.b.y],
                    })
                    .collect()
            })
            .unwrap_or_default(),
    };
    if doc.feasible {
        tracing::info!(chords = doc.chords.len(), ?elapsed, "plan found");
    } else {
        tracing::warn!(?elapsed, "infeasible at this resolution");
    }

    let rendered = serde_json::to_string_pretty(&doc)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing plan to {}", path.display()))?;
            report::write_sidecar(
                &path,
                report::Params {
                    cake: cake_path.display().to_string(),
                    children,
                    resolution,
                    tolerance,
                    feasible: doc.feasible,
                    chords: doc.chords.len(),
                },
            )?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn inspect(cake_path: &Path) -> Result<()> {
    let cake = load_cake(cake_path)?;
    let b = cake.bounds();
    let doc = serde_json::json!({
        "vertices": cake.verts().len(),
        "area": cake.area(),
        "perimeter": Boundary::of(&cake).perimeter(),
        "bounds": { "min": [b.min.x, b.min.y], "max": [b.max.x, b.max.y] },
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
