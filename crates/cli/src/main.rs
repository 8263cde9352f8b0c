use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rodmaze::fixtures::{self, FIXTURES};
use rodmaze::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod record;

use record::SolveRecord;

#[derive(Parser)]
#[command(name = "rodmaze")]
#[command(about = "Solve sliding-rod mazes")]
struct Cmd {
    /// Stop each search after this many node expansions
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Also run the exhaustive BFS and report the true optimum
    #[arg(long, global = true)]
    optimum: bool,

    /// Write results as JSON (plus a provenance sidecar) to this file
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the built-in reference mazes
    Fixtures {
        /// Only this fixture (default: all)
        #[arg(long)]
        name: Option<String>,
    },
    /// Solve seeded random grids
    Random {
        #[arg(long, default_value_t = 10)]
        rows: usize,
        #[arg(long, default_value_t = 10)]
        cols: usize,
        #[arg(long, default_value_t = 0.2)]
        blocked_ratio: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// Print version and git revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = SearchCfg {
        max_expansions: cmd.max_expansions,
    };
    match cmd.action {
        Action::Fixtures { name } => run_fixtures(name, cfg, cmd.optimum, cmd.out.as_deref()),
        Action::Random {
            rows,
            cols,
            blocked_ratio,
            seed,
            count,
        } => {
            let rcfg = random_grid_cfg(rows, cols, blocked_ratio)?;
            run_random(rcfg, seed, count, cfg, cmd.optimum, cmd.out.as_deref())
        }
        Action::Report => report(),
    }
}

fn random_grid_cfg(rows: usize, cols: usize, blocked_ratio: f64) -> Result<RandomGridCfg> {
    if !(0.0..=1.0).contains(&blocked_ratio) {
        bail!("--blocked-ratio must be a number in [0, 1], got {blocked_ratio}");
    }
    if rows < 3 || cols < 3 {
        bail!("random grids need at least 3 rows and 3 columns, got {rows}x{cols}");
    }
    Ok(RandomGridCfg {
        rows,
        cols,
        blocked_ratio,
        clear_corners: true,
    })
}

fn run_fixtures(
    name: Option<String>,
    cfg: SearchCfg,
    optimum: bool,
    out: Option<&Path>,
) -> Result<()> {
    let selected: Vec<_> = match &name {
        Some(n) => match fixtures::by_name(n) {
            Some(fx) => vec![fx],
            None => {
                let known: Vec<_> = FIXTURES.iter().map(|f| f.name).collect();
                bail!("unknown fixture {n:?}; known: {}", known.join(", "));
            }
        },
        None => FIXTURES.iter().collect(),
    };
    let mut records = Vec::with_capacity(selected.len());
    for fx in selected {
        let grid = fx
            .grid()
            .with_context(|| format!("parsing fixture {}", fx.name))?;
        let rec = solve_one(fx.name, &grid, cfg, optimum)?;
        if rec.moves != fx.expected_moves {
            tracing::warn!(
                name = fx.name,
                moves = rec.moves,
                expected = fx.expected_moves,
                "fixture result differs from reference"
            );
        }
        records.push(rec);
    }
    if let Some(out) = out {
        write_records(
            out,
            &records,
            provenance::Payload {
                command: "fixtures",
                params: serde_json::json!({
                    "name": name,
                    "max_expansions": cfg.max_expansions,
                }),
            },
        )?;
    }
    Ok(())
}

fn run_random(
    rcfg: RandomGridCfg,
    seed: u64,
    count: u64,
    cfg: SearchCfg,
    optimum: bool,
    out: Option<&Path>,
) -> Result<()> {
    let mut records = Vec::with_capacity(count as usize);
    for index in 0..count {
        let grid = draw_grid(rcfg, ReplayToken::new(seed, index));
        tracing::debug!(seed, index, "grid\n{grid}");
        records.push(solve_one(format!("random-{seed}-{index}"), &grid, cfg, optimum)?);
    }
    let solved = records.iter().filter(|r| r.moves != NO_SOLUTION).count();
    tracing::info!(count, solved, "random grids done");
    if let Some(out) = out {
        write_records(
            out,
            &records,
            provenance::Payload {
                command: "random",
                params: serde_json::json!({
                    "rows": rcfg.rows,
                    "cols": rcfg.cols,
                    "blocked_ratio": rcfg.blocked_ratio,
                    "seed": seed,
                    "count": count,
                    "max_expansions": cfg.max_expansions,
                }),
            },
        )?;
    }
    Ok(())
}

fn solve_one(
    name: impl Into<String>,
    grid: &Grid,
    cfg: SearchCfg,
    optimum: bool,
) -> Result<SolveRecord> {
    let name = name.into();
    let solution = solve_with_cfg(grid, DEFAULT_START, cfg)
        .with_context(|| format!("solving {name}"))?;
    let mut rec = SolveRecord::new(name, grid, &solution);
    if optimum {
        rec.optimum = Some(record::optimum(grid, DEFAULT_START)?);
    }
    tracing::info!(
        name = %rec.name,
        rows = rec.rows,
        cols = rec.cols,
        moves = rec.moves,
        finish = rec.finish,
        optimum = rec.optimum,
        expanded = rec.expanded,
        "solved"
    );
    Ok(rec)
}

fn write_records(
    out: &Path,
    records: &[SolveRecord],
    payload: provenance::Payload,
) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(records)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote results");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "solver_version": rodmaze::VERSION,
        "fixtures": FIXTURES.iter().map(|f| f.name).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
