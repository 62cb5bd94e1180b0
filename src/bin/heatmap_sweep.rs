#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use slog::info;

use ratio_search::search::TieTolerance;
use ratio_search::sweep::{
    RatioGrid, SweepOptions, SweepOutcome, parse_group_counts, run_sweep_with_logger,
};

#[derive(Parser, Debug)]
#[command(
    name = "heatmap_sweep",
    version,
    about = "Best success probability over group counts and marked ratios"
)]
struct Cli {
    /// Total number of items T
    #[arg(short = 'T', long, default_value_t = 30)]
    total: usize,
    /// Comma-separated group counts
    #[arg(long, default_value = "2,3,4")]
    ks: String,
    /// Ratio grid m/T as start:stop:steps or a comma list
    #[arg(long, default_value = "0.2:0.8:13")]
    ratios: RatioGrid,
    /// Worker threads per cell
    #[arg(long, default_value_t = 1)]
    nproc: usize,
    /// Tie tolerance on P
    #[arg(long)]
    tol: Option<f64>,
    /// Log a progress record every N completed cells
    #[arg(long, default_value_t = 5)]
    progress_every: usize,
    /// Output file for the heat grid
    #[arg(long, default_value = "heatmap_model3.csv")]
    out: PathBuf,
    /// Suppress progress output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ks = parse_group_counts(&cli.ks)?;
    let tolerance = match cli.tol {
        Some(eps) => TieTolerance::new(eps)?,
        None => TieTolerance::default(),
    };
    let opts = SweepOptions::new(cli.total, cli.nproc, tolerance, cli.progress_every, !cli.quiet)?;
    let logger = opts.logger();

    let outcome = run_sweep_with_logger(&ks, &cli.ratios, &opts, &logger)?;
    write_heat_grid(&cli.out, &outcome)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;

    info!(logger, "wrote heat grid";
        "path" => cli.out.display().to_string(),
        "rows" => outcome.ks.len(), "cols" => outcome.ratios.len());
    Ok(())
}

/// Header `k,<ratio>...`, then one row per group count. Infeasible cells
/// are written as `nan`.
fn write_heat_grid(path: &Path, outcome: &SweepOutcome) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header: Vec<String> = outcome.ratios.iter().map(|r| format!("{r:.4}")).collect();
    writeln!(w, "k,{}", header.join(","))?;
    for (k, row) in outcome.ks.iter().zip(outcome.heat.rows()) {
        let cells: Vec<String> = row
            .iter()
            .map(|v| if v.is_nan() { "nan".to_string() } else { format!("{v:.12}") })
            .collect();
        writeln!(w, "{k},{}", cells.join(","))?;
    }
    w.flush()?;
    Ok(())
}
