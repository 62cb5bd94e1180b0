//! sweep::driver — fill the `k × ratio` heat matrix of best success probabilities.
//!
//! Purpose
//! -------
//! For a fixed total `T`, a list of group counts `ks`, and a grid of ratios
//! `r = m/T`, solve the exact discrete search at every cell and collect the
//! results into an `ndarray::Array2<f64>` (rows = `ks`, columns = ratios)
//! together with per-cell timing and tie counts.
//!
//! Key behaviors
//! -------------
//! - [`budget_for_ratio`] maps a ratio to `m = max(1, round(r·T))`, ties
//!   rounding to even.
//! - [`sweep_cell`] marks `m == 0` and `m ≥ T` as [`CellOutcome::Infeasible`]
//!   (stored as `NaN`) and otherwise runs
//!   [`best_p_for_params`](crate::search::best_p_for_params).
//! - [`run_sweep_with_logger`] iterates `ks` outermost and ratios innermost,
//!   logging one progress record every `progress_every` completed cells
//!   (infeasible cells count), a warning when the sweep leaves the
//!   recommended interactive limits, and a completion record.
//!
//! Invariants & assumptions
//! ------------------------
//! - Cells are independent; concurrency lives inside each cell's search
//!   (`SweepOptions::workers`) so the heat matrix is identical for every
//!   worker count.
//! - Options and the `ks` list are validated before any cell is solved.
//!
//! Downstream usage
//! ----------------
//! - The `heatmap_sweep` binary parses CLI flags into [`SweepOptions`] and
//!   a [`RatioGrid`], calls [`run_sweep`], and writes [`SweepOutcome::heat`].
use std::time::{Duration, Instant};

use ndarray::Array2;
use slog::{Discard, Drain, Logger, info, o, warn};

use crate::{
    search::{
        RECOMMENDED_MAX_GROUPS, RECOMMENDED_MAX_TOTAL,
        configuration::Configuration,
        errors::SearchError,
        options::SearchOptions,
        orchestrator::best_p_for_params,
        params::ProblemParams,
        tolerance::TieTolerance,
    },
    sweep::{
        errors::{SweepError, SweepResult},
        grid::RatioGrid,
    },
};

/// SweepOptions — configuration shared by every cell of a sweep.
///
/// Fields
/// ------
/// - `total`: `usize`
///   Fixed total `T`, at least 1.
/// - `workers`: `usize`
///   Worker threads used inside each cell's search.
/// - `tolerance`: [`TieTolerance`]
///   Tie policy forwarded to the search.
/// - `progress_every`: `usize`
///   Emit a progress record after every this many completed cells,
///   infeasible cells included.
/// - `verbose`: `bool`
///   [`SweepOptions::logger`] returns a terminal logger; otherwise logging
///   is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepOptions {
    pub total: usize,
    pub workers: usize,
    pub tolerance: TieTolerance,
    pub progress_every: usize,
    pub verbose: bool,
}

impl SweepOptions {
    /// Build validated sweep options.
    ///
    /// # Errors
    /// - [`SweepError::InvalidTotal`] when `total == 0`.
    /// - [`SweepError::InvalidProgressInterval`] when `progress_every == 0`.
    /// - [`SweepError::Search`] wrapping [`SearchError::InvalidWorkers`] when
    ///   `workers == 0`.
    pub fn new(
        total: usize, workers: usize, tolerance: TieTolerance, progress_every: usize, verbose: bool,
    ) -> SweepResult<SweepOptions> {
        let opts = SweepOptions { total, workers, tolerance, progress_every, verbose };
        opts.validate()?;
        Ok(opts)
    }

    fn validate(&self) -> SweepResult<()> {
        if self.total == 0 {
            return Err(SweepError::InvalidTotal { total: self.total });
        }
        if self.progress_every == 0 {
            return Err(SweepError::InvalidProgressInterval { every: self.progress_every });
        }
        self.search_options()?;
        Ok(())
    }

    /// Non-blocking terminal logger when `verbose`, otherwise a discarding one.
    pub fn logger(&self) -> Logger {
        if self.verbose { terminal_logger() } else { Logger::root(Discard, o!()) }
    }

    /// Per-cell search options.
    pub fn search_options(&self) -> SweepResult<SearchOptions> {
        Ok(SearchOptions::new(self.tolerance, self.workers)?)
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions {
            total: 30,
            workers: 1,
            tolerance: TieTolerance::default(),
            progress_every: 5,
            verbose: false,
        }
    }
}

/// Result summary of one solved cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStats {
    pub k: usize,
    pub m: usize,
    pub total: usize,
    pub best_p: f64,
    pub n_best: usize,
    pub best_configs: Vec<Configuration>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /// `m == 0` or `m ≥ T`; the heat value is `NaN`.
    Infeasible,
    Solved(CellStats),
}

impl CellOutcome {
    /// Value stored in the heat matrix.
    pub fn heat_value(&self) -> f64 {
        match self {
            CellOutcome::Infeasible => f64::NAN,
            CellOutcome::Solved(stats) => stats.best_p,
        }
    }
}

/// Output of a full sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub ks: Vec<usize>,
    pub ratios: Vec<f64>,
    /// `heat[[i, j]]` is the best `P` for `ks[i]` at `ratios[j]`.
    pub heat: Array2<f64>,
    /// Solved cells in sweep order (row-major).
    pub cells: Vec<CellStats>,
    pub elapsed: Duration,
}

impl SweepOutcome {
    pub fn infeasible_count(&self) -> usize {
        self.heat.iter().filter(|v| v.is_nan()).count()
    }
}

/// budget_for_ratio — marked count for ratio `r` at total `T`.
///
/// Returns `max(1, round(r·T))` with ties rounding to even, so `r = 0`
/// still maps to `m = 1`.
///
/// # Examples
/// ```
/// use ratio_search::sweep::budget_for_ratio;
/// assert_eq!(budget_for_ratio(0.2, 30), 6);
/// assert_eq!(budget_for_ratio(0.0, 30), 1);
/// assert_eq!(budget_for_ratio(0.25, 10), 2);
/// ```
pub fn budget_for_ratio(ratio: f64, total: usize) -> usize {
    let m = (ratio * total as f64).round_ties_even().max(1.0);
    m as usize
}

/// sweep_cell — solve one `(k, m)` cell at the options' total.
///
/// Parameters
/// ----------
/// - `k`: `usize`
///   Group count, at least 1.
/// - `m`: `usize`
///   Marked count. `m == 0` and `m ≥ T` are infeasible and skip the search.
/// - `opts`: `&SweepOptions`
///
/// Errors
/// ------
/// - [`SweepError::Search`] for an invalid `k` or invalid search options.
pub fn sweep_cell(k: usize, m: usize, opts: &SweepOptions) -> SweepResult<CellOutcome> {
    if k == 0 {
        return Err(SearchError::InvalidGroupCount { groups: k }.into());
    }
    if m == 0 || m >= opts.total {
        return Ok(CellOutcome::Infeasible);
    }
    let params = ProblemParams::new(k, m, opts.total)?;
    let search_opts = opts.search_options()?;

    let start = Instant::now();
    let best = best_p_for_params(&params, &search_opts)?;
    let elapsed = start.elapsed();

    let best_p = best.best_p();
    let best_configs = best.into_configs();
    Ok(CellOutcome::Solved(CellStats {
        k,
        m,
        total: opts.total,
        best_p,
        n_best: best_configs.len(),
        best_configs,
        elapsed,
    }))
}

/// run_sweep — sweep with the logger chosen by [`SweepOptions::logger`].
///
/// See [`run_sweep_with_logger`] for the semantics.
pub fn run_sweep(ks: &[usize], ratios: &RatioGrid, opts: &SweepOptions) -> SweepResult<SweepOutcome> {
    run_sweep_with_logger(ks, ratios, opts, &opts.logger())
}

/// run_sweep_with_logger — fill the heat matrix, logging progress to `logger`.
///
/// Errors
/// ------
/// - [`SweepError::NoGroupCounts`] for an empty `ks`.
/// - [`SweepError::Search`] for a zero entry in `ks` or a failing search.
/// - Option validation errors from [`SweepOptions::new`].
pub fn run_sweep_with_logger(
    ks: &[usize], ratios: &RatioGrid, opts: &SweepOptions, logger: &Logger,
) -> SweepResult<SweepOutcome> {
    opts.validate()?;
    if ks.is_empty() {
        return Err(SweepError::NoGroupCounts);
    }
    if let Some(&groups) = ks.iter().find(|&&k| k == 0) {
        return Err(SearchError::InvalidGroupCount { groups }.into());
    }

    let max_k = ks.iter().copied().max().unwrap_or(0);
    if opts.total > RECOMMENDED_MAX_TOTAL || max_k > RECOMMENDED_MAX_GROUPS {
        warn!(logger, "sweep exceeds recommended interactive limits";
            "T" => opts.total, "max_k" => max_k,
            "max_T" => RECOMMENDED_MAX_TOTAL, "max_groups" => RECOMMENDED_MAX_GROUPS);
    }

    let n_cells = ks.len() * ratios.len();
    info!(logger, "starting sweep"; "T" => opts.total, "cells" => n_cells, "workers" => opts.workers);

    let start = Instant::now();
    let mut heat = Array2::from_elem((ks.len(), ratios.len()), f64::NAN);
    let mut cells = Vec::new();
    let mut done = 0usize;
    for (i, &k) in ks.iter().enumerate() {
        for (j, &ratio) in ratios.values().iter().enumerate() {
            let m = budget_for_ratio(ratio, opts.total);
            let outcome = sweep_cell(k, m, opts)?;
            heat[[i, j]] = outcome.heat_value();
            done += 1;
            if done % opts.progress_every == 0 {
                info!(logger, "cell completed";
                    "k" => k, "m" => m, "T" => opts.total, "best_p" => heat[[i, j]],
                    "elapsed_s" => start.elapsed().as_secs_f64(),
                    "progress" => format!("{done}/{n_cells}"));
            }
            if let CellOutcome::Solved(stats) = outcome {
                cells.push(stats);
            }
        }
    }

    let elapsed = start.elapsed();
    info!(logger, "sweep complete";
        "solved" => cells.len(), "infeasible" => n_cells - cells.len(),
        "elapsed_s" => elapsed.as_secs_f64());

    Ok(SweepOutcome { ks: ks.to_vec(), ratios: ratios.values().to_vec(), heat, cells, elapsed })
}

/// Non-blocking terminal logger.
pub fn terminal_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!())
}
