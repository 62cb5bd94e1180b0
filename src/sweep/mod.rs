//! sweep — parametric heat-matrix driver over `k` and `m/T`.
//!
//! Purpose
//! -------
//! Map a list of group counts and a grid of marked ratios at a fixed total
//! `T` to a matrix of best success probabilities, with per-cell timing and
//! tie counts, for rendering or export by the caller.
//!
//! Key behaviors
//! -------------
//! - [`RatioGrid`] parses `start:stop:steps` ranges and explicit lists;
//!   [`parse_group_counts`] parses `k` lists.
//! - [`run_sweep`] / [`run_sweep_with_logger`] solve every cell and fill
//!   [`SweepOutcome::heat`], with `NaN` for infeasible cells.
//!
//! Conventions
//! -----------
//! - Progress is reported through `slog`; pass a logger explicitly or set
//!   [`SweepOptions::verbose`] for a terminal drain.
//! - No file output happens here; the `heatmap_sweep` binary writes the
//!   delimited grid.

pub mod driver;
pub mod errors;
pub mod grid;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::driver::{
    CellOutcome, CellStats, SweepOptions, SweepOutcome, budget_for_ratio, run_sweep,
    run_sweep_with_logger, sweep_cell, terminal_logger,
};
pub use self::errors::{SweepError, SweepResult};
pub use self::grid::{RatioGrid, parse_group_counts};
