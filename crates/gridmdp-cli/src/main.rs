//! `gridmdp`: solve a grid-world file with value iteration and print the
//! initial and converged utilities.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use gridmdp_engine::{SolverConfig, ValueIteration};
use gridmdp_space::GridWorld;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid-world description: discount, living cost, drift vector, then
    /// one grid row per line (`*` open, `x` wall, a number for an exit).
    path: PathBuf,

    /// Maximum error allowed in the utility of any state.
    #[arg(long, default_value_t = SolverConfig::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Give up after this many sweeps.
    #[arg(long)]
    max_sweeps: Option<u64>,

    /// Split each sweep across this many threads (0 = one per core).
    #[arg(long)]
    workers: Option<usize>,

    /// Reject drift vectors that do not sum to one.
    #[arg(long)]
    strict_drift: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            epsilon: self.epsilon,
            max_sweeps: self.max_sweeps,
            workers: self.workers,
            require_normalized_drift: self.strict_drift,
        }
    }
}

/// Solve `grid` and write the console report to `out`.
///
/// The initial grid is written before iterating so it is visible even when
/// the solver fails.
fn report(grid: GridWorld, config: SolverConfig, out: &mut impl Write) -> anyhow::Result<u64> {
    writeln!(out, "Initial grid configuration:")?;
    writeln!(out, "{grid}")?;

    let mut solver = ValueIteration::new(grid, config).context("invalid solver settings")?;
    let outcome = solver.run().context("value iteration failed")?;

    writeln!(out, "Iteration #: {}", outcome.sweeps)?;
    writeln!(out, "Converged state value for each grid:")?;
    writeln!(out, "{}", solver.into_grid())?;
    Ok(outcome.sweeps)
}

/// Read and parse the grid file at `path`.
fn load(path: &Path) -> anyhow::Result<GridWorld> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let grid: GridWorld = text
        .parse()
        .with_context(|| format!("failed to load grid from {}", path.display()))?;
    log::info!(
        "loaded {}x{} grid from {}",
        grid.nrows(),
        grid.ncols(),
        path.display()
    );
    Ok(grid)
}

/// Load `path` and write its report to `out`. Nothing is written if the
/// file cannot be loaded.
fn run(path: &Path, config: SolverConfig, out: &mut impl Write) -> anyhow::Result<u64> {
    let grid = load(path)?;
    report(grid, config, out)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args.path, args.solver_config(), &mut out)?;
    out.flush()?;
    Ok(())
}
