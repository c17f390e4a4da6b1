//! Command-line surface. The `Cli` struct mirrors the CLI grammar
//! exactly: two required positional files plus the optional world/catalog
//! overrides and the knobs that influence one run's outcome.

use std::path::PathBuf;

use clap::Parser;

/// Run a two-character LastBreach post-shelter survival simulation.
#[derive(Debug, Parser)]
#[command(name = "lastbreach-runner", version, about)]
pub struct Cli {
    /// First character's `.lbp` source file.
    pub character_a: PathBuf,

    /// Second character's `.lbp` source file.
    pub character_b: PathBuf,

    /// Number of simulated days to run.
    #[arg(long, default_value_t = 1)]
    pub days: i64,

    /// PRNG seed. Defaults to the system clock when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// World file (`.lbw`). Falls back to `./world.lbw` if present, else
    /// the built-in default world.
    #[arg(long)]
    pub world: Option<PathBuf>,

    /// Task catalog file (`.lbc`). Falls back to `./catalog.lbc` if
    /// present, else the built-in default catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Raise the tracing filter to `debug`. `RUST_LOG` takes precedence
    /// over this flag if set.
    #[arg(long)]
    pub verbose: bool,
}
