//! Command-line options.
//!
//! Without a subcommand the game starts in the terminal. The `generate`
//! subcommand prints grids as JSON lines instead, for reviewing the content
//! each mode produces.
//!
//! # Examples
//!
//! Play equality mode with a fixed seed, logging to a file:
//!
//! ```text
//! $ math-chompers --mode equality --seed 7 --debug 2>chompers.log
//! ```
//!
//! Print three factors grids for rule 12:
//!
//! ```text
//! $ math-chompers generate --mode factors --rule 12 --count 3
//! {"mode":"factors","rule":12,"cells":[12,5,12,1,...]}
//! ```

use clap::{Parser, Subcommand};

use math_chompers::types::Mode;

/// Eat the numbers that match the rule.
#[derive(Debug, Parser)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Starting mode (multiples, factors, primes, equality, inequality)
    #[arg(short, long, value_parser = parse_mode, default_value = "multiples")]
    pub mode: Mode,

    /// Seed for the random generator (random when omitted)
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Do not ring the terminal bell on wrong picks
    #[arg(long, default_value_t = false)]
    pub no_bell: bool,

    /// Leave the mouse to the terminal (no clicking cells)
    #[arg(long, default_value_t = false)]
    pub no_mouse: bool,

    /// Enable debug messages on stderr
    #[arg(short, long, default_value_t = false, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print generated grids as JSON lines and exit
    Generate(GenerateArgs),
}

#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Mode to generate cells for
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Mode,

    /// Rule number (drawn from the mode's range for every grid when omitted)
    #[arg(short, long)]
    pub rule: Option<i64>,

    /// Number of grids to print
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| {
        format!("unknown mode '{s}' (expected multiples, factors, primes, equality or inequality)")
    })
}

/// Initialise `env_logger`. `RUST_LOG` wins unless `--debug` is given.
pub fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
