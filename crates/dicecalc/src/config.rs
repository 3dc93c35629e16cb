//! Application configuration from CLI arguments.

use clap::Parser;

/// DiceCalc-rs — exact dice-sum distribution calculator.
///
/// Computes, for `num` dice with `faces` faces each, the exact number of
/// ordered outcomes producing every achievable total.
#[derive(Parser, Debug)]
#[command(name = "dicecalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Faces per die.
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..),
        required_unless_present = "completion"
    )]
    pub faces: Option<u32>,

    /// Number of dice.
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..),
        required_unless_present = "completion"
    )]
    pub num: Option<u32>,

    /// Engine to use: seq, par, or all.
    #[arg(long, default_value = "par")]
    pub algo: String,

    /// Print the entire distribution instead of only the maximum count.
    #[arg(short, long)]
    pub full: bool,

    /// Verbose output (never truncates large counts).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path for the full distribution.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Worker count for the parallel engine (0 = all available cores).
    #[arg(long, default_value = "0")]
    pub workers: usize,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
