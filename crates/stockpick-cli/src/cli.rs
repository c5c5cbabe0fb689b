//! CLI argument definitions for stockpick.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `evaluate` | Evaluate a ticker and print the recommendation |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Per-provider-call timeout in ms |
//! | `--mock` | `false` | Use deterministic offline providers |
//!
//! # Examples
//!
//! ```bash
//! # Evaluate with the default 70/30 weighting
//! stockpick evaluate AAPL
//!
//! # Custom weights; a pair that does not sum to 1 is rescaled
//! stockpick evaluate msft --weight-fundamentals 0.5 --weight-sentiment 0.25
//!
//! # Machine-readable output
//! stockpick evaluate AAPL --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stockpick - weighted stock evaluation CLI
///
/// Combines a fundamentals quality score, earnings sentiment, and a DCF
/// intrinsic-value estimate into one recommendation.
#[derive(Debug, Parser)]
#[command(
    name = "stockpick",
    author,
    version,
    about = "Weighted stock evaluation CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-provider-call timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Use deterministic offline providers instead of live APIs.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary lines.
    Text,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one ticker and print the weighted recommendation.
    ///
    /// # Examples
    ///
    ///   stockpick evaluate AAPL
    ///   stockpick evaluate aapl --weight-fundamentals 0.6 --weight-sentiment 0.4
    Evaluate(EvaluateArgs),
}

/// Arguments for the `evaluate` command.
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Ticker symbol (case-insensitive, normalized to uppercase).
    pub ticker: String,

    /// Weight given to the fundamentals quality score, in [0, 1].
    #[arg(long, default_value_t = 0.7)]
    pub weight_fundamentals: f64,

    /// Weight given to earnings sentiment, in [0, 1].
    #[arg(long, default_value_t = 0.3)]
    pub weight_sentiment: f64,
}
