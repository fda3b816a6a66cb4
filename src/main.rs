//! Keypad Calculator CLI
//!
//! Replays a CSV key script through the calculator engine and prints the
//! display after every key as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- keys.csv > transcript.csv
//! cargo run -- --final-only --decimal-policy require-leading-digit keys.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use keypad_calc::{DecimalPointPolicy, EngineConfig, ErrorDisplay, Result, ScriptRunner};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

/// Replays keypad scripts through a two-operand calculator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV key script with a `key` column.
    input: PathBuf,

    /// Whether `.` may start an operand.
    #[arg(long, value_enum, default_value_t = DecimalPointPolicy::AllowLeading)]
    decimal_policy: DecimalPointPolicy,

    /// Show `Error` instead of ignoring operands that fail to parse.
    #[arg(long)]
    show_errors: bool,

    /// Print only the final display instead of the full transcript.
    #[arg(long)]
    final_only: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let error_display = if cli.show_errors {
        ErrorDisplay::Show
    } else {
        ErrorDisplay::Silent
    };
    let config = EngineConfig::new(cli.decimal_policy, error_display);
    debug!("Starting with {:?}", config);

    let file = File::open(&cli.input)?;
    let reader = BufReader::new(file);

    let mut runner = ScriptRunner::new(config);
    runner.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    if cli.final_only {
        runner.write_final(handle)?;
    } else {
        runner.write_output(handle)?;
    }

    Ok(())
}
