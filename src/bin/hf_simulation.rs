//! Hf simulation runner
//!
//! Builds a configuration from the command line, runs the recurrence and
//! reports the EP statistics and reset events.

use std::process::ExitCode;

use clap::Parser;
use hfsim::core::constants::hf_constants;
use hfsim::{HfError, SimulationConfig, SimulationResult, Simulator, Summary, TracingObserver};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "hf_simulation")]
#[command(version, about = "Hf divergence simulation with hard reset", long_about = None)]
struct Cli {
    /// Baseline offset of the EP signal
    #[arg(long, default_value_t = hf_constants::SCIENCE_FACTOR, allow_negative_numbers = true)]
    science_factor: f64,

    /// Hf before the first step
    #[arg(long, default_value_t = hf_constants::INITIAL_HF, allow_negative_numbers = true)]
    initial_hf: f64,

    /// Multiplicative growth per step
    #[arg(long, default_value_t = hf_constants::GROWTH_RATE, allow_negative_numbers = true)]
    growth_rate: f64,

    /// Raw growth strictly above this value triggers a reset
    #[arg(long, default_value_t = hf_constants::RESET_THRESHOLD, allow_negative_numbers = true)]
    reset_threshold: f64,

    /// Value Hf is forced to on reset
    #[arg(long, default_value_t = hf_constants::RESET_VALUE, allow_negative_numbers = true)]
    reset_value: f64,

    /// Number of steps to simulate
    #[arg(long, default_value_t = hf_constants::STEP_COUNT, allow_negative_numbers = true)]
    steps: i64,

    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::builder()
            .science_factor(self.science_factor)
            .initial_hf(self.initial_hf)
            .growth_rate(self.growth_rate)
            .reset_threshold(self.reset_threshold)
            .reset_value(self.reset_value)
            .step_count(self.steps)
            .build()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a SimulationConfig,
    ep_summary: Summary<f64>,
    hf_summary: Summary<f64>,
    result: &'a SimulationResult,
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks DEBUG over INFO.
fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(filter).init();
}

/// Configuration errors exit with 2, anything else with 1.
fn exit_code(error: &HfError) -> u8 {
    match error {
        HfError::InvalidConfiguration { .. } => 2,
        _ => 1,
    }
}

fn run(cli: &Cli) -> Result<String, HfError> {
    let config = cli.config();
    debug!(%config, "starting simulation");

    let result = Simulator::with_observer(TracingObserver).run(&config)?;
    debug!(steps = result.len(), resets = result.reset_events().len(), "simulation finished");

    if cli.json {
        let report = JsonReport {
            config: &config,
            ep_summary: result.ep_summary()?,
            hf_summary: result.hf_summary()?,
            result: &result,
        };
        return serde_json::to_string_pretty(&report)
            .map_err(|e| HfError::Serialization { message: e.to_string() });
    }

    Ok(result.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
