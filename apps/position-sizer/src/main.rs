//! Position Sizer Binary
//!
//! Sizes a single trade from the command line.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p position-sizer -- --balance 50000 --risk 1 --entry 100 --stop 95 --ratio 1:3
//! cargo run -p position-sizer -- --entry 95 --stop 100 --json
//! cargo run -p position-sizer -- --presets
//! ```
//!
//! Omitted fields fall back to the configured form defaults. Pass `--ratio ""`
//! to size without a profit target.
//!
//! # Environment Variables
//!
//! - `POSITION_SIZER_CONFIG`: Config file path (default: position-sizer.yaml when present)
//! - `RUST_LOG`: Log filter (default: observability.logging.level)

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use position_sizer::calculator::{Calculator, CalculatorForm, FieldKey, ResultView, risk_helper};
use position_sizer::config::{Config, load_config};
use position_sizer::telemetry::init_tracing;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "POSITION_SIZER_CONFIG")]
    config: Option<String>,

    /// Account balance in dollars (e.g., 10000)
    #[arg(long, allow_hyphen_values = true)]
    balance: Option<String>,

    /// Percent of the balance to risk (e.g., 2)
    #[arg(long, allow_hyphen_values = true)]
    risk: Option<String>,

    /// Entry price (e.g., 100)
    #[arg(long, allow_hyphen_values = true)]
    entry: Option<String>,

    /// Stop-loss price (e.g., 95)
    #[arg(long, allow_hyphen_values = true)]
    stop: Option<String>,

    /// Risk:reward ratio (e.g., 1:2); empty for no target
    #[arg(long, allow_hyphen_values = true)]
    ratio: Option<String>,

    /// Print the unrounded result as JSON
    #[arg(long)]
    json: bool,

    /// List the configured presets and exit
    #[arg(long)]
    presets: bool,
}

impl Args {
    /// Overlay the given arguments on the configured form.
    fn form(&self, defaults: &CalculatorForm) -> CalculatorForm {
        let overrides = [
            (FieldKey::AccountBalance, &self.balance),
            (FieldKey::RiskPercent, &self.risk),
            (FieldKey::EntryPrice, &self.entry),
            (FieldKey::StopLossPrice, &self.stop),
            (FieldKey::RiskReward, &self.ratio),
        ];

        let mut form = defaults.clone();
        for (key, value) in overrides {
            if let Some(value) = value {
                form.set(key, value.as_str());
            }
        }
        form
    }
}

fn main() -> anyhow::Result<ExitCode> {
    load_dotenv();
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.observability.logging)?;

    let form = args.form(&config.form);
    tracing::debug!(?form, "form assembled");

    if args.presets {
        print_presets(&config, &form);
        return Ok(ExitCode::SUCCESS);
    }

    let result = match Calculator::new().calculate(&form) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", ResultView::from_result(&result));
        if let Some(helper) = risk_helper(&form.risk_percent) {
            println!();
            println!("{helper}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load `.env` from the working directory when present.
fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("ignoring unreadable .env: {e}");
    }
}

/// Print presets per field, marking the ones the form currently holds.
fn print_presets(config: &Config, form: &CalculatorForm) {
    for field in FieldKey::ALL {
        let presets = config.presets.for_field(field);
        if presets.is_empty() {
            continue;
        }

        let labels: Vec<String> = presets
            .iter()
            .map(|preset| {
                if preset.is_active(form) {
                    format!("[{}]", preset.label)
                } else {
                    preset.label.clone()
                }
            })
            .collect();
        println!("{}: {}", field.label(), labels.join("  "));
    }
}
