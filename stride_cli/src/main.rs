use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use stride_core::*;

/// Records rendered by `stride demo`
const DEMO_DAILY_RECORD: &str = "678,0h50m";
const DEMO_TRAINING_RECORDS: [&str; 2] = ["3456,Бег,1h30m", "5000,Ходьба,2h15m"];

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Distance, speed and calorie reports from step counts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Body weight in kilograms (overrides config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    weight: Option<f64>,

    /// Height in meters (overrides config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    height: Option<f64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in sample records (default)
    Demo,

    /// Daily steps summary from a "<steps>,<duration>" record
    Day {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },

    /// Training summary from a "<steps>,<activity>,<duration>" record
    Training {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        stride_core::logging::init_with_level("debug");
    } else {
        stride_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut profile = config.profile.to_profile();
    if let Some(weight) = cli.weight {
        profile.weight_kg = weight;
    }
    if let Some(height) = cli.height {
        profile.height_m = height;
    }

    match cli.command {
        Some(Commands::Day { record }) => cmd_day(&record, &profile, cli.json),
        Some(Commands::Training { record }) => cmd_training(&record, &profile, cli.json),
        Some(Commands::Demo) | None => cmd_demo(&profile, cli.json),
    }
}

/// Daily failures are logged and suppressed; stdout stays empty
fn cmd_day(record: &str, profile: &PersonProfile, json: bool) -> Result<()> {
    match daily_steps_report(record, profile) {
        Ok(report) => print_report(&report, json),
        Err(e) => {
            tracing::error!("Failed to build daily steps report: {}", e);
            Ok(())
        }
    }
}

fn cmd_training(record: &str, profile: &PersonProfile, json: bool) -> Result<()> {
    let report = training_report(record, profile)?;
    print_report(&report, json)
}

fn cmd_demo(profile: &PersonProfile, json: bool) -> Result<()> {
    println!("=== Daily activity ===");
    cmd_day(DEMO_DAILY_RECORD, profile, json)?;
    println!();

    for record in DEMO_TRAINING_RECORDS {
        match training_report(record, profile) {
            Ok(report) => {
                println!("=== Training ===");
                print_report(&report, json)?;
            }
            Err(e) => println!("Error: {}", e),
        }
        println!();
    }

    Ok(())
}

fn print_report<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
