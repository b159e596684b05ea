//! VIN Decoder CLI Application
//!
//! This is the command-line interface for the VIN decoder.
//! It uses the vin-decoder library and adds:
//! - Input collection (arguments, VIN files, TOML config)
//! - Parallel batch decoding
//! - Text and JSON reports

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use rayon::prelude::*;
use std::path::PathBuf;
use vin_decoder::{Decoder, VinRecord};

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// VIN Decoder - Decode Vehicle Identification Numbers
#[derive(Parser, Debug)]
#[command(name = "vin-cli")]
#[command(about = "Decode Vehicle Identification Numbers (ISO 3779)", long_about = None)]
#[command(version)]
struct Args {
    /// VINs to decode
    #[arg(value_name = "VIN")]
    vins: Vec<String>,

    /// File with one VIN per line (can be repeated)
    #[arg(short, long, value_name = "FILE")]
    input: Vec<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Resolve model years as if this were the current year
    #[arg(long, value_name = "YEAR")]
    year: Option<i32>,

    /// Exit successfully even if some VINs are invalid
    #[arg(long)]
    skip_invalid: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("VIN Decoder CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", vin_decoder::VERSION);

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let inputs = collect_inputs(&args, &config)?;
    if inputs.is_empty() {
        println!("VIN Decoder - No input specified");
        println!("\nQuick Start:");
        println!("  vin-cli 1HGCM82633A004352");
        println!("  vin-cli --input fleet.txt --format json");
        println!("  vin-cli --config config.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let records = decode_inputs(&inputs, &config);
    let failed = inputs.len() - records.len();

    let rendered = match config.output.format {
        OutputFormat::Text => report::render_text(&records),
        OutputFormat::Json => report::render_json(&records)?,
    };
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if failed > 0 && !config.output.skip_invalid {
        anyhow::bail!("{} of {} VINs failed to decode", failed, inputs.len());
    }

    Ok(())
}

/// Command-line flags take precedence over the config file
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(year) = args.year {
        config.decoder = config.decoder.with_reference_year(year);
    }
    if args.skip_invalid {
        config.output.skip_invalid = true;
    }
}

/// Gather VINs: arguments first, then input files, then the config file's entries
fn collect_inputs(args: &Args, config: &AppConfig) -> Result<Vec<String>> {
    let mut inputs = args.vins.clone();

    for path in args.input.iter().chain(&config.input.files) {
        let vins = config::read_vin_file(path)?;
        log::debug!("Read {} VINs from {:?}", vins.len(), path);
        inputs.extend(vins);
    }

    inputs.extend(config.input.vins.iter().cloned());
    Ok(inputs)
}

/// Decode every input in parallel, reporting failures on stderr
///
/// All inputs are resolved against the same year. Output order follows input order.
fn decode_inputs(inputs: &[String], config: &AppConfig) -> Vec<VinRecord> {
    let decoder = Decoder::new().with_config(config.decoder);
    let current_year = config.decoder.current_year();
    log::debug!("Decoding {} VINs against year {}", inputs.len(), current_year);

    let results: Vec<_> = inputs
        .par_iter()
        .map(|raw| decoder.decode_at(raw, current_year))
        .collect();

    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                eprintln!("Error: {}", e);
                None
            }
        })
        .collect()
}

/// Log level for `-q` / `-v` flags. Warnings are shown by default so stdout
/// stays a clean report.
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Initialize stderr logging; only the decoder crates log above `Warn`
fn init_logging(verbose: u8, quiet: bool) {
    use std::io::Write;

    let level = log_level(verbose, quiet);
    env_logger::Builder::new()
        .filter_level(level.min(LevelFilter::Warn))
        .filter_module("vin_decoder", level)
        .filter_module("vin_cli", level)
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .init();
}
