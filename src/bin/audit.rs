//! Design Auditor
//!
//! Validates one JSON design file, or every design in a directory, and
//! prints the verdicts.

use chassis_audit::core::config::ValidationOptions;
use chassis_audit::core::error::Result;
use chassis_audit::design::UnitDesign;
use chassis_audit::validation::batch::{load_designs, validate_all};
use chassis_audit::validation::validate;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Design Auditor - construction-rules check for unit designs
#[derive(Parser, Debug)]
#[command(name = "audit")]
#[command(about = "Validate unit designs and report every rule they break")]
struct Args {
    /// A design file, or a directory of design files
    path: PathBuf,

    /// TOML file overriding the default validation options
    #[arg(long)]
    options: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the weight breakdown of every design
    #[arg(long, short = 'w')]
    weights: bool,

    /// Only list designs that fail
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chassis_audit=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(all_passed) => std::process::exit(if all_passed { 0 } else { 1 }),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let mut options = match &args.options {
        Some(path) => ValidationOptions::load(path)?,
        None => ValidationOptions::default(),
    };
    options.print_weight_breakdown |= args.weights;
    options.validate()?;

    if args.path.is_dir() {
        run_batch(args, &options)
    } else {
        run_single(args, &options)
    }
}

fn run_single(args: &Args, options: &ValidationOptions) -> Result<bool> {
    let design = UnitDesign::load(&args.path)?;
    let verdict = validate(&design, options);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else if !(args.quiet && verdict.passed) {
        println!(
            "{}: {}",
            design.display_name(),
            if verdict.passed { "legal" } else { "ILLEGAL" }
        );
        for line in verdict.report.lines() {
            println!("  {}", line);
        }
    }
    Ok(verdict.passed)
}

fn run_batch(args: &Args, options: &ValidationOptions) -> Result<bool> {
    let (designs, broken) = load_designs(&args.path)?;
    for (path, error) in &broken {
        eprintln!("Warning: could not read {}: {}", path.display(), error);
    }

    let (verdicts, summary) = validate_all(&designs, options);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (design, verdict) in designs.iter().zip(&verdicts) {
            if args.quiet && verdict.passed {
                continue;
            }
            println!(
                "{}: {}",
                design.display_name(),
                if verdict.passed { "legal" } else { "ILLEGAL" }
            );
            for line in verdict.report.lines() {
                println!("  {}", line);
            }
        }
        println!();
        println!("{}", summary);
    }
    Ok(summary.passed() == summary.total() && broken.is_empty())
}
