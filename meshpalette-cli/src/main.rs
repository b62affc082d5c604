//! Print the dominant colors of a mesh asset

mod args;

use anyhow::Context;
use args::Args;
use clap::Parser;
use meshpalette_algorithms::{AnalysisOptions, ColorReport, ParallelConfig, RankedEntry};
use meshpalette_core::Error;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = AnalysisOptions::default()
        .with_top_n(args.effective_top_n())
        .with_parallel(parallel_config(args));
    debug!(asset = %args.asset.display(), ?options, "starting analysis");

    let report = meshpalette_io::analyze(&args.asset, &options)
        .with_context(|| format!("failed to analyze {}", args.asset.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report_lines(&report) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn parallel_config(args: &Args) -> ParallelConfig {
    if args.sequential {
        return ParallelConfig::sequential();
    }
    match args.threads {
        Some(threads) => ParallelConfig::default().with_threads(threads),
        None => ParallelConfig::default(),
    }
}

/// Render the text report: a summary line followed by one line per color
fn report_lines(report: &ColorReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.entries.len() + 1);
    lines.push(format!(
        "Detected {} distinct colors over {} samples",
        report.distinct_colors, report.total_samples
    ));
    lines.extend(
        report
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| entry_line(index + 1, entry)),
    );
    lines
}

fn entry_line(rank: usize, entry: &RankedEntry) -> String {
    format!(
        "{}: {}, count={}, share={:.2}%",
        rank,
        entry.color,
        entry.count,
        entry.frequency * 100.0
    )
}

/// Map engine failures to a short message for the terminal
fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(Error::AssetNotFound { path }) => format!("File not found: {}", path.display()),
        Some(Error::NoGeometry) => "No meshes found in the asset".to_string(),
        Some(Error::NoColorData) => {
            "No color data found (no vertex colors and no textured UVs)".to_string()
        }
        _ => format!("Error: {:#}", err),
    }
}
