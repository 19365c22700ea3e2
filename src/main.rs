//! # slackpack CLI
//!
//! Command-line interface for slackpack library.

use std::io::IsTerminal;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use slackpack::SlackpackError;
use slackpack::cli::Args;
use slackpack::pipeline::{self, PipelineReport};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    match run(&args) {
        Ok(report) if report.is_total_failure() => {
            eprintln!(
                "❌ Error: no rows could be extracted from {} input documents",
                report.stats.documents_discovered
            );
            process::exit(1);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    }
}

/// Diagnostics go to stderr so stdout stays free for the summary.
fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<PipelineReport, SlackpackError> {
    let start = Instant::now();
    let config = args.to_config();
    let quiet = args.quiet;

    if !quiet {
        println!("📦 slackpack v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", config.input_dir.display());
        println!("💾 Output:  {}", config.output_path.display());
        println!("🕒 ts:      {}", config.timestamp_mode);
        println!();
        println!("⏳ Processing...");
    }

    let report = pipeline::run(&config)?;
    let elapsed = start.elapsed();

    if quiet {
        return Ok(report);
    }

    let stats = &report.stats;
    println!();
    println!("✅ Done! Output saved to {}", report.output_path.display());

    println!();
    println!("📊 Summary:");
    println!(
        "   Documents: {} found, {} decoded, {} skipped",
        stats.documents_discovered, stats.documents_decoded, stats.documents_skipped
    );
    println!("   Messages:  {} decoded", stats.messages_decoded);
    if stats.messages_skipped > 0 {
        println!("   Skipped:   {} (bad timestamp)", stats.messages_skipped);
    }
    println!(
        "   Rows:      {} ({:.1}% of messages)",
        stats.records_emitted,
        stats.success_rate()
    );
    if !report.diagnostics.is_empty() {
        println!("   ⚠️  {} diagnostics logged to stderr", report.diagnostics.len());
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}
