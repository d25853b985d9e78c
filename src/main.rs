use annuity_processor::cli::Args;
use annuity_processor::{AnnuityProcessor, ProcessResult, Severity};
use anyhow::Context;
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", error);
        process::exit(1);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(run(&args)) {
        Ok(result) => {
            if result.has_errors {
                process::exit(1);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<ProcessResult> {
    let config = args.load_config().context("Failed to load configuration")?;
    debug!("Loaded configuration: {:?}", config);

    let content = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read input file {}", args.input.display()))?;

    let mut processor = AnnuityProcessor::new(config);
    if !args.json && !args.quiet {
        processor = processor.with_progress_bar(line_progress_bar());
    }

    let result = processor.process(&content).await;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        print_report(&result);
    }

    Ok(result)
}

fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("annuity_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn line_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

fn print_report(result: &ProcessResult) {
    println!("{}", "Annuity renewal processing".bright_green().bold());
    for message in &result.messages {
        let line = message.to_string();
        match message.severity {
            Severity::Info => println!("  {}", line),
            Severity::Warning => println!("  {}", line.yellow()),
            Severity::Error => println!("  {}", line.red().bold()),
        }
    }

    println!();
    println!(
        "  {} {}",
        "Records:".bright_cyan(),
        result.total_records.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Unique cases:".bright_cyan(),
        result.stats.unique_cases.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Skipped lines:".bright_cyan(),
        result.stats.skipped_lines.to_string().bright_white().bold()
    );

    let status = if result.has_errors {
        "Completed with errors".red().bold()
    } else if result.has_warnings {
        "Completed with warnings".yellow().bold()
    } else {
        "Completed".bright_green().bold()
    };
    println!("  {}", status);
}
