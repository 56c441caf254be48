use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{Config, LogFormat, init_logging, load_config};
use indicatif::{ProgressBar, ProgressStyle};
use indices::{CompanyIndexSeries, IndexEngine};
use loader::{IndexDocument, StatementBook};
use statements::CompanyStatements;
use std::path::PathBuf;

/// The main entry point for the finpanel batch runner.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only supplies FINPANEL__* overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Compute(args) => handle_compute(args, config),
        Commands::Inspect(args) => handle_inspect(args, config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Derives per-year financial index panels from structured company statements.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults to ./finpanel.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute index panels for every company in a statement book.
    Compute(ComputeArgs),
    /// Print one company's index series as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser)]
struct ComputeArgs {
    /// The statement book to read (overrides io.input).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the index document (overrides io.output).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only compute this company code.
    #[arg(long)]
    code: Option<String>,

    /// Compute on the current thread only.
    #[arg(long)]
    sequential: bool,
}

#[derive(Parser)]
struct InspectArgs {
    /// The company code to compute.
    #[arg(long)]
    code: String,

    /// The statement book to read (overrides io.input).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print only the panel for this fiscal-year label.
    #[arg(long)]
    year: Option<String>,
}

// ==============================================================================
// Compute Command Logic
// ==============================================================================

fn handle_compute(args: ComputeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(input) = args.input {
        config.io.input = input;
    }
    if let Some(output) = args.output {
        config.io.output = output;
    }
    if args.sequential {
        config.compute.parallel = false;
    }

    let mut book = loader::read_statement_book(&config.io.input)
        .with_context(|| format!("Failed to read statements from {}", config.io.input.display()))?;
    if let Some(code) = &args.code {
        book = loader::select_company(book, code)?;
    }

    tracing::info!(
        companies = book.len(),
        parallel = config.compute.parallel,
        threads = ?config.compute.threads,
        "Starting index computation."
    );

    let document = compute_book(book, &config)?;
    let absent: usize = document
        .values()
        .flat_map(|series| &series.panels)
        .map(|panel| panel.absent_count())
        .sum();

    loader::write_index_document(&config.io.output, &document, config.io.pretty).with_context(
        || format!("Failed to write indices to {}", config.io.output.display()),
    )?;

    tracing::info!(
        companies = document.len(),
        panels = document.values().map(|s| s.panels.len()).sum::<usize>(),
        absent_indicators = absent,
        output = %config.io.output.display(),
        "Index computation complete."
    );
    Ok(())
}

/// Computes every company in the book, keyed by the book's company codes.
fn compute_book(book: StatementBook, config: &Config) -> anyhow::Result<IndexDocument> {
    let (codes, companies): (Vec<String>, Vec<CompanyStatements>) = book.into_iter().unzip();
    let engine = IndexEngine::new();

    let progress_bar = ProgressBar::new(companies.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    let series: Vec<CompanyIndexSeries> = if config.compute.parallel {
        let mut pool = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.compute.threads {
            pool = pool.num_threads(threads);
        }
        let pool = pool.build().context("Failed to build the compute thread pool")?;
        pool.install(|| engine.compute_all_with(&companies, |_| progress_bar.inc(1)))
    } else {
        companies
            .iter()
            .map(|company| {
                let series = engine.compute(company);
                progress_bar.inc(1);
                series
            })
            .collect()
    };

    progress_bar.finish_with_message("Done!");
    Ok(codes.into_iter().zip(series).collect())
}

// ==============================================================================
// Inspect Command Logic
// ==============================================================================

fn handle_inspect(args: InspectArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(input) = args.input {
        config.io.input = input;
    }

    let book = loader::read_statement_book(&config.io.input)
        .with_context(|| format!("Failed to read statements from {}", config.io.input.display()))?;
    let book = loader::select_company(book, &args.code)?;

    let series = book
        .values()
        .next()
        .map(|statements| IndexEngine::new().compute(statements))
        .with_context(|| format!("No statements for company {}", args.code))?;

    let json = match &args.year {
        Some(year) => {
            let panel = series
                .panel(year)
                .with_context(|| format!("Company {} has no fiscal year '{}'", args.code, year))?;
            serde_json::to_string_pretty(panel)?
        }
        None => serde_json::to_string_pretty(&series)?,
    };
    println!("{json}");
    Ok(())
}
