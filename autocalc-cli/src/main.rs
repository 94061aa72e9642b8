use std::path::{Path, PathBuf};

use anyhow::Context;
use autocalc_core::SharedQuoteStore;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use autocalc_cli::app::{self, QuoteRequest};
use autocalc_cli::config::AppConfig;
use autocalc_cli::form::{FinanceForm, LeaseForm};
use autocalc_cli::logging::LogOptions;
use autocalc_cli::{csv_loader, logging, report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Vehicle finance and lease quote calculator.
///
/// Missing or unreadable inputs fall back to the configured defaults.
#[derive(Debug, Parser)]
#[command(name = "autocalc", version, about)]
struct Cli {
    /// TOML file with default quote inputs.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `autocalc_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate a finance (loan) quote.
    Finance {
        #[command(flatten)]
        form: FinanceForm,

        /// Add the quote to the history and print it.
        #[arg(long, default_value_t = false)]
        save: bool,
    },

    /// Calculate a lease quote.
    Lease {
        #[command(flatten)]
        form: LeaseForm,

        /// Add the quote to the history and print it.
        #[arg(long, default_value_t = false)]
        save: bool,
    },

    /// Calculate and save every quote in a CSV file.
    Batch {
        /// CSV file of quotes
        #[arg(short, long)]
        file: PathBuf,

        /// History index to remove after loading; may be repeated.
        #[arg(long = "remove", value_name = "INDEX")]
        remove: Vec<usize>,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    logging::init(LogOptions {
        level: cli.log_level.as_deref(),
        quiet: cli.quiet,
        file: cli.log_file.as_deref(),
    })
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_single(
    request: QuoteRequest,
    save: bool,
    store: &SharedQuoteStore,
) {
    let calculation = if save {
        app::calculate_and_save(request, store, Utc::now())
    } else {
        request.calculate()
    };

    println!("{}", calculation.report());
    if save {
        println!();
        println!("{}", report::history(&store.snapshot()));
    }
}

fn run_batch_file(
    file: &Path,
    remove: &[usize],
    store: &SharedQuoteStore,
) -> anyhow::Result<()> {
    let requests = csv_loader::load_from_file(file)
        .with_context(|| format!("Failed to load quotes from: {}", file.display()))?;
    info!(count = requests.len(), file = %file.display(), "loaded quotes");

    for calculation in app::run_batch(requests, store, Utc::now()) {
        println!("── {} ──", calculation.quote_type().as_str());
        println!("{}", calculation.report());
        println!();
    }

    let removed = app::remove_saved(store, remove);
    if removed != remove.len() {
        info!(
            requested = remove.len(),
            removed, "some history indices were out of range"
        );
    }

    println!("{}", report::history(&store.snapshot()));
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let store = SharedQuoteStore::new();
    let today = Local::now().date_naive();

    match cli.command {
        Command::Finance { form, save } => {
            let quote = form
                .to_quote(&config.finance, today)
                .context("Invalid finance quote")?;
            run_single(QuoteRequest::Finance(quote), save, &store);
        }
        Command::Lease { form, save } => {
            let quote = form
                .to_quote(&config.lease, today)
                .context("Invalid lease quote")?;
            run_single(QuoteRequest::Lease(quote), save, &store);
        }
        Command::Batch { file, remove } => run_batch_file(&file, &remove, &store)?,
    }

    Ok(())
}
