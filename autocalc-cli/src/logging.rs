//! Tracing setup for the `autocalc` binary.
//!
//! Everything the command line can change about logging is known before the
//! first record is written, so the subscriber is assembled once from
//! [`LogOptions`]: a level filter, an optional stderr layer and an optional
//! append-only file layer. Reports go to stdout and are never mixed with log
//! output.

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info";

/// Logging switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions<'a> {
    /// Filter directive; overrides `RUST_LOG` when present.
    pub level: Option<&'a str>,
    /// Drop the stderr layer.
    pub quiet: bool,
    /// Append records to this file as well.
    pub file: Option<&'a Path>,
}

/// One line per event: `13:04:05.123 WARN autocalc_cli::input: message key=value`.
///
/// Only the level is colored, and only when the writer supports ANSI.
struct QuoteLogFormat;

impl QuoteLogFormat {
    fn level_color(level: Level) -> &'static str {
        match level {
            Level::ERROR => "31",
            Level::WARN => "33",
            Level::INFO => "32",
            Level::DEBUG => "34",
            Level::TRACE => "35",
        }
    }
}

impl<S, N> FormatEvent<S, N> for QuoteLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let level = *meta.level();

        write!(writer, "{} ", Local::now().format("%H:%M:%S%.3f"))?;
        if writer.has_ansi_escapes() {
            write!(writer, "\x1b[{}m{level:>5}\x1b[0m ", Self::level_color(level))?;
        } else {
            write!(writer, "{level:>5} ")?;
        }
        write!(writer, "{}: ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level '{directive}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber.
///
/// Fails on a bad filter directive, an unopenable log file, or when a
/// subscriber is already installed.
pub fn init(options: LogOptions<'_>) -> Result<()> {
    let filter = build_filter(options.level)?;

    let stderr_layer = (!options.quiet).then(|| {
        layer()
            .event_format(QuoteLogFormat)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
    });

    let file_layer = match options.file {
        Some(path) => Some(
            layer()
                .event_format(QuoteLogFormat)
                .with_writer(Mutex::new(open_log_file(path)?))
                .with_ansi(false),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging is already initialized")
}
