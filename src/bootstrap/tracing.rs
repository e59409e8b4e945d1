//! Tracing configuration for the dialog host
//!
//! - **Development**: debug level for the dialog crates
//! - **Production**: info level
//! - **Environment filter**: `RUST_LOG` overrides the defaults
//! - Output goes to stdout and, when the log directory is writable, to
//!   `pasteboard-dialog.log` under the platform's local data directory.

use std::{fs, io, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::{fmt, prelude::*, registry};

const APP_DIR_NAME: &str = "pasteboard-dialog";
const LOG_FILE_NAME: &str = "pasteboard-dialog.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("pasteboard_dialog={level}"),
        format!("pd_app={level}"),
        format!("pd_platform={level}"),
        // State machine noise (ignored events) only in development.
        if is_dev { "pd_core=debug" } else { "pd_core=warn" }.to_string(),
    ]
}

/// Directory the file layer writes into.
pub fn logs_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("No local data directory on this platform")?;
    Ok(base.join(APP_DIR_NAME).join("logs"))
}

/// Initialize the global tracing subscriber.
///
/// Call once from `main` before the ability is wired. A file layer is added
/// when the log directory can be created; otherwise logging stays on stdout.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    let subscriber = registry()
        .with(env_filter)
        .with(fmt_layer(stdout_writer, cfg!(not(test))));

    match file_writer {
        Some(writer) => subscriber.with(fmt_layer(writer, false)).try_init()?,
        None => subscriber.try_init()?,
    }

    Ok(())
}

type DialogFmtLayer<S, W> = fmt::Layer<S, DefaultFields, Format<Full, ChronoUtc>, W>;

/// `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`
fn fmt_layer<S, W>(writer: W, ansi: bool) -> DialogFmtLayer<S, W>
where
    W: for<'writer> MakeWriter<'writer> + 'static,
{
    fmt::layer()
        .with_timer(ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer)
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = logs_dir()?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
