//! varlist binary entrypoint kept minimal. The listing flow lives in `varlist::app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

/// Log timestamp formatter ("YYYY-MM-DD-T HH:MM:SS", local time).
struct VarlistTimer;

impl tracing_subscriber::fmt::time::FormatTime for VarlistTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/varlist/logs/varlist.log`, or stderr as fallback.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let mut log_path = varlist::config::logs_dir();
    log_path.push("varlist.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(VarlistTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so a read-only config dir does not block listing
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(VarlistTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = varlist::args::Args::parse();
    let settings = varlist::config::settings();
    init_logging(&varlist::args::determine_log_level(
        &args,
        settings.log_level.as_deref(),
    ));

    tracing::info!(struct_name = %args.struct_name, data = %args.data.display(), "varlist starting");
    let code = match varlist::app::run(&args, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "listing failed");
            eprintln!("varlist: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("varlist exited");
    code
}
