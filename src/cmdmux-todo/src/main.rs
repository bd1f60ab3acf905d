//! Todo list manager, the running example for cmdmux.

mod app;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use cmdmux::{ExecError, HelpMux};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::TodoList;

/// Label used when the program name cannot be recovered from `argv[0]`.
const FALLBACK_LABEL: &str = "todo";

/// Set to any non-empty value to log as JSON.
const JSON_LOGS_ENV: &str = "CMDMUX_LOG_JSON";

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var(JSON_LOGS_ENV).is_ok_and(|v| !v.is_empty());

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn program_label(argv0: Option<String>) -> String {
    argv0
        .as_deref()
        .and_then(|arg| Path::new(arg).file_stem())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_LABEL.to_string())
}

fn report(mux: &HelpMux, label: &str, err: &ExecError) {
    let at = err.label().unwrap_or(label);
    match err {
        ExecError::Handler(inner) => eprintln!("{inner:#}"),
        _ => eprintln!("{at}: {err}"),
    }
    if matches!(
        err,
        ExecError::MissingArguments { .. } | ExecError::UnknownName { .. }
    ) {
        eprintln!("usage: {label} <command> [args...]");
        eprintln!("commands: {}", mux.commands().join(", "));
    }
}

fn main() -> ExitCode {
    setup_logging();

    let mut argv = std::env::args();
    let label = program_label(argv.next());
    let args: Vec<String> = argv.collect();

    let mux = match app::build(&label, Arc::new(TodoList::seeded())) {
        Ok(mux) => mux,
        Err(e) => {
            error!("Failed to register commands: {e}");
            return ExitCode::FAILURE;
        }
    };

    debug!(label = %label, args = ?args, "dispatching");
    match mux.exec(&label, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&mux, &label, &err);
            ExitCode::FAILURE
        }
    }
}
