//! Process-wide default mux.
//!
//! Small programs can register into one shared [`Mux`] with the free
//! functions here instead of threading an instance around. The default is
//! created empty on first use; call [`install`] before anything else touches
//! it to use a mux with custom fallbacks instead.

use once_cell::sync::OnceCell;

use crate::command::Command;
use crate::error::{RegisterError, Result};
use crate::mux::Mux;

static DEFAULT_MUX: OnceCell<Mux> = OnceCell::new();

/// Make `mux` the process-wide default.
///
/// Succeeds only once and only if [`global`] has not run yet. Otherwise the
/// rejected mux is handed back.
pub fn install(mux: Mux) -> std::result::Result<(), Mux> {
    DEFAULT_MUX.set(mux)
}

/// The process-wide default mux.
pub fn global() -> &'static Mux {
    DEFAULT_MUX.get_or_init(Mux::new)
}

/// Register a command with the default mux.
pub fn register(
    name: impl Into<String>,
    command: impl Command + 'static,
) -> Result<(), RegisterError> {
    global().register(name, command)
}

/// Register a function with the default mux.
pub fn register_func<F>(name: impl Into<String>, func: F) -> Result<(), RegisterError>
where
    F: Fn(&str, &[String]) -> Result<()> + Send + Sync + 'static,
{
    global().register_func(name, func)
}

/// Dispatch with the default mux.
pub fn exec(label: &str, args: &[String]) -> Result<()> {
    global().exec(label, args)
}

/// Names registered with the default mux.
pub fn commands() -> Vec<String> {
    global().commands()
}
