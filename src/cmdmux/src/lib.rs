//! Lightweight subcommands for command-line programs.
//!
//! Register named [`Command`]s in a [`Mux`], then hand it the program name
//! and its arguments. The first argument picks the command, which runs with
//! the rest:
//!
//! ```
//! use cmdmux::Mux;
//!
//! let mux = Mux::new();
//! mux.register_func("new", |_label, args| {
//!     println!("created: {}", args[0]);
//!     Ok(())
//! })?;
//! mux.register_func("list", |_label, _args| {
//!     println!("milk");
//!     Ok(())
//! })?;
//!
//! mux.exec("todo", &["new".to_string(), "quinoa".to_string()])?;
//! assert_eq!(mux.commands(), ["new", "list"]);
//! # Ok::<(), cmdmux::ExecError>(())
//! ```
//!
//! # Failures
//!
//! Registration errors ([`RegisterError`]) are always returned. Dispatch
//! problems (no arguments, unknown name) are returned as [`ExecError`] unless
//! the mux was given fallbacks with [`Mux::with_missing_args`] and
//! [`Mux::with_unknown_name`]. The registry never exits the process; that
//! decision belongs to the program's `main`.
//!
//! # Help
//!
//! [`HelpMux`] adds a parallel registry of help topics reached with
//! `app help <name>`.
//!
//! # Default mux
//!
//! The [`global`] module offers one process-wide mux behind free functions.

mod command;
mod error;
pub mod global;
mod help;
mod mux;
mod table;

pub use command::{Command, HelpCommand};
pub use error::{ExecError, RegisterError, Result};
pub use help::{HELP_WORD, HelpMux};
pub use mux::Mux;
pub use table::DispatchTable;

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::{Command, ExecError, HelpCommand, HelpMux, Mux, RegisterError};
}
