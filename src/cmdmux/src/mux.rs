//! The command mux.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::command::Command;
use crate::error::{ExecError, RegisterError, Result};
use crate::table::DispatchTable;

/// A registry of named commands.
///
/// `exec` looks up the first argument, strips it, and runs the bound command
/// with the label extended by that token. Two optional fallbacks decide what
/// happens when there is no first argument or it names nothing; without them
/// `exec` returns [`ExecError::MissingArguments`] or
/// [`ExecError::UnknownName`] and leaves the reporting to the caller.
///
/// ```
/// use cmdmux::Mux;
///
/// let mux = Mux::new();
/// mux.register_func("new", |_label, args| {
///     println!("created: {}", args[0]);
///     Ok(())
/// })?;
///
/// mux.exec("todo", &["new".to_string(), "quinoa".to_string()])?;
/// # Ok::<(), cmdmux::ExecError>(())
/// ```
#[derive(Default)]
pub struct Mux {
    table: DispatchTable,
    on_missing_args: Option<Arc<dyn Command>>,
    on_unknown_name: Option<Arc<dyn Command>>,
}

impl Mux {
    /// Create an empty mux with the default fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mux with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: DispatchTable::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Run `handler` instead of failing when `exec` gets no arguments.
    pub fn with_missing_args(mut self, handler: impl Command + 'static) -> Self {
        self.set_missing_args(handler);
        self
    }

    /// Run `handler` instead of failing when the first argument is unknown.
    ///
    /// The handler receives the label and arguments exactly as `exec` did.
    pub fn with_unknown_name(mut self, handler: impl Command + 'static) -> Self {
        self.set_unknown_name(handler);
        self
    }

    /// See [`Mux::with_missing_args`].
    pub fn set_missing_args(&mut self, handler: impl Command + 'static) {
        self.on_missing_args = Some(Arc::new(handler));
    }

    /// See [`Mux::with_unknown_name`].
    pub fn set_unknown_name(&mut self, handler: impl Command + 'static) {
        self.on_unknown_name = Some(Arc::new(handler));
    }

    /// Register a command under `name`.
    pub fn register(
        &self,
        name: impl Into<String>,
        command: impl Command + 'static,
    ) -> Result<(), RegisterError> {
        self.register_shared(name, Arc::new(command))
    }

    /// Register a function under `name`.
    ///
    /// Same as [`Mux::register`], but closure arguments need no annotations.
    pub fn register_func<F>(&self, name: impl Into<String>, func: F) -> Result<(), RegisterError>
    where
        F: Fn(&str, &[String]) -> Result<()> + Send + Sync + 'static,
    {
        self.register(name, func)
    }

    /// Register a command that may also be bound elsewhere.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        command: Arc<dyn Command>,
    ) -> Result<(), RegisterError> {
        self.register_dyn(name, Some(command))
    }

    /// Register a command that may be absent.
    ///
    /// `None` is refused with [`RegisterError::NilHandler`] and leaves the mux
    /// untouched.
    pub fn register_dyn(
        &self,
        name: impl Into<String>,
        command: Option<Arc<dyn Command>>,
    ) -> Result<(), RegisterError> {
        let name = name.into();
        let Some(command) = command else {
            warn!(name = %name, "refusing to register nil command");
            return Err(RegisterError::NilHandler);
        };
        match self.table.register(name.clone(), command) {
            Ok(()) => {
                debug!(name = %name, "registered command");
                Ok(())
            }
            Err(err) => {
                warn!(name = %name, "{err}");
                Err(err)
            }
        }
    }

    /// Dispatch `args` to the command named by its first element.
    pub fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        let Some((head, rest)) = args.split_first() else {
            return self.missing_args(label, args);
        };
        let Some(command) = self.table.lookup(head) else {
            return self.unknown_name(label, args, head);
        };
        trace!(label, command = %head, "dispatching");
        command.exec(&format!("{label} {head}"), rest)
    }

    /// Registered names in registration order.
    pub fn commands(&self) -> Vec<String> {
        self.table.names()
    }

    /// Whether a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn missing_args(&self, label: &str, args: &[String]) -> Result<()> {
        match &self.on_missing_args {
            Some(handler) => {
                debug!(label, "no command given, running fallback");
                handler.exec(label, args)
            }
            None => Err(ExecError::MissingArguments {
                label: label.to_string(),
            }),
        }
    }

    fn unknown_name(&self, label: &str, args: &[String], name: &str) -> Result<()> {
        match &self.on_unknown_name {
            Some(handler) => {
                debug!(label, name, "unknown command, running fallback");
                handler.exec(label, args)
            }
            None => Err(ExecError::UnknownName {
                label: label.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

impl Command for Mux {
    fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        Mux::exec(self, label, args)
    }
}

impl std::fmt::Debug for Mux {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mux")
            .field("commands", &self.table.names())
            .field("on_missing_args", &self.on_missing_args.is_some())
            .field("on_unknown_name", &self.on_unknown_name.is_some())
            .finish()
    }
}
