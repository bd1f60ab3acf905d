//! `help` support layered over two muxes.
//!
//! A [`HelpMux`] keeps commands and help topics in separate registries keyed
//! by the same names. `app help <topic> ...` is routed to the topic registry,
//! everything else to the command registry. The word `help` is reserved: a
//! command registered as `help` can never be reached through [`HelpMux::exec`].

use std::sync::Arc;

use tracing::debug;

use crate::command::{Command, HelpCommand, HelpOf};
use crate::error::{ExecError, RegisterError, Result};
use crate::mux::Mux;

/// First token that routes to the help topics.
pub const HELP_WORD: &str = "help";

/// A command mux paired with a help-topic mux.
pub struct HelpMux {
    commands: Mux,
    topics: Mux,
    default_help: Option<Arc<dyn Command>>,
}

impl HelpMux {
    /// Create an empty help mux.
    ///
    /// Unknown help topics fail with [`ExecError::UnknownHelpTopic`]; the
    /// command side keeps the plain [`Mux`] defaults.
    pub fn new() -> Self {
        Self {
            commands: Mux::new(),
            topics: Mux::new().with_unknown_name(unknown_topic),
            default_help: None,
        }
    }

    /// Run `handler` when `exec` gets no arguments.
    pub fn with_missing_command(mut self, handler: impl Command + 'static) -> Self {
        self.commands.set_missing_args(handler);
        self
    }

    /// Run `handler` when the first argument names no command.
    pub fn with_unknown_command(mut self, handler: impl Command + 'static) -> Self {
        self.commands.set_unknown_name(handler);
        self
    }

    /// Run `handler` when `help` names no topic.
    pub fn with_unknown_topic(mut self, handler: impl Command + 'static) -> Self {
        self.topics.set_unknown_name(handler);
        self
    }

    /// Run `handler` for a bare `help`.
    pub fn with_default_help(mut self, handler: impl Command + 'static) -> Self {
        self.default_help = Some(Arc::new(handler));
        self
    }

    /// Register a command with no help topic.
    pub fn register(
        &self,
        name: impl Into<String>,
        command: impl Command + 'static,
    ) -> Result<(), RegisterError> {
        self.commands.register(name, command)
    }

    /// Register a command function with no help topic.
    pub fn register_func<F>(&self, name: impl Into<String>, func: F) -> Result<(), RegisterError>
    where
        F: Fn(&str, &[String]) -> Result<()> + Send + Sync + 'static,
    {
        self.commands.register(name, func)
    }

    /// Register a command and, when given, its help topic under one name.
    ///
    /// A name already taken on either side registers nothing.
    pub fn register_with_help(
        &self,
        name: impl Into<String>,
        command: impl Command + 'static,
        help: Option<Arc<dyn Command>>,
    ) -> Result<(), RegisterError> {
        let name = name.into();
        if help.is_some() {
            self.ensure_topic_free(&name)?;
        }
        self.commands.register(name.clone(), command)?;
        match help {
            Some(help) => self.topics.register_shared(name, help),
            None => Ok(()),
        }
    }

    /// Register a command that documents itself.
    pub fn register_helpful<T>(&self, name: impl Into<String>, command: T) -> Result<(), RegisterError>
    where
        T: HelpCommand + 'static,
    {
        let command = Arc::new(command);
        let name = name.into();
        self.ensure_topic_free(&name)?;
        self.commands
            .register_shared(name.clone(), Arc::clone(&command) as Arc<dyn Command>)?;
        self.topics.register(name, HelpOf(command))
    }

    /// Register a help topic on its own.
    pub fn register_help(
        &self,
        name: impl Into<String>,
        help: impl Command + 'static,
    ) -> Result<(), RegisterError> {
        self.topics.register(name, help)
    }

    /// Register a help topic function.
    pub fn register_help_func<F>(&self, name: impl Into<String>, func: F) -> Result<(), RegisterError>
    where
        F: Fn(&str, &[String]) -> Result<()> + Send + Sync + 'static,
    {
        self.topics.register(name, func)
    }

    /// Dispatch `args`, routing a leading `help` to the topics.
    pub fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        match args.split_first() {
            Some((head, rest)) if head == HELP_WORD => {
                self.help(&format!("{label} {HELP_WORD}"), rest)
            }
            _ => self.commands.exec(label, args),
        }
    }

    /// Show the help topic named by the first argument.
    ///
    /// With no arguments runs the default help handler, or fails with
    /// [`ExecError::NoHelpTopics`] listing what is registered.
    pub fn help(&self, label: &str, args: &[String]) -> Result<()> {
        if !args.is_empty() {
            return self.topics.exec(label, args);
        }
        match &self.default_help {
            Some(handler) => handler.exec(label, args),
            None => {
                let topics = self.topics.commands();
                debug!(label, topics = topics.len(), "bare help without default handler");
                Err(ExecError::NoHelpTopics {
                    label: label.to_string(),
                    topics,
                })
            }
        }
    }

    fn ensure_topic_free(&self, name: &str) -> Result<(), RegisterError> {
        if self.topics.contains(name) {
            return Err(RegisterError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Registered command names in registration order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.commands()
    }

    /// Registered help topics in registration order.
    pub fn help_topics(&self) -> Vec<String> {
        self.topics.commands()
    }
}

impl Default for HelpMux {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for HelpMux {
    fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        HelpMux::exec(self, label, args)
    }
}

impl std::fmt::Debug for HelpMux {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpMux")
            .field("commands", &self.commands)
            .field("topics", &self.topics)
            .field("default_help", &self.default_help.is_some())
            .finish()
    }
}

fn unknown_topic(label: &str, args: &[String]) -> Result<()> {
    Err(ExecError::UnknownHelpTopic {
        label: label.to_string(),
        topic: args.first().cloned().unwrap_or_default(),
    })
}
