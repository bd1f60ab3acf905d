//! Error types for registration and dispatch.

use thiserror::Error;

/// Errors returned when binding a name to a command.
///
/// Registration errors never escalate; the caller of `register` decides what
/// to do with them. A failed registration leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The name is already bound in this registry.
    #[error("name already registered")]
    DuplicateName {
        /// The name that was rejected.
        name: String,
    },

    /// No command value was supplied.
    #[error("cannot register nil command")]
    NilHandler,
}

impl RegisterError {
    /// The rejected name, when the error concerns a specific one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::DuplicateName { name } => Some(name),
            Self::NilHandler => None,
        }
    }
}

/// Errors produced while dispatching an argument vector.
#[derive(Debug, Error)]
pub enum ExecError {
    /// `exec` was called with no tokens and no missing-args fallback is set.
    #[error("no command given")]
    MissingArguments {
        /// Label at the point of dispatch.
        label: String,
    },

    /// The first token names no registered command and no unknown-name
    /// fallback is set.
    #[error("unknown command: {name}")]
    UnknownName {
        /// Label at the point of dispatch.
        label: String,
        /// The unrecognized token.
        name: String,
    },

    /// `help <topic>` named a topic with no registered help.
    #[error("unknown help topic: {topic}")]
    UnknownHelpTopic {
        /// Label at the point of dispatch.
        label: String,
        /// The unrecognized topic.
        topic: String,
    },

    /// Bare `help` with no default help handler installed.
    #[error("{}", describe_topics(.topics))]
    NoHelpTopics {
        /// Label at the point of dispatch.
        label: String,
        /// Registered help topics, in registration order.
        topics: Vec<String>,
    },

    /// A handler tried to register something and was refused.
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// A command handler failed on its own terms.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl ExecError {
    /// Label of the mux that raised a dispatch error.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::MissingArguments { label }
            | Self::UnknownName { label, .. }
            | Self::UnknownHelpTopic { label, .. }
            | Self::NoHelpTopics { label, .. } => Some(label),
            Self::Register(_) | Self::Handler(_) => None,
        }
    }

    /// Whether the error comes from dispatch itself rather than a handler.
    ///
    /// CLIs typically answer these with a usage message.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingArguments { .. }
                | Self::UnknownName { .. }
                | Self::UnknownHelpTopic { .. }
                | Self::NoHelpTopics { .. }
        )
    }
}

fn describe_topics(topics: &[String]) -> String {
    if topics.is_empty() {
        "no help topics".to_string()
    } else {
        format!("help topics\n\t{}", topics.join("\n\t"))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ExecError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_messages() {
        let dup = RegisterError::DuplicateName {
            name: "new".to_string(),
        };
        assert_eq!(dup.to_string(), "name already registered");
        assert_eq!(dup.name(), Some("new"));
        assert_eq!(
            RegisterError::NilHandler.to_string(),
            "cannot register nil command"
        );
        assert_eq!(RegisterError::NilHandler.name(), None);
    }

    #[test]
    fn test_exec_messages() {
        let missing = ExecError::MissingArguments {
            label: "todo".to_string(),
        };
        assert_eq!(missing.to_string(), "no command given");
        assert_eq!(missing.label(), Some("todo"));

        let unknown = ExecError::UnknownName {
            label: "todo".to_string(),
            name: "nope".to_string(),
        };
        assert_eq!(unknown.to_string(), "unknown command: nope");
        assert!(unknown.is_usage());
    }

    #[test]
    fn test_topic_listing() {
        let none = ExecError::NoHelpTopics {
            label: "todo help".to_string(),
            topics: Vec::new(),
        };
        assert_eq!(none.to_string(), "no help topics");

        let some = ExecError::NoHelpTopics {
            label: "todo help".to_string(),
            topics: vec!["new".to_string(), "list".to_string()],
        };
        assert_eq!(some.to_string(), "help topics\n\tnew\n\tlist");
    }

    #[test]
    fn test_handler_errors_are_not_usage() {
        let err = ExecError::from(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "disk full");
        assert!(!err.is_usage());
        assert_eq!(err.label(), None);
    }
}
