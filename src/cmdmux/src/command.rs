//! The handler abstraction.

use std::sync::Arc;

use crate::error::Result;

/// A named unit of behavior invoked with a label and the remaining arguments.
///
/// `label` is a human-readable breadcrumb made of the tokens consumed so far
/// (`"todo new"`); it is meant for diagnostics and must not be parsed.
/// `args` holds the tokens after the command's own name.
///
/// Plain functions and closures with the signature
/// `Fn(&str, &[String]) -> Result<()>` are commands through a blanket impl.
/// A [`Mux`](crate::Mux) is a command too, which is how sub-command trees are
/// built.
pub trait Command: Send + Sync {
    /// Run the command.
    fn exec(&self, label: &str, args: &[String]) -> Result<()>;
}

impl<F> Command for F
where
    F: Fn(&str, &[String]) -> Result<()> + Send + Sync,
{
    fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        self(label, args)
    }
}

/// A command that can also describe itself.
///
/// Registering a `HelpCommand` through
/// [`HelpMux::register_helpful`](crate::HelpMux::register_helpful) binds both
/// the command and a help topic under the same name.
pub trait HelpCommand: Command {
    /// Print help for the command.
    fn exec_help(&self, label: &str, args: &[String]) -> Result<()>;
}

/// Exposes the help side of a [`HelpCommand`] as a plain [`Command`].
pub(crate) struct HelpOf<T: ?Sized>(pub(crate) Arc<T>);

impl<T> Command for HelpOf<T>
where
    T: HelpCommand + ?Sized,
{
    fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        self.0.exec_help(label, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    struct Greeter {
        calls: Mutex<Vec<String>>,
    }

    impl Command for Greeter {
        fn exec(&self, label: &str, _args: &[String]) -> Result<()> {
            self.calls.lock().push(format!("exec {label}"));
            Ok(())
        }
    }

    impl HelpCommand for Greeter {
        fn exec_help(&self, label: &str, _args: &[String]) -> Result<()> {
            self.calls.lock().push(format!("help {label}"));
            Ok(())
        }
    }

    #[test]
    fn test_closure_is_command() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cmd = move |label: &str, args: &[String]| -> Result<()> {
            sink.lock().push(format!("{label}:{}", args.join(",")));
            Ok(())
        };

        Command::exec(&cmd, "todo new", &["quinoa".to_string()]).unwrap();
        assert_eq!(*seen.lock(), vec!["todo new:quinoa".to_string()]);
    }

    #[test]
    fn test_help_adapter_calls_help_side() {
        let greeter = Arc::new(Greeter {
            calls: Mutex::new(Vec::new()),
        });
        let help = HelpOf(Arc::clone(&greeter));

        help.exec("app help greet", &[]).unwrap();
        greeter.exec("app greet", &[]).unwrap();

        assert_eq!(
            *greeter.calls.lock(),
            vec!["help app help greet".to_string(), "exec app greet".to_string()]
        );
    }
}
