//! Todo list commands.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use cmdmux::{Command, HelpCommand, HelpMux, RegisterError, Result};
use parking_lot::Mutex;
use tracing::debug;

/// Items every fresh list starts with.
const SEED_ITEMS: &[&str] = &["milk", "eggs", "motor boat"];

/// In-memory todo list shared by the commands.
#[derive(Debug)]
pub struct TodoList {
    items: Mutex<Vec<String>>,
}

impl TodoList {
    /// A list holding the seed items.
    pub fn seeded() -> Self {
        Self {
            items: Mutex::new(SEED_ITEMS.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn push(&self, item: String) {
        self.items.lock().push(item);
    }

    fn remove(&self, position: usize) -> Option<String> {
        let mut items = self.items.lock();
        (position < items.len()).then(|| items.remove(position))
    }

    fn snapshot(&self) -> Vec<String> {
        self.items.lock().clone()
    }
}

/// `new <item...>`
struct NewCommand {
    list: Arc<TodoList>,
    program: String,
}

impl Command for NewCommand {
    fn exec(&self, label: &str, args: &[String]) -> Result<()> {
        if args.is_empty() {
            return Err(anyhow!("{label}: nothing to create").into());
        }
        let item = args.join(" ");
        debug!(item = %item, "creating todo");
        println!("created: {item}");
        self.list.push(item);
        Ok(())
    }
}

impl HelpCommand for NewCommand {
    fn exec_help(&self, _label: &str, _args: &[String]) -> Result<()> {
        println!("{}", usage(&self.program, "new <item...>"));
        println!();
        println!("Add an item to the list.");
        Ok(())
    }
}

fn usage(program: &str, synopsis: &str) -> String {
    format!("usage: {program} {synopsis}")
}

fn print_list(list: &TodoList) -> Result<()> {
    for item in list.snapshot() {
        println!("{item}");
    }
    Ok(())
}

fn list_help(program: &str) -> Result<()> {
    println!("{}", usage(program, "list"));
    println!();
    println!("Print every item, oldest first.");
    Ok(())
}

fn done(list: &TodoList, label: &str, args: &[String]) -> Result<()> {
    let [position] = args else {
        return Err(anyhow!("{label}: expected exactly one item number").into());
    };
    let number: usize = position
        .parse()
        .with_context(|| format!("{label}: invalid item number {position:?}"))?;
    let item = number
        .checked_sub(1)
        .and_then(|index| list.remove(index))
        .with_context(|| format!("{label}: no item {number}"))?;
    println!("done: {item}");
    Ok(())
}

/// Wire the todo commands and help topics into a [`HelpMux`].
///
/// `program` is the name shown in usage lines. `done` deliberately has no
/// help topic.
pub fn build(
    program: &str,
    list: Arc<TodoList>,
) -> std::result::Result<HelpMux, RegisterError> {
    let mux = HelpMux::new();

    mux.register_helpful(
        "new",
        NewCommand {
            list: Arc::clone(&list),
            program: program.to_string(),
        },
    )?;

    let for_list = Arc::clone(&list);
    let program = program.to_string();
    mux.register_with_help(
        "list",
        move |_: &str, _: &[String]| -> Result<()> { print_list(&for_list) },
        Some(Arc::new(move |_: &str, _: &[String]| -> Result<()> {
            list_help(&program)
        })),
    )?;

    mux.register_func("done", move |label, args| done(&list, label, args))?;

    Ok(mux)
}
