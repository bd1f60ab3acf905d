//! Thread-safe name to command table.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::Command;
use crate::error::RegisterError;

/// Initial capacity used by [`DispatchTable::new`].
const DEFAULT_CAPACITY: usize = 5;

#[derive(Default)]
struct Entries {
    /// Bound commands by name.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Names in registration order. Same key set as `commands`.
    names: Vec<String>,
}

/// Shared mapping from name to command.
///
/// The map and the ordered name list sit behind a single lock and change
/// together, so a reader never sees a name without its command or the
/// reverse. There is no way to remove a binding.
pub struct DispatchTable {
    entries: RwLock<Entries>,
}

impl DispatchTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty table with room for `capacity` names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries {
                commands: HashMap::with_capacity(capacity),
                names: Vec::with_capacity(capacity),
            }),
        }
    }

    /// Bind `name` to `command`.
    ///
    /// Fails without touching the table if the name is already bound. Of two
    /// racing registrations for one name exactly one succeeds.
    pub fn register(
        &self,
        name: impl Into<String>,
        command: Arc<dyn Command>,
    ) -> Result<(), RegisterError> {
        let name = name.into();
        let mut entries = self.entries.write();
        if entries.commands.contains_key(&name) {
            return Err(RegisterError::DuplicateName { name });
        }
        entries.names.push(name.clone());
        entries.commands.insert(name, command);
        Ok(())
    }

    /// Look up the command bound to `name`.
    ///
    /// The lock is released before this returns, so the caller may run the
    /// command while other threads keep registering.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.entries.read().commands.get(name).cloned()
    }

    /// Snapshot of the bound names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().names.clone()
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().commands.contains_key(name)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.entries.read().names.len()
    }

    /// Whether nothing is bound yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("names", &self.entries.read().names)
            .finish()
    }
}
