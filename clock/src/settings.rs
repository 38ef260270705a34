use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::Error;

/// Everything that survives a restart: the active ids (in catalog order)
/// and the display flags. Saves always rewrite the whole snapshot.
///
/// Unknown keys in persisted data are ignored and missing keys fall back
/// to defaults, so a file written by a newer version still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub timezones: Vec<String>,
    pub config: DisplayConfig,
}

/// Durable home for a [`Snapshot`].
///
/// A store that was never written loads as the default snapshot; a
/// corrupt one fails with [`Error::SettingsUnavailable`].
pub trait SettingsStore {
    fn load(&self) -> Result<Snapshot, Error>;
    fn save(&self, snapshot: &Snapshot) -> Result<(), Error>;
}

/// In-memory store. Used by tests; keeps the widget functional when no
/// durable location exists.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: RefCell<Snapshot>,
}

impl MemoryStore {
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RefCell::new(snapshot),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Snapshot, Error> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), Error> {
        *self.snapshot.borrow_mut() = snapshot.clone();
        Ok(())
    }
}
