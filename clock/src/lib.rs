// Selection state and label rendering for the world-clock tray.
//
// Keeping this in a library crate separates the model from the SNI
// presenter in `ui-tray` and keeps it testable without a tray host.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod label;
pub mod settings;
pub mod state;

pub use catalog::{zone_catalog, DEFAULT_ZONE};
pub use config::{ConfigFlag, DisplayConfig};
pub use controller::{MenuEntry, MenuModel, SelectionController};
pub use error::Error;
pub use label::{city_name, zone_label, zone_label_at};
pub use settings::{MemoryStore, SettingsStore, Snapshot};
pub use state::{ClockState, ZoneEntry};
