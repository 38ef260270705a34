use chrono::{DateTime, Utc};
use log::warn;

use crate::config::{ConfigFlag, DisplayConfig};
use crate::error::Error;
use crate::label::{zone_label, zone_label_at};
use crate::settings::SettingsStore;
use crate::state::{ClockState, ZoneEntry};

/// Panel label when no zone is active.
const EMPTY_LABEL: &str = "...";
/// Gap between zones in the panel label.
const LABEL_GAP: &str = "    ";

/// One renderable menu row.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: String,
}

/// What the presenter renders on menu open: freshly labelled active and
/// inactive entries, both in catalog order.
#[derive(Debug, Clone, Default)]
pub struct MenuModel {
    pub active: Vec<MenuEntry>,
    pub inactive: Vec<MenuEntry>,
}

/// Glue between the selection state, the settings store and the panel.
/// Every mutation persists the full snapshot before returning.
pub struct SelectionController<S> {
    state: ClockState,
    store: S,
}

impl<S: SettingsStore> SelectionController<S> {
    /// Build the default state from the catalog, then overlay whatever
    /// the store holds. An unavailable store is logged and treated as
    /// empty, so the widget always comes up.
    pub fn new(catalog: &[&'static str], store: S) -> Self {
        let mut state = ClockState::new(catalog);
        match store.load() {
            Ok(snapshot) => state.apply_snapshot(&snapshot),
            Err(e) => warn!("starting from defaults: {e}"),
        }
        Self { state, store }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn config(&self) -> DisplayConfig {
        self.state.config
    }

    /// Flip one zone in or out of the panel. Unknown ids do nothing.
    pub fn toggle(&mut self, id: &str) {
        let active = self.state.is_active(id);
        self.state.set_active(id, !active);
        self.persist();
    }

    pub fn set_flag(&mut self, flag: ConfigFlag, value: bool) {
        self.state.config.set(flag, value);
        self.persist();
    }

    /// Name-validating variant of [`Self::set_flag`]. On an unknown name
    /// nothing is persisted and the flags stay untouched.
    pub fn set_flag_by_name(&mut self, name: &str, value: bool) -> Result<(), Error> {
        self.state.config.set_by_name(name, value)?;
        self.persist();
        Ok(())
    }

    /// The always-visible aggregate label: every active zone with
    /// `full=false`, joined and trimmed once. `"..."` when nothing is
    /// active. A zone that fails to format is skipped, not fatal.
    pub fn panel_label(&self) -> String {
        self.panel_label_at(Utc::now())
    }

    pub fn panel_label_at(&self, now: DateTime<Utc>) -> String {
        let config = &self.state.config;
        let parts: Vec<String> = self
            .state
            .active_entries()
            .filter_map(|e| match zone_label_at(e.id, config, false, now) {
                Ok(label) => Some(label),
                Err(err) => {
                    warn!("skipping {} in panel label: {err}", e.id);
                    None
                }
            })
            .collect();
        let text = parts.join(LABEL_GAP);
        let text = text.trim();
        if text.is_empty() {
            EMPTY_LABEL.to_string()
        } else {
            text.to_string()
        }
    }

    /// Fresh `full=true` labels for the active zones, one per line in the
    /// tooltip.
    pub fn active_labels(&self) -> Vec<String> {
        let config = &self.state.config;
        self.state
            .active_entries()
            .filter_map(|e| zone_label(e.id, config, true).ok())
            .collect()
    }

    /// Recompute every entry's cached full label and partition the list
    /// for the menu. Runs in full on every menu open and filter change;
    /// the list is bounded by the catalog, so no diffing.
    pub fn menu_model(&mut self, filter: &str) -> MenuModel {
        self.state.set_filter(filter);
        let config = self.state.config;
        for entry in self.state.entries_mut() {
            entry.label = match zone_label(entry.id, &config, true) {
                Ok(label) => Some(label),
                Err(err) => {
                    warn!("skipping {} in menu: {err}", entry.id);
                    None
                }
            };
        }
        MenuModel {
            active: self.state.active_entries().filter_map(menu_entry).collect(),
            inactive: self
                .state
                .inactive_entries_matching(filter)
                .filter_map(menu_entry)
                .collect(),
        }
    }

    /// Final save on the way out; also the save behind every mutation.
    pub fn save(&self) {
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state.snapshot()) {
            warn!("failed to save settings: {e}");
        }
    }
}

fn menu_entry(entry: &ZoneEntry) -> Option<MenuEntry> {
    entry.label.as_ref().map(|label| MenuEntry {
        id: entry.id,
        label: label.clone(),
    })
}
