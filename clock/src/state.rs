use crate::catalog::DEFAULT_ZONE;
use crate::config::DisplayConfig;
use crate::settings::Snapshot;

/// One catalog zone and its presentation state.
#[derive(Debug, Clone)]
pub struct ZoneEntry {
    pub id: &'static str,
    // Lowercased once at construction; the filter runs on every rebuild.
    lower_id: String,
    pub active: bool,
    /// Cached full menu label. Derived, refreshed on every menu rebuild,
    /// never the source of truth.
    pub label: Option<String>,
}

impl ZoneEntry {
    fn new(id: &'static str) -> Self {
        Self {
            id,
            lower_id: id.to_lowercase(),
            active: id == DEFAULT_ZONE,
            label: None,
        }
    }
}

/// The whole selection model: the ordered entry list, the display flags
/// and the transient filter text. Lives for the widget's enabled span.
pub struct ClockState {
    entries: Vec<ZoneEntry>,
    pub config: DisplayConfig,
    filter: String,
}

impl ClockState {
    /// Entries sorted by id ascending, with only [`DEFAULT_ZONE`] active.
    pub fn new(catalog: &[&'static str]) -> Self {
        let mut ids = catalog.to_vec();
        ids.sort_unstable();
        ids.dedup();
        Self {
            entries: ids.into_iter().map(ZoneEntry::new).collect(),
            config: DisplayConfig::default(),
            filter: String::new(),
        }
    }

    /// Overlay persisted state. A non-empty persisted active list replaces
    /// the default selection entirely; an empty one keeps the UTC default.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        if !snapshot.timezones.is_empty() {
            for entry in &mut self.entries {
                entry.active = snapshot.timezones.iter().any(|id| id == entry.id);
            }
        }
        self.config = snapshot.config;
    }

    /// The persisted form of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            timezones: self.active_entries().map(|e| e.id.to_string()).collect(),
            config: self.config,
        }
    }

    /// Silent no-op on ids outside the catalog.
    pub fn set_active(&mut self, id: &str, active: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.active = active;
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id && e.active)
    }

    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [ZoneEntry] {
        &mut self.entries
    }

    pub fn active_entries(&self) -> impl Iterator<Item = &ZoneEntry> {
        self.entries.iter().filter(|e| e.active)
    }

    /// Inactive entries whose id contains `filter` case-insensitively,
    /// in catalog order. An empty filter matches everything.
    pub fn inactive_entries_matching<'a>(
        &'a self,
        filter: &str,
    ) -> impl Iterator<Item = &'a ZoneEntry> {
        let needle = filter.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| !e.active && e.lower_id.contains(&needle))
    }

    /// Transient menu filter text. Not persisted; reset on menu rebuild.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &[
        "America/New_York",
        "Asia/Tokyo",
        "Europe/London",
        "Europe/Warsaw",
        "UTC",
    ];

    #[test]
    fn fresh_state_has_only_utc_active() {
        let state = ClockState::new(CATALOG);
        let active: Vec<&str> = state.active_entries().map(|e| e.id).collect();
        assert_eq!(active, vec!["UTC"]);
    }

    #[test]
    fn entries_are_sorted_even_from_an_unsorted_catalog() {
        let state = ClockState::new(&["UTC", "Asia/Tokyo", "Europe/London"]);
        let ids: Vec<&str> = state.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["Asia/Tokyo", "Europe/London", "UTC"]);
    }

    #[test]
    fn non_empty_snapshot_replaces_the_default_selection() {
        let mut state = ClockState::new(CATALOG);
        state.apply_snapshot(&Snapshot {
            timezones: vec!["Asia/Tokyo".to_string(), "Europe/London".to_string()],
            config: DisplayConfig::default(),
        });
        let active: Vec<&str> = state.active_entries().map(|e| e.id).collect();
        // UTC loses its default slot; it was not in the persisted set.
        assert_eq!(active, vec!["Asia/Tokyo", "Europe/London"]);
    }

    #[test]
    fn empty_snapshot_keeps_the_utc_default() {
        let mut state = ClockState::new(CATALOG);
        state.apply_snapshot(&Snapshot::default());
        let active: Vec<&str> = state.active_entries().map(|e| e.id).collect();
        assert_eq!(active, vec!["UTC"]);
    }

    #[test]
    fn set_active_ignores_unknown_ids() {
        let mut state = ClockState::new(CATALOG);
        state.set_active("Mars/Olympus_Mons", true);
        assert_eq!(state.active_entries().count(), 1);
    }

    #[test]
    fn filter_matches_case_insensitive_substrings() {
        let state = ClockState::new(CATALOG);
        let hits: Vec<&str> = state.inactive_entries_matching("lon").map(|e| e.id).collect();
        assert_eq!(hits, vec!["Europe/London"]);
    }

    #[test]
    fn empty_filter_matches_all_inactive_entries() {
        let state = ClockState::new(CATALOG);
        // Everything except the active UTC entry.
        assert_eq!(state.inactive_entries_matching("").count(), CATALOG.len() - 1);
    }

    #[test]
    fn active_entries_never_show_up_in_the_filter_result() {
        let mut state = ClockState::new(CATALOG);
        state.set_active("Europe/London", true);
        assert_eq!(state.inactive_entries_matching("lon").count(), 0);
    }
}
