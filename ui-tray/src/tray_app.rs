use crate::i18n::{detect_lang_from_env, t, K};
use crate::settings_file::FileStore;

use clock::{ConfigFlag, MenuEntry, SelectionController};

use ksni::menu::{CheckmarkItem, MenuItem, StandardItem, SubMenu};
use ksni::{Status, ToolTip, Tray};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub struct WorldClockTray {
    state: Arc<Mutex<AppState>>,
}

pub struct AppState {
    controller: SelectionController<FileStore>,
    // Shared with the minute-tick thread.
    stop: Arc<AtomicBool>,
}

impl WorldClockTray {
    pub fn new(controller: SelectionController<FileStore>, stop: Arc<AtomicBool>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState { controller, stop })),
        }
    }

    fn toggle_zone(&self, id: &str) {
        let mut st = self.state.lock().unwrap();
        st.controller.toggle(id);
    }

    fn toggle_flag(&self, flag: ConfigFlag) {
        let mut st = self.state.lock().unwrap();
        let value = !st.controller.config().get(flag);
        st.controller.set_flag(flag, value);
    }

    fn quit_and_cleanup(&self) {
        let st = self.state.lock().unwrap();
        // Teardown order: stop the tick, take the final save, then exit.
        st.stop.store(true, Ordering::SeqCst);
        st.controller.save();
        log::info!(
            "disabling {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        std::process::exit(0);
    }
}

impl Tray for WorldClockTray {
    fn icon_name(&self) -> String {
        "preferences-system-time".to_string()
    }

    fn title(&self) -> String {
        self.state.lock().unwrap().controller.panel_label()
    }

    fn id(&self) -> String {
        "worldclock".to_string()
    }

    fn status(&self) -> Status {
        // Important: many SNI hosts (e.g. waybar) hide items with `Passive`
        // status. The clock label must stay visible at all times.
        Status::Active
    }

    fn tool_tip(&self) -> ToolTip {
        let lang = detect_lang_from_env();
        let st = self.state.lock().unwrap();
        let lines = st.controller.active_labels();

        let desc = if lines.is_empty() {
            t(lang, K::TooltipHint).to_string()
        } else {
            format!("{}\n\n{}", lines.join("\n"), t(lang, K::TooltipHint))
        };

        ToolTip {
            icon_name: self.icon_name(),
            title: t(lang, K::TooltipTitle).to_string(),
            description: desc,
            ..Default::default()
        }
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        let lang = detect_lang_from_env();
        let (model, config) = {
            let mut st = self.state.lock().unwrap();
            // A menu rebuild is the menu-open event: every cached label
            // refreshes and the transient filter resets.
            let model = st.controller.menu_model("");
            (model, st.controller.config())
        };

        let mut items: Vec<MenuItem<Self>> = vec![section(t(lang, K::ActiveClocks))];
        for entry in model.active {
            items.push(zone_item(entry, true));
        }

        items.push(MenuItem::Separator);
        items.push(section(t(lang, K::AddClocks)));
        for (region, entries) in by_region(model.inactive, t(lang, K::OtherZones)) {
            let submenu = entries.into_iter().map(|e| zone_item(e, false)).collect();
            items.push(MenuItem::SubMenu(SubMenu {
                label: region,
                submenu,
                ..Default::default()
            }));
        }

        items.push(MenuItem::Separator);
        items.push(section(t(lang, K::ConfigSection)));
        for (key, flag) in [
            (K::Format24, ConfigFlag::Format24),
            (K::ShowCity, ConfigFlag::ShowCity),
            (K::ShowTimezone, ConfigFlag::ShowTimezone),
        ] {
            items.push(MenuItem::Checkmark(CheckmarkItem {
                label: t(lang, key).into(),
                checked: config.get(flag),
                activate: Box::new(move |this: &mut Self| this.toggle_flag(flag)),
                ..Default::default()
            }));
        }

        items.push(MenuItem::Separator);
        items.push(MenuItem::Standard(StandardItem {
            label: t(lang, K::Quit).into(),
            activate: Box::new(|this: &mut Self| this.quit_and_cleanup()),
            ..Default::default()
        }));

        items
    }
}

// SNI menus have no captioned separators; a disabled item stands in.
fn section(label: &str) -> MenuItem<WorldClockTray> {
    MenuItem::Standard(StandardItem {
        label: label.to_string(),
        enabled: false,
        ..Default::default()
    })
}

fn zone_item(entry: MenuEntry, active: bool) -> MenuItem<WorldClockTray> {
    let id = entry.id;
    MenuItem::Checkmark(CheckmarkItem {
        label: entry.label,
        checked: active,
        activate: Box::new(move |this: &mut WorldClockTray| this.toggle_zone(id)),
        ..Default::default()
    })
}

/// Bucket inactive zones by leading region segment, one submenu each.
/// Slash-less ids (`UTC`, `GMT`, ...) gather under `other_label`. Entries
/// arrive sorted, so buckets and their contents stay sorted too.
fn by_region(entries: Vec<MenuEntry>, other_label: &str) -> Vec<(String, Vec<MenuEntry>)> {
    let mut regions: Vec<(String, Vec<MenuEntry>)> = Vec::new();
    let mut other: Vec<MenuEntry> = Vec::new();
    for entry in entries {
        match entry.id.split_once('/') {
            Some((region, _)) => match regions.iter_mut().find(|(r, _)| r.as_str() == region) {
                Some((_, bucket)) => bucket.push(entry),
                None => regions.push((region.to_string(), vec![entry])),
            },
            None => other.push(entry),
        }
    }
    if !other.is_empty() {
        regions.push((other_label.to_string(), other));
    }
    regions
}
