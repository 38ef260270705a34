use std::path::PathBuf;

use clock::{Error, SettingsStore, Snapshot};

/// Toml-backed settings store. Every save rewrites the whole file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_path() -> Self {
        Self::new(settings_path())
    }
}

pub fn settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
    base.join("worldclock").join("settings.toml")
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Snapshot, Error> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            // Never written yet: same as an empty store.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Snapshot::default()),
            Err(e) => {
                return Err(Error::SettingsUnavailable(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        toml::from_str(&text).map_err(|e| {
            Error::SettingsUnavailable(format!("parse {}: {e}", self.path.display()))
        })
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::SettingsUnavailable(format!("create {}: {e}", parent.display()))
            })?;
        }
        let text = toml::to_string_pretty(snapshot)
            .map_err(|e| Error::SettingsUnavailable(format!("encode settings: {e}")))?;
        std::fs::write(&self.path, text).map_err(|e| {
            Error::SettingsUnavailable(format!("write {}: {e}", self.path.display()))
        })
    }
}
