use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The three persisted display preferences.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConfigFlag {
    Format24,
    ShowCity,
    ShowTimezone,
}

impl ConfigFlag {
    pub fn from_name(name: &str) -> Option<ConfigFlag> {
        match name {
            "format24" => Some(ConfigFlag::Format24),
            "show_city" => Some(ConfigFlag::ShowCity),
            "show_timezone" => Some(ConfigFlag::ShowTimezone),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigFlag::Format24 => "format24",
            ConfigFlag::ShowCity => "show_city",
            ConfigFlag::ShowTimezone => "show_timezone",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format24: bool,
    pub show_city: bool,
    pub show_timezone: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format24: true,
            show_city: true,
            show_timezone: false,
        }
    }
}

impl DisplayConfig {
    pub fn get(&self, flag: ConfigFlag) -> bool {
        match flag {
            ConfigFlag::Format24 => self.format24,
            ConfigFlag::ShowCity => self.show_city,
            ConfigFlag::ShowTimezone => self.show_timezone,
        }
    }

    pub fn set(&mut self, flag: ConfigFlag, value: bool) {
        match flag {
            ConfigFlag::Format24 => self.format24 = value,
            ConfigFlag::ShowCity => self.show_city = value,
            ConfigFlag::ShowTimezone => self.show_timezone = value,
        }
    }

    /// Validating setter for callers holding a flag name rather than the
    /// enum. Unrecognized names are rejected, state untouched.
    pub fn set_by_name(&mut self, name: &str, value: bool) -> Result<(), Error> {
        match ConfigFlag::from_name(name) {
            Some(flag) => {
                self.set(flag, value);
                Ok(())
            }
            None => Err(Error::InvalidConfigFlag(name.to_string())),
        }
    }
}
