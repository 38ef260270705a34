use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Identifier the timezone provider cannot resolve. Catalog ids always
    /// resolve; this guards labels computed for arbitrary strings.
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),

    #[error("unknown config flag {0:?}")]
    InvalidConfigFlag(String),

    /// Settings store missing or corrupt. Callers treat this as an empty
    /// store after logging it.
    #[error("settings unavailable: {0}")]
    SettingsUnavailable(String),
}
