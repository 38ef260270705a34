use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::DisplayConfig;
use crate::error::Error;

/// Last path segment of an IANA id, underscores spaced out.
/// `America/New_York` becomes `New York`.
pub fn city_name(id: &str) -> String {
    id.rsplit('/').next().unwrap_or(id).replace('_', " ")
}

/// Render one zone's label against the current wall clock.
///
/// `full` forces the raw identifier and the abbreviation regardless of the
/// display flags; the menu uses it so entries stay recognizable.
pub fn zone_label(id: &str, config: &DisplayConfig, full: bool) -> Result<String, Error> {
    zone_label_at(id, config, full, Utc::now())
}

/// Same as [`zone_label`] at an explicit instant.
///
/// The result keeps its surrounding whitespace: when the name part is
/// empty the label starts with the offset part's space. The aggregate
/// panel label is trimmed once after joining, not per entry.
pub fn zone_label_at(
    id: &str,
    config: &DisplayConfig,
    full: bool,
    now: DateTime<Utc>,
) -> Result<String, Error> {
    let tz: Tz = id
        .parse()
        .map_err(|_| Error::UnknownTimezone(id.to_string()))?;
    let local = now.with_timezone(&tz);

    let name = if full {
        id.to_string()
    } else if config.show_city {
        city_name(id)
    } else {
        String::new()
    };

    let offset = if full || config.show_timezone {
        format!(" {} ", local.format("%Z"))
    } else {
        " ".to_string()
    };

    let time = if config.format24 {
        local.format("%H:%M").to_string()
    } else {
        local.format("%-I:%M %p").to_string()
    };

    Ok(format!("{name}{offset}{time}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        // Mid-June, so Europe/London sits on BST (+01:00).
        Utc.with_ymd_and_hms(2023, 6, 15, h, m, 0).unwrap()
    }

    #[test]
    fn city_name_takes_last_segment_and_spaces_underscores() {
        assert_eq!(city_name("Europe/London"), "London");
        assert_eq!(city_name("America/New_York"), "New York");
        assert_eq!(city_name("America/Argentina/Buenos_Aires"), "Buenos Aires");
        assert_eq!(city_name("UTC"), "UTC");
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = zone_label_at("Nowhere/Atlantis", &DisplayConfig::default(), false, at(12, 0))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTimezone(_)));
    }

    #[test]
    fn default_config_shows_city_and_24_hour_time() {
        let label =
            zone_label_at("Europe/London", &DisplayConfig::default(), false, at(13, 5)).unwrap();
        assert_eq!(label, "London 14:05");
    }

    #[test]
    fn full_label_uses_raw_id_and_abbreviation() {
        let label =
            zone_label_at("Europe/London", &DisplayConfig::default(), true, at(13, 5)).unwrap();
        assert_eq!(label, "Europe/London BST 14:05");
    }

    #[test]
    fn twelve_hour_time_has_no_leading_zero() {
        let config = DisplayConfig {
            format24: false,
            ..DisplayConfig::default()
        };
        let label = zone_label_at("UTC", &config, false, at(13, 5)).unwrap();
        assert_eq!(label, "UTC 1:05 PM");
        let label = zone_label_at("UTC", &config, false, at(0, 30)).unwrap();
        assert_eq!(label, "UTC 12:30 AM");
    }

    #[test]
    fn hidden_city_leaves_a_leading_space() {
        let config = DisplayConfig {
            show_city: false,
            ..DisplayConfig::default()
        };
        let label = zone_label_at("UTC", &config, false, at(9, 0)).unwrap();
        assert_eq!(label, " 09:00");
    }

    #[test]
    fn show_timezone_wraps_the_abbreviation_in_spaces() {
        let config = DisplayConfig {
            show_timezone: true,
            ..DisplayConfig::default()
        };
        let label = zone_label_at("Europe/London", &config, false, at(13, 5)).unwrap();
        assert_eq!(label, "London BST 14:05");
    }
}
