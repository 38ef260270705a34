use chrono_tz::TZ_VARIANTS;

/// The one zone active on a first-ever run.
pub const DEFAULT_ZONE: &str = "UTC";

/// Every IANA identifier the timezone provider knows, sorted ascending.
pub fn zone_catalog() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_unique() {
        let ids = zone_catalog();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn catalog_contains_the_default_zone() {
        assert!(zone_catalog().contains(&DEFAULT_ZONE));
    }
}
