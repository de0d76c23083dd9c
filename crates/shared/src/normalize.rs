//! Location text normalization.
//!
//! Every write and lookup path canonicalizes country/region text the same
//! way so that the (country, region) uniqueness constraint compares like
//! with like.

/// Trims surrounding whitespace from a country name.
pub fn normalize_country(country: &str) -> String {
    country.trim().to_string()
}

/// Trims a region name, mapping absent / empty / whitespace-only input to
/// `None`. `None` represents the whole-country default zone.
pub fn normalize_region(region: Option<&str>) -> Option<String> {
    match region {
        Some(r) => {
            let trimmed = r.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_trims_whitespace() {
        assert_eq!(normalize_country("  India  "), "India");
        assert_eq!(normalize_country("India"), "India");
    }

    #[test]
    fn test_normalize_country_preserves_inner_spaces() {
        assert_eq!(normalize_country(" United States "), "United States");
    }

    #[test]
    fn test_normalize_region_trims() {
        assert_eq!(normalize_region(Some(" North ")), Some("North".to_string()));
    }

    #[test]
    fn test_normalize_region_empty_is_none() {
        assert_eq!(normalize_region(Some("")), None);
        assert_eq!(normalize_region(Some("   ")), None);
    }

    #[test]
    fn test_normalize_region_absent_is_none() {
        assert_eq!(normalize_region(None), None);
    }
}
