//! Static region table used to populate the city/district selects.
//!
//! Not derived from storage.

/// Cities with their districts, in display order
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "경기",
        &[
            "평택", "안양", "파주", "의정부", "고양", "부천", "수원", "김포", "화성", "하남시",
            "광주시",
        ],
    ),
    ("강원", &["원주", "춘천"]),
];

/// Cities in display order
pub fn cities() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|(city, _)| *city)
}

/// Districts of a city, empty for unknown cities
pub fn districts(city: &str) -> &'static [&'static str] {
    REGIONS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, districts)| *districts)
        .unwrap_or(&[])
}

pub fn is_known_region(city: &str, district: &str) -> bool {
    districts(city).contains(&district)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        assert_eq!(cities().collect::<Vec<_>>(), vec!["경기", "강원"]);
        assert_eq!(districts("강원"), &["원주", "춘천"]);
        assert_eq!(districts("경기").len(), 11);
        assert_eq!(districts("경기")[0], "평택");
        assert!(districts("서울").is_empty());
        assert!(districts("").is_empty());

        assert!(is_known_region("경기", "수원"));
        assert!(!is_known_region("강원", "수원"));
    }
}
