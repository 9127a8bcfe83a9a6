// Integration tests for catalogue invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use island_almanac::catalogue::{Month, fish, fossils};

#[test]
fn fish_entries_are_unique_and_valid() {
    let mut seen = HashSet::new();
    for record in fish() {
        assert!(seen.insert(record.name), "duplicate fish '{}'", record.name);
        assert!(!record.living_months.is_empty(), "'{}' has no season", record.name);
        assert_eq!(
            record.living_months.len(),
            record.appear_time.len(),
            "'{}' seasons and appear times are not aligned",
            record.name
        );
        for range in record.living_months {
            assert!(
                Month::new(range.start).is_some() && Month::new(range.end).is_some(),
                "'{}' has month range {:?} outside 1-12",
                record.name,
                range
            );
        }
        for hours in record.appear_time {
            assert!(!hours.is_empty(), "'{}' has an empty appear time", record.name);
            for range in *hours {
                assert!(
                    range.start < 24 && range.end < 24,
                    "'{}' has hour range {:?} outside 0-23",
                    record.name,
                    range
                );
            }
        }
        assert!(record.price > 0, "'{}' has no price", record.name);
    }
}

#[test]
fn fish_table_has_split_seasons_and_wrapping_ranges() {
    assert!(fish().iter().any(|r| r.living_months.len() > 1));
    assert!(fish().iter().any(|r| r.living_months.iter().any(|m| m.end < m.start)));
    assert!(
        fish()
            .iter()
            .any(|r| r.appear_time.iter().flat_map(|h| h.iter()).any(|h| h.end < h.start))
    );
}

#[test]
fn every_month_has_some_fish() {
    for month in Month::all() {
        assert!(
            fish().iter().any(|r| r.in_season(month)),
            "no fish in month {}",
            month.number()
        );
    }
}

#[test]
fn fossil_entries_are_unique_and_named_in_every_language() {
    let table = fossils();
    assert!(!table.is_empty());
    let mut seen = HashSet::new();
    for record in table {
        assert!(seen.insert(record.en.as_str()), "duplicate fossil '{}'", record.en);
        assert!(!record.ko.is_empty(), "'{}' has no Korean name", record.en);
        assert!(!record.ja.is_empty(), "'{}' has no Japanese name", record.en);
        assert!(record.price > 0, "'{}' has no price", record.en);
    }
}
