//! Static game catalogues: catchable fish and collectable fossils.
//!
//! Both tables are loaded once and never mutated. Row index is the implicit
//! identifier used by the collection tracker, so row order is part of the
//! persisted format and must not be reshuffled.

use serde::Deserialize;
use strum::{AsRefStr, EnumCount, EnumIter, EnumString};

use crate::i18n::Language;

mod fish;
mod fossil;

pub use fish::FISH;
pub use fossil::parse_fossil_table;

// --- Calendar -----------------------------------------------------------------

/// Calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub const COUNT: usize = 12;

    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Reduces a position on the repeating year into 1–12. A remainder of 0 is December.
    pub const fn wrapping(position: u8) -> Self {
        match position % 12 {
            0 => Self(12),
            r => Self(r),
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot for array-indexed filters.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Self)
    }
}

/// Hour of day, 0 through 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    pub const fn new(hour: u8) -> Option<Self> {
        if hour < 24 { Some(Self(hour)) } else { None }
    }

    pub const fn wrapping(position: u8) -> Self {
        Self(position % 24)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Inclusive month range. `end < start` wraps over the new year (11 → 3 is Nov..Mar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: u8,
    pub end: u8,
}

impl MonthRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Every month covered, in order starting from `start`.
    pub fn months(self) -> impl Iterator<Item = Month> {
        let end = if self.end < self.start {
            self.end + 12
        } else {
            self.end
        };
        (self.start..=end).map(Month::wrapping)
    }

    pub fn contains(self, month: Month) -> bool {
        self.months().any(|m| m == month)
    }

    pub const fn is_all_year(self) -> bool {
        self.start == 1 && self.end == 12
    }
}

/// Inclusive hour range. `end < start` wraps past midnight (21 → 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

impl HourRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn hours(self) -> impl Iterator<Item = Hour> {
        let end = if self.end < self.start {
            self.end + 24
        } else {
            self.end
        };
        (self.start..=end).map(Hour::wrapping)
    }

    pub fn contains(self, hour: Hour) -> bool {
        self.hours().any(|h| h == hour)
    }

    pub const fn is_all_day(self) -> bool {
        self.start == 0 && self.end == 23
    }
}

// --- Fish ---------------------------------------------------------------------

/// Where a species can be caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Habitat {
    River,
    RiverMouth,
    /// River above a cliff.
    Waterfall,
    Pond,
    Sea,
    Dock,
}

impl Habitat {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Shadow size, ordinal small to very large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount)]
#[repr(u8)]
pub enum Size {
    Small = 1,
    SlightlySmall = 2,
    Medium = 3,
    SlightlyLarge = 4,
    Large = 5,
    VeryLarge = 6,
}

impl Size {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        (self as u8 - 1) as usize
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Small),
            2 => Some(Self::SlightlySmall),
            3 => Some(Self::Medium),
            4 => Some(Self::SlightlyLarge),
            5 => Some(Self::Large),
            6 => Some(Self::VeryLarge),
            _ => None,
        }
    }
}

/// One catchable species.
#[derive(Debug)]
pub struct SpeciesRecord {
    pub name: &'static str,
    /// Seasons; a split season (spring and fall run) has two entries.
    pub living_months: &'static [MonthRange],
    /// Hours of day per season, index-aligned with `living_months`.
    pub appear_time: &'static [&'static [HourRange]],
    pub habitat: Habitat,
    pub size: Size,
    pub price: u32,
}

impl SpeciesRecord {
    pub fn in_season(&self, month: Month) -> bool {
        self.living_months.iter().any(|r| r.contains(month))
    }

    /// True when the species is out at `hour` during `month`. The hour ranges
    /// consulted are the ones paired with the season containing `month`.
    pub fn catchable_at(&self, month: Month, hour: Hour) -> bool {
        self.living_months
            .iter()
            .zip(self.appear_time.iter())
            .any(|(season, hours)| season.contains(month) && hours.iter().any(|h| h.contains(hour)))
    }
}

pub fn fish() -> &'static [SpeciesRecord] {
    FISH
}

// --- Fossils ------------------------------------------------------------------

/// One collectable fossil with its display name per language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FossilRecord {
    pub en: String,
    pub ko: String,
    pub ja: String,
    pub price: u32,
}

impl FossilRecord {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ko => &self.ko,
            Language::Ja => &self.ja,
        }
    }
}

/// The fossil table, decoded from the embedded CSV on first use.
pub fn fossils() -> &'static [FossilRecord] {
    fossil::table()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(range: MonthRange) -> Vec<u8> {
        range.months().map(Month::number).collect()
    }

    #[test]
    fn wrapping_month_range_crosses_new_year() {
        assert_eq!(months(MonthRange::new(11, 3)), vec![11, 12, 1, 2, 3]);
    }

    #[test]
    fn plain_month_range_is_inclusive() {
        assert_eq!(months(MonthRange::new(4, 6)), vec![4, 5, 6]);
        assert_eq!(months(MonthRange::new(7, 7)), vec![7]);
        assert_eq!(MonthRange::new(1, 12).months().count(), 12);
    }

    #[test]
    fn wrapping_hour_range_crosses_midnight() {
        let hours: Vec<u8> = HourRange::new(21, 4).hours().map(Hour::number).collect();
        assert_eq!(hours, vec![21, 22, 23, 0, 1, 2, 3, 4]);
        assert!(HourRange::new(16, 9).contains(Hour::new(0).unwrap()));
        assert!(!HourRange::new(16, 9).contains(Hour::new(12).unwrap()));
    }

    #[test]
    fn month_wrapping_maps_zero_remainder_to_december() {
        assert_eq!(Month::wrapping(12).number(), 12);
        assert_eq!(Month::wrapping(13).number(), 1);
        assert_eq!(Month::wrapping(24).number(), 12);
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
    }

    #[test]
    fn size_numbers_round_trip() {
        use strum::IntoEnumIterator;
        for size in Size::iter() {
            assert_eq!(Size::from_number(size.number()), Some(size));
        }
        assert_eq!(Size::from_number(7), None);
    }

    #[test]
    fn catchable_at_uses_the_matching_season_hours() {
        static SPLIT: SpeciesRecord = SpeciesRecord {
            name: "split",
            living_months: &[MonthRange::new(3, 6), MonthRange::new(9, 11)],
            appear_time: &[&[HourRange::new(16, 21)], &[HourRange::new(4, 21)]],
            habitat: Habitat::River,
            size: Size::Medium,
            price: 1,
        };
        let april = Month::new(4).unwrap();
        let october = Month::new(10).unwrap();
        let eight = Hour::new(8).unwrap();
        assert!(!SPLIT.catchable_at(april, eight));
        assert!(SPLIT.catchable_at(october, eight));
        assert!(!SPLIT.catchable_at(Month::new(7).unwrap(), Hour::new(18).unwrap()));
    }
}
