//! Fish list filtering.
//!
//! Three independent inclusion filters (month, size, habitat) over the
//! species catalogue. Each filter is a fixed array indexed by its domain, so
//! every key is always present. A [`FishView`] owns the filter and the
//! currently visible rows and recomputes them on every toggle.

use chrono::Datelike;
use strum::EnumCount;

use crate::catalogue::{Habitat, Month, Size, SpeciesRecord};

/// A single filter bit flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterToggle {
    Month(Month),
    Size(Size),
    Habitat(Habitat),
}

impl FilterToggle {
    /// Text key for markup, e.g. `month:3`, `size:6`, `habitat:river_mouth`.
    pub fn key(self) -> String {
        match self {
            Self::Month(m) => format!("month:{}", m.number()),
            Self::Size(s) => format!("size:{}", s.number()),
            Self::Habitat(h) => format!("habitat:{}", h.as_ref()),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let (kind, value) = key.split_once(':')?;
        match kind {
            "month" => value.parse().ok().and_then(Month::new).map(Self::Month),
            "size" => value.parse().ok().and_then(Size::from_number).map(Self::Size),
            "habitat" => value.parse().ok().map(Self::Habitat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    months: [bool; Month::COUNT],
    sizes: [bool; Size::COUNT],
    habitats: [bool; Habitat::COUNT],
}

impl FilterState {
    /// Only `current` selected for months; every size and habitat selected.
    pub fn new(current: Month) -> Self {
        let mut months = [false; Month::COUNT];
        months[current.index()] = true;
        Self {
            months,
            sizes: [true; Size::COUNT],
            habitats: [true; Habitat::COUNT],
        }
    }

    /// Defaults for the local calendar month.
    pub fn for_today() -> Self {
        let now = chrono::Local::now();
        Self::new(Month::wrapping(now.month() as u8))
    }

    /// Everything selected.
    pub fn all() -> Self {
        Self {
            months: [true; Month::COUNT],
            sizes: [true; Size::COUNT],
            habitats: [true; Habitat::COUNT],
        }
    }

    pub fn toggle(&mut self, toggle: FilterToggle) {
        let slot = match toggle {
            FilterToggle::Month(m) => &mut self.months[m.index()],
            FilterToggle::Size(s) => &mut self.sizes[s.index()],
            FilterToggle::Habitat(h) => &mut self.habitats[h.index()],
        };
        *slot = !*slot;
    }

    pub fn month_enabled(&self, month: Month) -> bool {
        self.months[month.index()]
    }

    pub fn size_enabled(&self, size: Size) -> bool {
        self.sizes[size.index()]
    }

    pub fn habitat_enabled(&self, habitat: Habitat) -> bool {
        self.habitats[habitat.index()]
    }

    pub fn is_enabled(&self, toggle: FilterToggle) -> bool {
        match toggle {
            FilterToggle::Month(m) => self.month_enabled(m),
            FilterToggle::Size(s) => self.size_enabled(s),
            FilterToggle::Habitat(h) => self.habitat_enabled(h),
        }
    }

    /// The month column is narrowed (not every month selected).
    pub fn month_filtered(&self) -> bool {
        !self.months.iter().all(|on| *on)
    }

    pub fn size_filtered(&self) -> bool {
        !self.sizes.iter().all(|on| *on)
    }

    pub fn habitat_filtered(&self) -> bool {
        !self.habitats.iter().all(|on| *on)
    }

    pub fn admits(&self, record: &SpeciesRecord) -> bool {
        if !self.size_enabled(record.size) {
            return false;
        }
        if !self.habitat_enabled(record.habitat) {
            return false;
        }
        record
            .living_months
            .iter()
            .any(|range| range.months().any(|m| self.month_enabled(m)))
    }

    /// Rows of `catalogue` passing every filter, in catalogue order.
    pub fn apply<'a>(&self, catalogue: &'a [SpeciesRecord]) -> Vec<&'a SpeciesRecord> {
        catalogue.iter().filter(|r| self.admits(r)).collect()
    }
}

/// Filter state plus the rows it currently admits.
#[derive(Debug)]
pub struct FishView<'a> {
    catalogue: &'a [SpeciesRecord],
    filter: FilterState,
    visible: Vec<&'a SpeciesRecord>,
}

impl<'a> FishView<'a> {
    pub fn new(catalogue: &'a [SpeciesRecord], filter: FilterState) -> Self {
        let visible = filter.apply(catalogue);
        Self {
            catalogue,
            filter,
            visible,
        }
    }

    pub fn toggle(&mut self, toggle: FilterToggle) {
        self.filter.toggle(toggle);
        self.visible = self.filter.apply(self.catalogue);
        log::debug!(
            "filter {toggle:?} -> {}, {} of {} rows visible",
            self.filter.is_enabled(toggle),
            self.visible.len(),
            self.catalogue.len()
        );
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible(&self) -> &[&'a SpeciesRecord] {
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{HourRange, MonthRange};

    fn month(n: u8) -> Month {
        Month::new(n).unwrap()
    }

    fn only_months(months: &[u8]) -> FilterState {
        let mut state = FilterState::all();
        for m in Month::all() {
            if !months.contains(&m.number()) {
                state.toggle(FilterToggle::Month(m));
            }
        }
        state
    }

    static WINTER: SpeciesRecord = SpeciesRecord {
        name: "winter",
        living_months: &[MonthRange::new(11, 3)],
        appear_time: &[&[HourRange::new(0, 23)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 900,
    };

    #[test]
    fn new_selects_only_the_current_month() {
        let state = FilterState::new(month(6));
        for m in Month::all() {
            assert_eq!(state.month_enabled(m), m.number() == 6);
        }
        assert!(state.month_filtered());
        assert!(!state.size_filtered());
        assert!(!state.habitat_filtered());
    }

    #[test]
    fn toggle_flips_one_bit() {
        let mut state = FilterState::all();
        state.toggle(FilterToggle::Habitat(Habitat::Dock));
        assert!(!state.habitat_enabled(Habitat::Dock));
        assert!(state.habitat_enabled(Habitat::Sea));
        assert!(state.habitat_filtered());
        state.toggle(FilterToggle::Habitat(Habitat::Dock));
        assert_eq!(state, FilterState::all());
    }

    #[test]
    fn wrapping_season_matches_winter_months_only() {
        for m in [12, 1, 2, 3, 11] {
            assert!(only_months(&[m]).admits(&WINTER), "month {m}");
        }
        assert!(!only_months(&[4, 5, 6, 7, 8, 9, 10]).admits(&WINTER));
    }

    #[test]
    fn size_and_habitat_exclude_before_months() {
        let mut state = FilterState::all();
        state.toggle(FilterToggle::Size(Size::Small));
        assert!(!state.admits(&WINTER));
        let mut state = FilterState::all();
        state.toggle(FilterToggle::Habitat(Habitat::River));
        assert!(!state.admits(&WINTER));
    }

    #[test]
    fn toggle_keys_round_trip() {
        use strum::IntoEnumIterator;
        let toggles = Month::all()
            .map(FilterToggle::Month)
            .chain(Size::iter().map(FilterToggle::Size))
            .chain(Habitat::iter().map(FilterToggle::Habitat));
        for toggle in toggles {
            assert_eq!(FilterToggle::from_key(&toggle.key()), Some(toggle));
        }
        assert_eq!(FilterToggle::Habitat(Habitat::RiverMouth).key(), "habitat:river_mouth");
        assert_eq!(FilterToggle::from_key("month:13"), None);
        assert_eq!(FilterToggle::from_key("size:0"), None);
        assert_eq!(FilterToggle::from_key("habitat:lake"), None);
        assert_eq!(FilterToggle::from_key("month"), None);
    }

    #[test]
    fn fish_view_recomputes_on_toggle() {
        let catalogue = crate::catalogue::fish();
        let mut view = FishView::new(catalogue, FilterState::all());
        assert_eq!(view.visible().len(), catalogue.len());
        view.toggle(FilterToggle::Habitat(Habitat::Pond));
        assert!(view.visible().iter().all(|r| r.habitat != Habitat::Pond));
        assert!(view.visible().len() < catalogue.len());
        view.toggle(FilterToggle::Habitat(Habitat::Pond));
        assert_eq!(view.visible().len(), catalogue.len());
    }
}
