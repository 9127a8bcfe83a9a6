//! Fossil collection tracker.
//!
//! Holds the player's owned-count vector (`mine`, persisted after every
//! change) and an optional comparison vector (`compare`, read from and
//! written back to the page address, never persisted). Each catalogue row is
//! classified for display by comparing the two.
//!
//! Counts use `-1` for "not owned" and `0..` for "owned, with that many spares".

use crate::{Error, Result};

mod location;
mod storage;
mod vector;

pub use location::{
    COMPARE_PARAM, MemoryLocation, ShareLocation, build_share_url, query_param, with_param,
};
pub use storage::{KeyValueStore, MemoryStore, load_mine, save_mine};
pub use vector::{CompareCell, join, parse_lenient, parse_strict};

/// The "not owned" sentinel.
pub const NOT_OWNED: i32 = -1;

/// Row highlight when a comparison is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Neutral,
    /// I have spares, they do not own it.
    MineOnly,
    /// They have spares, I do not own it.
    TheirsOnly,
}

/// How an owned count is shown in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDisplay {
    NotOwned,
    /// Owned with no spares.
    Owned,
    Count(i32),
    Unknown,
}

impl CountDisplay {
    pub fn of(value: i32) -> Self {
        match value {
            NOT_OWNED => Self::NotOwned,
            0 => Self::Owned,
            v if v > 0 => Self::Count(v),
            _ => Self::Unknown,
        }
    }

    pub fn of_cell(cell: CompareCell) -> Self {
        cell.known().map_or(Self::Unknown, Self::of)
    }
}

/// What the presentation layer needs for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub mine: CountDisplay,
    /// `None` when no comparison is active.
    pub compare: Option<CountDisplay>,
    pub highlight: Highlight,
}

/// A user action against the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerAction {
    Increment(usize),
    Decrement(usize),
    /// Full replacement of `mine` from comma-separated text.
    SetMine(String),
    /// Replacement of `compare` from comma-separated text; empty text clears it.
    SetCompare(String),
}

/// Storage key and query parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub storage_key: String,
    pub compare_param: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            storage_key: "fossil_data".to_string(),
            compare_param: COMPARE_PARAM.to_string(),
        }
    }
}

pub struct CollectionTracker<S, L> {
    store: S,
    location: L,
    settings: TrackerSettings,
    mine: Vec<i32>,
    compare: Option<Vec<CompareCell>>,
}

impl<S: KeyValueStore, L: ShareLocation> CollectionTracker<S, L> {
    /// Restores `mine` for a catalogue of `len` rows and reads `compare` from the address.
    pub fn load(store: S, location: L, len: usize, settings: TrackerSettings) -> Self {
        let mine = load_mine(&store, &settings.storage_key, len);
        let compare = query_param(&location.query(), &settings.compare_param).map(|text| {
            let cells = parse_lenient(&text);
            let unknown = cells.iter().filter(|c| **c == CompareCell::Unknown).count();
            if unknown > 0 {
                log::warn!("{unknown} unreadable cells in {}", settings.compare_param);
            }
            cells
        });
        log::info!(
            "collection loaded: {} rows, {} owned, comparison {}",
            mine.len(),
            mine.iter().filter(|v| **v >= 0).count(),
            if compare.is_some() { "active" } else { "off" }
        );
        Self {
            store,
            location,
            settings,
            mine,
            compare,
        }
    }

    pub fn apply(&mut self, action: TrackerAction) -> Result<()> {
        log::debug!("tracker action {action:?}");
        match action {
            TrackerAction::Increment(index) => self.increment(index),
            TrackerAction::Decrement(index) => self.decrement(index),
            TrackerAction::SetMine(text) => self.set_mine(&text),
            TrackerAction::SetCompare(text) => self.set_compare(&text),
        }
    }

    pub fn increment(&mut self, index: usize) -> Result<()> {
        let slot = self.slot(index)?;
        *slot = slot.saturating_add(1);
        self.persist();
        Ok(())
    }

    /// Never goes below "not owned": 0 and -1 both become -1.
    pub fn decrement(&mut self, index: usize) -> Result<()> {
        let slot = self.slot(index)?;
        *slot = (*slot - 1).max(NOT_OWNED);
        self.persist();
        Ok(())
    }

    /// Replaces `mine` wholesale. Rejected text leaves the current vector untouched.
    pub fn set_mine(&mut self, text: &str) -> Result<()> {
        let values = parse_strict(text)?;
        if values.len() != self.mine.len() {
            return Err(Error::LengthMismatch {
                expected: self.mine.len(),
                actual: values.len(),
            });
        }
        if let Some((position, value)) = values.iter().enumerate().find(|(_, v)| **v < NOT_OWNED) {
            return Err(Error::CountOutOfRange {
                position,
                value: *value,
            });
        }
        self.mine = values;
        self.persist();
        Ok(())
    }

    /// Replaces `compare` and rewrites the address so it can be shared.
    /// Empty text turns the comparison off. Rejected text changes nothing.
    pub fn set_compare(&mut self, text: &str) -> Result<()> {
        let compare = if text.trim().is_empty() {
            None
        } else {
            Some(parse_strict(text)?)
        };
        let param = compare.as_deref().map(join);
        self.compare = compare.map(|values| values.into_iter().map(CompareCell::Known).collect());
        let query = with_param(
            &self.location.query(),
            &self.settings.compare_param,
            param.as_deref(),
        );
        if let Err(err) = self.location.replace_query(&query) {
            log::error!("could not rewrite address: {err}");
        }
        Ok(())
    }

    pub fn mine(&self) -> &[i32] {
        &self.mine
    }

    pub fn compare(&self) -> Option<&[CompareCell]> {
        self.compare.as_deref()
    }

    pub fn mine_text(&self) -> String {
        join(&self.mine)
    }

    pub fn compare_text(&self) -> String {
        self.compare.as_deref().map(join).unwrap_or_default()
    }

    pub fn highlight(&self, index: usize) -> Highlight {
        let Some(compare) = &self.compare else {
            return Highlight::Neutral;
        };
        let mine = self.mine.get(index).copied().unwrap_or(NOT_OWNED);
        let theirs = compare.get(index).copied().unwrap_or(CompareCell::Unknown);
        match (mine, theirs) {
            (m, CompareCell::Known(NOT_OWNED)) if m > 0 => Highlight::MineOnly,
            (NOT_OWNED, CompareCell::Known(t)) if t > 0 => Highlight::TheirsOnly,
            _ => Highlight::Neutral,
        }
    }

    pub fn row(&self, index: usize) -> RowView {
        RowView {
            index,
            mine: self
                .mine
                .get(index)
                .copied()
                .map_or(CountDisplay::Unknown, CountDisplay::of),
            compare: self.compare.as_ref().map(|cells| {
                CountDisplay::of_cell(cells.get(index).copied().unwrap_or(CompareCell::Unknown))
            }),
            highlight: self.highlight(index),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView> + '_ {
        (0..self.mine.len()).map(|index| self.row(index))
    }

    /// Address at which another player sees my collection as their comparison.
    pub fn share_url(&self) -> String {
        format!(
            "{}{}?{}={}",
            self.location.origin(),
            self.location.path(),
            self.settings.compare_param,
            self.mine_text()
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    fn slot(&mut self, index: usize) -> Result<&mut i32> {
        let len = self.mine.len();
        self.mine
            .get_mut(index)
            .ok_or(Error::RowOutOfRange { index, len })
    }

    fn persist(&mut self) {
        if let Err(err) = save_mine(&mut self.store, &self.settings.storage_key, &self.mine) {
            log::error!("could not save collection: {err}");
        }
    }
}
