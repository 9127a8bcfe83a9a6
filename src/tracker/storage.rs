//! Persisted collection state.
//!
//! One record per storage key: `{"mine":[-1,0,3,...]}`. Only the owned-count
//! vector is written; a comparison is never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::NOT_OWNED;
use crate::{Error, Result};

/// Synchronous string key-value storage (browser `localStorage` or in-memory).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// A store whose writes fail, like storage disabled by the browser.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage(format!("{key} is read-only")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedCollection {
    #[serde(alias = "my")]
    mine: Vec<i32>,
}

/// Reads the owned-count vector for a catalogue of `len` rows.
///
/// Absent, unreadable, malformed, wrong-length, or out-of-range data all
/// yield a fresh all-`-1` vector.
pub fn load_mine(store: &impl KeyValueStore, key: &str, len: usize) -> Vec<i32> {
    let fresh = || vec![NOT_OWNED; len];
    let text = match store.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => return fresh(),
        Err(err) => {
            log::warn!("could not read {key}: {err}");
            return fresh();
        }
    };
    let record: PersistedCollection = match serde_json::from_str(&text) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("discarding malformed {key}: {err}");
            return fresh();
        }
    };
    if record.mine.len() != len {
        log::warn!(
            "discarding {key}: {} rows saved, catalogue has {len}",
            record.mine.len()
        );
        return fresh();
    }
    if let Some(bad) = record.mine.iter().find(|v| **v < NOT_OWNED) {
        log::warn!("discarding {key}: invalid count {bad}");
        return fresh();
    }
    record.mine
}

pub fn save_mine(store: &mut impl KeyValueStore, key: &str, mine: &[i32]) -> Result<()> {
    let text = serde_json::to_string(&PersistedCollection {
        mine: mine.to_vec(),
    })?;
    store.set(key, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "fossil_data";

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        save_mine(&mut store, KEY, &[3, -1, 0]).unwrap();
        assert_eq!(store.raw(KEY), Some(r#"{"mine":[3,-1,0]}"#));
        assert_eq!(load_mine(&store, KEY, 3), vec![3, -1, 0]);
    }

    #[test]
    fn absent_record_is_all_not_owned() {
        assert_eq!(load_mine(&MemoryStore::new(), KEY, 4), vec![-1; 4]);
    }

    #[test]
    fn corrupted_records_fall_back() {
        for text in ["{", "null", r#"{"mine":"x"}"#, r#"{"mine":[1,2]}"#, r#"{"mine":[1,-2,0]}"#] {
            let store = MemoryStore::with_entry(KEY, text);
            assert_eq!(load_mine(&store, KEY, 3), vec![-1; 3], "input {text}");
        }
    }

    #[test]
    fn legacy_field_name_is_accepted() {
        let store = MemoryStore::with_entry(KEY, r#"{"my":[1,0,-1]}"#);
        assert_eq!(load_mine(&store, KEY, 3), vec![1, 0, -1]);
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let mut store = MemoryStore::read_only();
        assert!(matches!(save_mine(&mut store, KEY, &[1]), Err(Error::Storage(_))));
    }
}
