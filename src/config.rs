//! Runtime options passed from the hosting page to `start_app`.

use serde::Deserialize;

use crate::Result;
use crate::i18n::Language;
use crate::tracker::{COMPARE_PARAM, TrackerSettings};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Fish,
    #[default]
    Fossil,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view: View,
    pub language: Language,
    /// Id of the element the view is rendered into.
    pub root_id: String,
    pub storage_key: String,
    pub compare_param: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            language: Language::default(),
            root_id: "app".to_string(),
            storage_key: "fossil_data".to_string(),
            compare_param: COMPARE_PARAM.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a JSON object of options; blank input means all defaults.
    pub fn from_json(options: &str) -> Result<Self> {
        if options.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(options)?)
    }

    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            storage_key: self.storage_key.clone(),
            compare_param: self.compare_param.clone(),
        }
    }
}
