//! Error type shared by the catalogue, filter, tracker and browser layers.
//!
//! Nothing here is fatal to the page: every variant is either recovered from
//! (malformed persisted state), rejected with the previous state retained
//! (malformed user input), or shown to the user as a notification.

use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A comma-separated vector contained a token that is not a base-10 integer.
    #[error("invalid number {token:?} at position {position}")]
    InvalidToken {
        /// The offending token, untrimmed.
        token: String,
        /// Zero-based position of the token in the list.
        position: usize,
    },

    /// A replacement collection vector does not line up with the catalogue.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An owned count below the "not owned" sentinel.
    #[error("value {value} at position {position} is below -1")]
    CountOutOfRange { position: usize, value: i32 },

    #[error("row {index} does not exist (catalogue has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Key-value storage get/set failed.
    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The embedded fossil table could not be decoded.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A browser API or DOM node is unavailable.
    #[error("dom error: {0}")]
    Dom(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl Error {
    /// Wraps a JS exception value raised by a browser call.
    pub fn from_js(kind: fn(String) -> Self, value: &JsValue) -> Self {
        kind(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
