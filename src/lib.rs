//! Island Almanac core crate.
//!
//! Two independent views over static game data:
//! - the fish catalogue, filtered by month, habitat and shadow size
//!   ([`filter`]);
//! - the fossil collection tracker, persisted to `localStorage` and compared
//!   against another player's collection carried in the page address
//!   ([`tracker`]).
//!
//! The logic modules are plain Rust and run natively under `cargo test`; the
//! [`web`] module is the browser glue exported through `start_app()`.

use wasm_bindgen::prelude::*;

pub mod catalogue;
pub mod config;
mod error;
pub mod filter;
pub mod i18n;
pub mod tracker;
pub mod web;

pub use error::{Error, Result};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        // A second init (module re-instantiated) keeps the first logger.
        let _ = console_log::init_with_level(level);
    }
}

/// Mounts the view selected by `options`, a JSON object of [`config::AppConfig`]
/// fields. Blank options mount the fossil tracker into `#app`.
#[wasm_bindgen]
pub fn start_app(options: &str) -> std::result::Result<(), JsValue> {
    let config = config::AppConfig::from_json(options)?;
    log::info!("starting {:?} view in #{}", config.view, config.root_id);
    web::start(&config)?;
    Ok(())
}

/// `<origin><path>?compare=<text>` for sharing a collection.
#[wasm_bindgen]
pub fn share_url(origin: &str, path: &str, text: &str) -> String {
    tracker::build_share_url(origin, path, text)
}
