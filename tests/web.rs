// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use island_almanac::tracker::{KeyValueStore, load_mine, save_mine};
use island_almanac::web::BrowserStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "island_almanac_test";

#[wasm_bindgen_test]
fn local_storage_round_trips_collection() {
    let mut store = BrowserStore::open().unwrap();
    save_mine(&mut store, KEY, &[2, -1, 0]).unwrap();
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some(r#"{"mine":[2,-1,0]}"#));
    assert_eq!(load_mine(&store, KEY, 3), vec![2, -1, 0]);
}

#[wasm_bindgen_test]
fn local_storage_garbage_is_replaced() {
    let mut store = BrowserStore::open().unwrap();
    store.set(KEY, "{oops").unwrap();
    assert_eq!(load_mine(&store, KEY, 2), vec![-1, -1]);
}
