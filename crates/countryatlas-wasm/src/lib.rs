//! countryatlas-wasm — WebAssembly bindings for countryatlas-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `countryatlas-core`. The page performs the network fetch with its own
//! `fetch()` primitive and hands the `/v3.1/all` JSON to the module once;
//! search, detail and border queries then run in WASM against the in-memory
//! set.
//!
//! What it provides
//! ----------------
//! - One-time initialization from fetched JSON: `load_countries(json)`
//! - Basic queries: `country_count()`, `country_name(code)`
//! - Explorer helpers returning JSON-serializable objects:
//!   - `search_countries("united")` — listing cards, filtered
//!   - `country_detail("DEU")` — the detail view's field set
//!   - `borders_of("CHE")` — border codes for the navigation chips
//!   - `locate("JPN")` — coordinate pair for the map preview
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_countries, search_countries, country_detail } from 'countryatlas-wasm';
//!
//! async function main() {
//!   await init();
//!   const response = await fetch('https://restcountries.com/v3.1/all');
//!   const loaded = load_countries(await response.text());
//!   console.log('Countries:', loaded);
//!
//!   const cards = search_countries('united');
//!   console.log(cards);
//!
//!   const detail = country_detail('DEU');
//!   // detail.borders drives the border buttons; feed a code back into
//!   // country_detail() to pivot.
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - `load_countries` initializes the set once per module instance; a page
//!   reload starts fresh, which matches how the data is meant to live.
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

// Core Imports
use countryatlas_core::api::{CountryCard, CountryDetail};
use countryatlas_core::prelude::*;
use serde_wasm_bindgen::to_value;

// Static Instance: one country set per module instance.
static ATLAS: OnceLock<DefaultAtlas> = OnceLock::new();

fn atlas() -> Option<&'static DefaultAtlas> {
    ATLAS.get()
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/* --------------------------------------------------------------------------
   Initialization
-------------------------------------------------------------------------- */

/// Initialize the module from an `/all`-style JSON payload.
///
/// Returns the number of countries loaded. Calling it again is a no-op that
/// reports the already-loaded count.
#[wasm_bindgen]
pub fn load_countries(json: &str) -> std::result::Result<usize, JsValue> {
    if let Some(existing) = atlas() {
        return Ok(existing.country_count());
    }

    let raw = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("countries payload did not parse: {e}")))?;
    let built: DefaultAtlas = build_atlas(raw);
    let count = built.country_count();

    let stored = ATLAS.get_or_init(|| built);
    web_sys::console::log_1(&format!("✓ Loaded {} countries", stored.country_count()).into());

    Ok(count)
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn country_count() -> usize {
    atlas().map(|a| a.country_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn country_name(code: &str) -> Option<String> {
    atlas()?.find_by_code(code).map(|c| c.name().to_string())
}

/* --------------------------------------------------------------------------
   Listing Search
-------------------------------------------------------------------------- */

/// Filtered listing cards. An empty query returns every card.
#[wasm_bindgen]
pub fn search_countries(query: &str) -> JsValue {
    let Some(db) = atlas() else {
        return js_sys::Array::new().into();
    };

    let array = js_sys::Array::new();
    for country in db.filter_by_name(query) {
        if let Ok(v) = to_value(&CountryCard(country)) {
            array.push(&v);
        }
    }
    array.into()
}

/* --------------------------------------------------------------------------
   Detail View
-------------------------------------------------------------------------- */

/// The detail view's field set for one code, or `null` when unknown.
#[wasm_bindgen]
pub fn country_detail(code: &str) -> JsValue {
    match atlas().and_then(|db| db.find_by_code(code)) {
        Some(country) => to_value(&CountryDetail(country)).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Border codes for the navigation chips, or an empty array.
#[wasm_bindgen]
pub fn borders_of(code: &str) -> JsValue {
    let array = js_sys::Array::new();
    if let Some(country) = atlas().and_then(|db| db.find_by_code(code)) {
        for border in country.borders() {
            array.push(&JsValue::from_str(border.as_ref()));
        }
    }
    array.into()
}

/* --------------------------------------------------------------------------
   Location Preview
-------------------------------------------------------------------------- */

/// Coordinate pair for the map preview, or `null` when the record has none.
#[wasm_bindgen]
pub fn locate(code: &str) -> JsValue {
    match atlas().and_then(|db| db.find_by_code(code)).and_then(|c| c.latlng()) {
        Some(pos) => to_value(&pos).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
