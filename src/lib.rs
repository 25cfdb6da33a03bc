// Folio - interactive behavior for a single-page portfolio
//
// Compiled to wasm and loaded by the portfolio page. Everything that decides
// *what* happens is plain Rust and tested natively; the `dom` module only
// measures the page and applies the results.
//
// Architecture:
// - Config: inline TOML read from the page, falling back to defaults
// - Navigation: smooth anchor scrolling and the active nav link
// - Reveal: intersection observers, skill bar/card/logo cascades
// - Scroll: one coalesced update per animation frame
// - Contact: form validation, mailto hand-off or simulated send
// - Notify/clipboard: click-to-copy with stacked toasts
// - Scheduler: timers and frames behind a trait so timelines are testable

pub mod clipboard;
pub mod config;
pub mod contact;
pub mod logging;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod stagger;
pub mod startup;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::recent_logs;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Module entry point, run by the wasm-bindgen glue on instantiation
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    dom::boot().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
