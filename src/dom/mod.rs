//! Browser wiring (wasm32 only)
//!
//! Everything that touches `window`/`document` lives here. Each submodule
//! measures or mutates the page and defers decisions to the pure modules
//! (`nav`, `reveal`, `contact`, `notify`, ...).
//!
//! Missing optional elements are not errors: the matching wiring logs at
//! debug level and is skipped.

mod clipboard;
mod contact;
mod effects;
mod navigation;
mod notify;
mod reveal;
mod scheduler;

pub use scheduler::BrowserScheduler;

use crate::config::{Config, CONFIG_ELEMENT_ID};
use crate::logging::{self, LogBuffer};
use crate::scheduler::Scheduler;
use crate::scroll::ScrollCoordinator;
use crate::startup::{run_isolated, wiring_step};
use anyhow::{anyhow, Context, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

thread_local! {
    static LOG_BUFFER: RefCell<Option<LogBuffer>> = const { RefCell::new(None) };
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a thrown JS value into an error
pub(crate) fn js_err(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(s) => anyhow!(s),
        None => anyhow!("{:?}", value),
    }
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

pub(crate) fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| anyhow!("window has no document"))
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` in the document
pub(crate) fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>> {
    doc.query_selector_all(selector)
        .map(collect)
        .map_err(js_err)
        .with_context(|| format!("invalid selector {:?}", selector))
}

/// First element matching `selector`, if any
pub(crate) fn query(doc: &Document, selector: &str) -> Result<Option<Element>> {
    doc.query_selector(selector)
        .map_err(js_err)
        .with_context(|| format!("invalid selector {:?}", selector))
}

/// Layout height of the first match, 0 if absent
pub(crate) fn offset_height(doc: &Document, selector: &str) -> f64 {
    query(doc, selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Attach a listener for the page's lifetime
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)
        .with_context(|| format!("failed to listen for {}", event))?;
    closure.forget();
    Ok(())
}

/// Add a class; logged and ignored on failure
pub(crate) fn add_class(el: &Element, class: &str) {
    if let Err(e) = el.class_list().add_1(class) {
        tracing::warn!("Failed to add class {}: {:?}", class, e);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

/// Entry point called from the wasm start function
pub fn boot() -> Result<()> {
    let window = window()?;
    let doc = document(&window)?;

    let inline = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (config, config_error) = Config::load(inline.as_deref());

    let buffer = logging::init(&config.logging);
    LOG_BUFFER.with(|slot| *slot.borrow_mut() = Some(buffer));
    if let Some(e) = config_error {
        tracing::error!("Ignoring page config, using defaults: {:#}", e);
    }

    effects::capture_page_errors(&window)?;

    let config = Rc::new(config);
    if doc.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_doc = doc.clone();
        let mut pending = Some(config);
        listen(&doc, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.take() {
                if let Err(e) = init(&ready_window, &ready_doc, config) {
                    tracing::error!("Page init failed: {:#}", e);
                }
            }
        })?;
        Ok(())
    } else {
        init(&window, &doc, config)
    }
}

/// Wire every component; each one fails on its own
fn init(window: &Window, doc: &Document, config: Rc<Config>) -> Result<()> {
    crate::startup::log_startup(&config);

    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));

    run_isolated(vec![
        wiring_step("navigation", || navigation::wire(window, doc, &config.navigation)),
        wiring_step("reveal", || reveal::wire(doc, &config, scheduler.clone())),
        wiring_step("contact", || {
            contact::wire(window, doc, &config.contact, scheduler.clone())
        }),
        wiring_step("copy", || {
            clipboard::wire_contact_items(doc, &config, scheduler.clone())
        }),
        wiring_step("load", || effects::wire_load(window, doc, &config, scheduler.clone())),
    ]);

    let frame_window = window.clone();
    let frame_doc = doc.clone();
    let frame_config = config.clone();
    let coordinator = ScrollCoordinator::new(scheduler, move || {
        frame_update(&frame_window, &frame_doc, &frame_config)
    });
    listen(window, "scroll", move |_| {
        coordinator.on_scroll();
    })?;

    tracing::info!("Portfolio loaded successfully!");
    Ok(())
}

/// The coalesced per-frame scroll work
fn frame_update(window: &Window, doc: &Document, config: &Config) {
    if config.features.scroll_reveal {
        if let Err(e) = reveal::reveal_in_view(window, doc, &config.reveal) {
            tracing::warn!("Scroll reveal failed: {:#}", e);
        }
    }
    if let Err(e) = navigation::update_active_link(window, doc, &config.navigation) {
        tracing::warn!("Nav highlight failed: {:#}", e);
    }
    if config.features.parallax {
        effects::apply_parallax(window, doc, config.features.parallax_speed);
    }
}

/// Recent log lines, oldest first
#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> String {
    LOG_BUFFER.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(LogBuffer::dump)
            .unwrap_or_default()
    })
}

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Append `html` inside a fresh `<div>` on the body
#[cfg(test)]
pub(crate) fn fixture(html: &str) -> Element {
    let doc = window().and_then(|w| document(&w)).expect("test page has a document");
    let root = doc.create_element("div").expect("create fixture root");
    root.set_inner_html(html);
    doc.body()
        .expect("test page has a body")
        .append_child(&root)
        .expect("attach fixture");
    root
}
