// Page effects - parallax, load intro and global error capture

use super::{add_class, listen, query_all};
use crate::config::Config;
use crate::scheduler::Scheduler;
use crate::scroll::parallax_offset;
use anyhow::{Context, Result};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, ErrorEvent, HtmlElement, Window};

const PARALLAX_TARGET: &str = ".about-visual";
const LOADED_CLASS: &str = "loaded";

/// Shift the about visuals against the scroll direction
pub fn apply_parallax(window: &Window, doc: &Document, speed: f64) {
    let Ok(scroll_y) = window.scroll_y() else {
        return;
    };
    let Ok(targets) = query_all(doc, PARALLAX_TARGET) else {
        return;
    };
    let transform = format!("translateY({}px)", parallax_offset(scroll_y, speed));
    for el in targets {
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            continue;
        };
        if let Err(e) = el.style().set_property("transform", &transform) {
            tracing::warn!("Failed to apply parallax: {:?}", e);
        }
    }
}

/// Mark the body loaded and stagger in the about intro on window load
///
/// The wasm module can finish instantiating after `load` has fired; in that
/// case the load work runs immediately.
pub fn wire_load(
    window: &Window,
    doc: &Document,
    config: &Config,
    scheduler: Rc<dyn Scheduler>,
) -> Result<()> {
    let doc = doc.clone();
    let intro = config.features.load_intro;
    let stagger = config.stagger.intro();
    let selector = format!(".about-section .{}", config.reveal.fade_class);
    let visible = config.reveal.visible_class.clone();

    let on_load = move || {
        if let Some(body) = doc.body() {
            add_class(&body, LOADED_CLASS);
        }
        if !intro {
            return;
        }
        match query_all(&doc, &selector) {
            Ok(elements) => {
                let visible = visible.clone();
                let count = stagger.run(scheduler.as_ref(), elements, move |el| {
                    add_class(&el, &visible)
                });
                tracing::debug!(count, "Intro scheduled");
            }
            Err(e) => tracing::warn!("Intro skipped: {:#}", e),
        }
    };

    if window.document().map(|d| d.ready_state()).as_deref() == Some("complete") {
        on_load();
        Ok(())
    } else {
        listen(window, "load", move |_| on_load())
    }
}

/// Route uncaught page errors into the log
pub fn capture_page_errors(window: &Window) -> Result<()> {
    listen(window, "error", |event| {
        match event.dyn_ref::<ErrorEvent>() {
            Some(err) => tracing::error!(
                file = %err.filename(),
                line = err.lineno(),
                "Error: {}",
                err.message()
            ),
            None => tracing::error!("Error: {:?}", event.type_()),
        }
    })
    .context("error capture unavailable")
}
