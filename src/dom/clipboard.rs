// Click-to-copy contact items
//
// The async Clipboard API is reached through `Reflect` so a missing
// `navigator.clipboard` (plain http, old browsers) is an outcome, not a crash.

use super::{js_err, listen, query_all};
use crate::clipboard::CopyOutcome;
use crate::config::Config;
use super::notify::DomToastSurface;
use crate::notify::Notifier;
use crate::scheduler::Scheduler;
use anyhow::Result;
use js_sys::{Function, Promise, Reflect};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlElement};

const CONTACT_ITEM: &str = ".contact-item";

/// Write `text` to the system clipboard
pub async fn write_text(text: &str) -> CopyOutcome {
    let Some(window) = web_sys::window() else {
        return CopyOutcome::Unsupported;
    };
    let navigator = window.navigator();
    let clipboard = match Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return CopyOutcome::Unsupported,
    };
    let Ok(write) = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .and_then(|f| f.dyn_into::<Function>().map_err(JsValue::from))
    else {
        return CopyOutcome::Unsupported;
    };

    let promise = match write
        .call1(&clipboard, &JsValue::from_str(text))
        .and_then(|p| p.dyn_into::<Promise>().map_err(JsValue::from))
    {
        Ok(promise) => promise,
        Err(e) => return CopyOutcome::failed(format!("{:#}", js_err(e))),
    };

    match JsFuture::from(promise).await {
        Ok(_) => CopyOutcome::copied(text),
        Err(e) => CopyOutcome::failed(format!("{:#}", js_err(e))),
    }
}

/// Make each contact item copy its text on click
pub fn wire_contact_items(
    doc: &Document,
    config: &Config,
    scheduler: Rc<dyn Scheduler>,
) -> Result<()> {
    if !config.features.copy_contacts {
        return Ok(());
    }
    let toasts = Rc::new(DomToastSurface::new(doc, &config.notification)?);
    let notifier = Notifier::new(config.notification.clone(), toasts, scheduler);

    let items = query_all(doc, CONTACT_ITEM)?;
    for item in &items {
        let Some(text) = item
            .query_selector("span")
            .map_err(js_err)?
            .and_then(|span| span.text_content())
        else {
            tracing::debug!("Contact item without text, skipping");
            continue;
        };

        if let Some(el) = item.dyn_ref::<HtmlElement>() {
            el.set_title(&config.notification.copy_hint);
            if let Err(e) = el.style().set_property("cursor", "pointer") {
                tracing::warn!("Failed to set cursor: {:?}", e);
            }
        }

        let notifier = notifier.clone();
        listen(item, "click", move |_| {
            let text = text.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let outcome = write_text(&text).await;
                outcome.log();
                notifier.show(outcome.toast_message(notifier.config()));
            });
        })?;
    }
    tracing::debug!(count = items.len(), "Contact items wired");
    Ok(())
}
