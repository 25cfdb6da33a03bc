// Toast surface - fixed-position notification elements appended to <body>

use super::js_err;
use crate::config::NotificationConfig;
use crate::notify::{toast_style, ToastId, ToastSurface};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub struct DomToastSurface {
    doc: Document,
    config: NotificationConfig,
    live: RefCell<HashMap<ToastId, HtmlElement>>,
}

impl DomToastSurface {
    pub fn new(doc: &Document, config: &NotificationConfig) -> Result<Self> {
        doc.body().context("document has no body")?;
        Ok(Self {
            doc: doc.clone(),
            config: config.clone(),
            live: RefCell::new(HashMap::new()),
        })
    }

    fn create(&self, message: &str, top_px: u32) -> Result<HtmlElement> {
        let el = self
            .doc
            .create_element("div")
            .map_err(js_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
        el.set_class_name("notification");
        el.set_text_content(Some(message));
        el.style()
            .set_css_text(&toast_style(&self.config, top_px));

        let body = self.doc.body().context("document has no body")?;
        body.append_child(&el).map_err(js_err)?;
        Ok(el)
    }

    fn set_transform(&self, id: ToastId, value: &str) {
        if let Some(el) = self.live.borrow().get(&id) {
            if let Err(e) = el.style().set_property("transform", value) {
                tracing::warn!(toast = id.0, "Failed to move toast: {:?}", e);
            }
        }
    }
}

impl ToastSurface for DomToastSurface {
    fn mount(&self, id: ToastId, message: &str, top_px: u32) {
        match self.create(message, top_px) {
            Ok(el) => {
                self.live.borrow_mut().insert(id, el);
            }
            Err(e) => tracing::error!(toast = id.0, "Failed to mount toast: {:#}", e),
        }
    }

    fn slide_in(&self, id: ToastId) {
        self.set_transform(id, "translateX(0)");
    }

    fn slide_out(&self, id: ToastId) {
        self.set_transform(id, "translateX(100%)");
    }

    fn unmount(&self, id: ToastId) {
        if let Some(el) = self.live.borrow_mut().remove(&id) {
            el.remove();
        }
    }
}
