// Contact form wiring - a `ContactSurface` over a real <form>

use super::{js_err, listen, query_all};
use crate::config::ContactConfig;
use crate::contact::{resolve_field, ContactController, ContactSurface, Field, FieldSource};
use crate::scheduler::Scheduler;
use anyhow::Result;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

const SUBMIT_SELECTOR: &str = ".submit-btn, button[type=\"submit\"]";

/// Wire a controller to every matching form
pub fn wire(
    window: &Window,
    doc: &Document,
    config: &ContactConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<()> {
    let forms: Vec<HtmlFormElement> = query_all(doc, &config.form_selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();
    if forms.is_empty() {
        tracing::debug!(selector = %config.form_selector, "No contact form on page");
        return Ok(());
    }

    for form in forms {
        let surface = Rc::new(DomContactForm {
            window: window.clone(),
            form: form.clone(),
            config: config.clone(),
        });
        let controller = ContactController::new(config.clone(), surface, scheduler.clone());
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let outcome = controller.submit();
            tracing::debug!("Contact submit: {:?}", outcome);
        })?;
    }
    tracing::debug!(mode = config.mode.as_str(), "Contact form wired");
    Ok(())
}

struct DomContactForm {
    window: Window,
    form: HtmlFormElement,
    config: ContactConfig,
}

impl DomContactForm {
    fn field_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.config.name_field,
            Field::Email => &self.config.email_field,
            Field::Message => &self.config.message_field,
        }
    }

    fn fallback_selector(field: Field) -> &'static str {
        match field {
            Field::Name => "input[type=\"text\"]",
            Field::Email => "input[type=\"email\"]",
            Field::Message => "textarea",
        }
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.form.query_selector(selector).ok().flatten()
    }

    fn by_id(&self, field: Field) -> Option<String> {
        let id = self.field_id(field);
        if id.is_empty() {
            return None;
        }
        self.find(&format!("#{}", id)).and_then(control_value)
    }

    fn by_name(&self, field: Field) -> Option<String> {
        FormData::new_with_form(&self.form)
            .ok()?
            .get(field.as_str())
            .as_string()
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.find(SUBMIT_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }
}

/// Current value of an input or textarea
fn control_value(el: Element) -> Option<String> {
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input.value()),
        Err(el) => el
            .dyn_into::<HtmlTextAreaElement>()
            .ok()
            .map(|area| area.value()),
    }
}

impl ContactSurface for DomContactForm {
    fn read_field(&self, field: Field) -> Option<String> {
        resolve_field(|source| match source {
            FieldSource::Id => self.by_id(field),
            FieldSource::Name => self.by_name(field),
            FieldSource::Type => self.find(Self::fallback_selector(field)).and_then(control_value),
        })
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!("alert failed: {:?}", e);
        }
    }

    fn submit_label(&self) -> String {
        self.submit_button()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_submit_state(&self, label: &str, disabled: bool) {
        match self.submit_button() {
            Some(button) => {
                button.set_text_content(Some(label));
                button.set_disabled(disabled);
            }
            None => tracing::debug!("Contact form has no submit button"),
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn navigate(&self, url: &str) -> Result<()> {
        self.window.location().set_href(url).map_err(js_err)
    }
}
