// Navigation wiring - smooth anchor scrolling and the active nav link
//
// Offsets are measured at event time, so header height changes and late
// layout shifts are picked up without re-wiring.

use super::{js_err, listen, offset_height, query_all};
use crate::config::NavigationConfig;
use crate::nav::{self, AnchorClick, SectionSpan};
use anyhow::Result;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Attach click handlers to every in-page anchor
pub fn wire(window: &Window, doc: &Document, config: &NavigationConfig) -> Result<()> {
    let anchors = query_all(doc, &config.anchor_selector)?;
    let config = Rc::new(config.clone());

    for anchor in &anchors {
        let window = window.clone();
        let doc = doc.clone();
        let config = config.clone();
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let click = AnchorClick::from_href(&href);
            if click.prevents_default() {
                event.prevent_default();
            }
            let AnchorClick::ScrollTo(target) = click else {
                return;
            };
            let Some(section) = doc
                .get_element_by_id(target)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                tracing::debug!(href = %href, "Anchor target not found");
                return;
            };

            let header = offset_height(&doc, &config.header_selector);
            let top = nav::scroll_destination(
                section.offset_top() as f64,
                header,
                config.scroll_margin_px,
            );
            smooth_scroll_to(&window, top);
        })?;
    }

    tracing::debug!(count = anchors.len(), "Anchors wired");
    Ok(())
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Recompute which nav link is active for the current scroll position
pub fn update_active_link(
    window: &Window,
    doc: &Document,
    config: &NavigationConfig,
) -> Result<()> {
    let scroll_y = window.scroll_y().map_err(js_err)?;
    let header = offset_height(doc, &config.header_selector);
    let focus = nav::focus_position(scroll_y, header, config.lookahead_px);

    let spans: Vec<SectionSpan> = query_all(doc, &config.section_selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            SectionSpan::new(
                el.id(),
                el.offset_top() as f64,
                el.offset_height() as f64,
            )
        })
        .collect();
    let active = nav::active_section(&spans, focus);

    let links = query_all(doc, &config.link_selector)?;
    let hrefs: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();

    for (link, on) in links.iter().zip(nav::link_states(&hrefs, active)) {
        set_active(link, &config.active_class, on);
    }
    Ok(())
}

fn set_active(link: &Element, class: &str, on: bool) {
    let classes = link.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        tracing::warn!("Failed to toggle {}: {:?}", class, e);
    }
}
