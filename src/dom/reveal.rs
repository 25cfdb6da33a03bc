// Reveal wiring - intersection observers, skill cascades and scroll reveal
//
// Observers feed entries into a `RevealBatch` and apply whatever outcome it
// returns. Elements are matched back to their batch index by identity.

use super::{add_class, js_err, query, query_all};
use crate::config::{Config, RevealConfig, StaggerConfig};
use crate::reveal::{self, Cascade, IntersectOutcome, ObserverOptions, RevealBatch};
use crate::scheduler::Scheduler;
use crate::stagger::{fill_data_width, SkillLevel};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

const SKILL_BAR: &str = ".skill-bar";
const SKILL_FILL: &str = ".skill-fill";
const SKILL_CARD: &str = ".skill-anim";
const SKILL_LOGO: &str = ".skill-logo";

/// Set up every observer the config enables
pub fn wire(doc: &Document, config: &Config, scheduler: Rc<dyn Scheduler>) -> Result<()> {
    prepare_skill_bars(doc)?;

    let reveal = &config.reveal;
    let cascades = Rc::new(CascadeRunner {
        doc: doc.clone(),
        stagger: config.stagger.clone(),
        visible_class: config.reveal.visible_class.clone(),
        scheduler,
    });

    // Page sections
    let sections = query_all(doc, &reveal.section_selector)?;
    let mut batch = RevealBatch::continuous(reveal.sections());
    for section in &sections {
        add_class(section, &reveal.fade_class);
        let cascade = section
            .class_list()
            .contains(&reveal.skill_bars_section_class)
            .then_some(Cascade::SkillBars);
        batch.register(cascade);
    }
    let visible_class = reveal.visible_class.clone();
    let runner = cascades.clone();
    observe(sections, batch, move |el, outcome| {
        if outcome.newly_revealed {
            add_class(el, &visible_class);
        }
        if let Some(cascade) = outcome.cascade {
            runner.run(cascade);
        }
    })?;

    if config.features.skill_cards {
        observe_section(
            doc,
            &reveal.skill_cards_section,
            reveal.skill_cards(),
            Cascade::SkillCards,
            cascades.clone(),
        )?;
    }
    if config.features.skill_logos {
        observe_section(
            doc,
            &reveal.skill_logos_section,
            reveal.skill_logos(),
            Cascade::SkillLogos,
            cascades,
        )?;
    }
    Ok(())
}

/// Copy each bar's `data-level` onto its fill as `data-width`
pub(super) fn prepare_skill_bars(doc: &Document) -> Result<()> {
    for bar in query_all(doc, SKILL_BAR)? {
        let Some(raw) = bar.get_attribute("data-level") else {
            continue;
        };
        let width = match fill_data_width(&raw) {
            Ok(width) => width,
            Err(e) => {
                tracing::warn!("Skipping skill bar: {}", e);
                continue;
            }
        };
        if let Some(fill) = bar.query_selector(SKILL_FILL).map_err(js_err)? {
            fill.set_attribute("data-width", &width).map_err(js_err)?;
        }
    }
    Ok(())
}

/// A fire-once observer on a single section that starts `cascade`
fn observe_section(
    doc: &Document,
    selector: &str,
    options: ObserverOptions,
    cascade: Cascade,
    runner: Rc<CascadeRunner>,
) -> Result<()> {
    let Some(section) = query(doc, selector)? else {
        tracing::debug!(selector, "Section not on page, skipping {:?}", cascade);
        return Ok(());
    };
    let mut batch = RevealBatch::fire_once(options);
    batch.register(Some(cascade));
    observe(vec![section], batch, move |_, outcome| {
        if let Some(cascade) = outcome.cascade {
            runner.run(cascade);
        }
    })
}

/// Create an observer over `elements`, routing entries through `batch`
fn observe(
    elements: Vec<Element>,
    batch: RevealBatch,
    apply: impl Fn(&Element, IntersectOutcome) + 'static,
) -> Result<()> {
    if elements.is_empty() {
        return Ok(());
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(batch.options().threshold));
    init.set_root_margin(&batch.options().root_margin());

    let elements = Rc::new(elements);
    let batch = Rc::new(RefCell::new(batch));
    let targets = elements.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()));
            let routed = batch.borrow_mut().on_entries(targets.as_slice(), entries);

            if routed.iter().any(|(_, outcome)| outcome.disconnect) {
                observer.disconnect();
            }
            for (index, outcome) in routed {
                apply(&targets[index], outcome);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)
            .context("failed to create IntersectionObserver")?;
    for el in elements.iter() {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

/// Runs the staggered follow-up animations
struct CascadeRunner {
    doc: Document,
    stagger: StaggerConfig,
    visible_class: String,
    scheduler: Rc<dyn Scheduler>,
}

impl CascadeRunner {
    fn run(&self, cascade: Cascade) {
        if let Err(e) = self.try_run(cascade) {
            tracing::warn!("{:?} cascade failed: {:#}", cascade, e);
        }
    }

    fn try_run(&self, cascade: Cascade) -> Result<()> {
        let visible = self.visible_class.clone();
        let count = match cascade {
            Cascade::SkillBars => {
                let fills = query_all(&self.doc, SKILL_FILL)?;
                self.stagger
                    .skill_bars()
                    .run(self.scheduler.as_ref(), fills, fill_width)
            }
            Cascade::SkillCards => {
                let cards = query_all(&self.doc, SKILL_CARD)?;
                self.stagger
                    .skill_cards()
                    .run(self.scheduler.as_ref(), cards, move |el| add_class(&el, &visible))
            }
            Cascade::SkillLogos => {
                let logos = query_all(&self.doc, SKILL_LOGO)?;
                self.stagger
                    .skill_logos()
                    .run(self.scheduler.as_ref(), logos, move |el| add_class(&el, &visible))
            }
        };
        tracing::debug!(count, "{:?} cascade scheduled", cascade);
        Ok(())
    }
}

/// Apply a fill's prepared width
fn fill_width(fill: Element) {
    let Some(level) = fill
        .get_attribute("data-width")
        .and_then(|raw| raw.parse::<SkillLevel>().ok())
    else {
        return;
    };
    if let Ok(fill) = fill.dyn_into::<HtmlElement>() {
        if let Err(e) = fill.style().set_property("width", &level.width_css()) {
            tracing::warn!("Failed to set skill width: {:?}", e);
        }
    }
}

/// Reveal fade-in elements whose top has crossed the reveal line
pub fn reveal_in_view(window: &Window, doc: &Document, config: &RevealConfig) -> Result<()> {
    let viewport = window
        .inner_height()
        .map_err(js_err)?
        .as_f64()
        .unwrap_or(0.0);

    let selector = format!(".{}", config.fade_class);
    for el in query_all(doc, &selector)? {
        let top = el.get_bounding_client_rect().top();
        if reveal::crosses_reveal_line(top, viewport, config.scroll_reveal_offset_px) {
            add_class(&el, &config.visible_class);
        }
    }
    Ok(())
}
