//! Reveal and stagger configuration

use crate::reveal::ObserverOptions;
use crate::stagger::Stagger;
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Reveal
// ─────────────────────────────────────────────────────────────────────────────

/// Viewport-triggered reveal settings
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Page sections that fade in when they enter the viewport
    pub section_selector: String,

    /// Visible fraction that counts as entered
    pub threshold: f64,

    /// Elements count as entered this far before the viewport bottom
    pub bottom_margin_px: u32,

    /// Section class whose reveal fills the skill bars
    pub skill_bars_section_class: String,

    /// Container whose first appearance shows the skill cards
    pub skill_cards_section: String,
    pub skill_cards_threshold: f64,

    /// Container whose first appearance shows the skill logos
    pub skill_logos_section: String,
    pub skill_logos_threshold: f64,

    /// Scroll-position reveal: distance above the viewport bottom
    pub scroll_reveal_offset_px: f64,

    /// Class added to sections before they are observed
    pub fade_class: String,

    /// Class added on reveal
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_selector: [
                ".about-section",
                ".skills-chart-section",
                ".facts-section",
                ".skills-bars-section",
                ".work-section",
                ".projects-section",
                ".story-section",
                ".contact-section",
            ]
            .join(", "),
            threshold: 0.1,
            bottom_margin_px: 50,
            skill_bars_section_class: "skills-bars-section".to_string(),
            skill_cards_section: ".skills-chart-section".to_string(),
            skill_cards_threshold: 0.24,
            skill_logos_section: "#skills".to_string(),
            skill_logos_threshold: 0.2,
            scroll_reveal_offset_px: 150.0,
            fade_class: "fade-in".to_string(),
            visible_class: "visible".to_string(),
        }
    }
}

/// Reveal settings as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileReveal {
    pub section_selector: Option<String>,
    pub threshold: Option<f64>,
    pub bottom_margin_px: Option<u32>,
    pub skill_bars_section_class: Option<String>,
    pub skill_cards_section: Option<String>,
    pub skill_cards_threshold: Option<f64>,
    pub skill_logos_section: Option<String>,
    pub skill_logos_threshold: Option<f64>,
    pub scroll_reveal_offset_px: Option<f64>,
    pub fade_class: Option<String>,
    pub visible_class: Option<String>,
}

impl RevealConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileReveal>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            section_selector: file.section_selector.unwrap_or(d.section_selector),
            threshold: file.threshold.unwrap_or(d.threshold),
            bottom_margin_px: file.bottom_margin_px.unwrap_or(d.bottom_margin_px),
            skill_bars_section_class: file
                .skill_bars_section_class
                .unwrap_or(d.skill_bars_section_class),
            skill_cards_section: file.skill_cards_section.unwrap_or(d.skill_cards_section),
            skill_cards_threshold: file.skill_cards_threshold.unwrap_or(d.skill_cards_threshold),
            skill_logos_section: file.skill_logos_section.unwrap_or(d.skill_logos_section),
            skill_logos_threshold: file.skill_logos_threshold.unwrap_or(d.skill_logos_threshold),
            scroll_reveal_offset_px: file
                .scroll_reveal_offset_px
                .unwrap_or(d.scroll_reveal_offset_px),
            fade_class: file.fade_class.unwrap_or(d.fade_class),
            visible_class: file.visible_class.unwrap_or(d.visible_class),
        }
    }

    /// Observer settings for the page sections
    pub fn sections(&self) -> ObserverOptions {
        ObserverOptions::new(self.threshold).with_bottom_margin(self.bottom_margin_px)
    }

    pub fn skill_cards(&self) -> ObserverOptions {
        ObserverOptions::new(self.skill_cards_threshold)
    }

    pub fn skill_logos(&self) -> ObserverOptions {
        ObserverOptions::new(self.skill_logos_threshold)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stagger
// ─────────────────────────────────────────────────────────────────────────────

/// Per-item intervals for batch animations (milliseconds)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerConfig {
    pub skill_bars_ms: u64,
    pub skill_cards_ms: u64,
    pub skill_cards_lead_ms: u64,
    pub skill_logos_ms: u64,
    /// Wait after page load before the intro starts
    pub intro_lead_ms: u64,
    pub intro_ms: u64,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            skill_bars_ms: 200,
            skill_cards_ms: 250,
            skill_cards_lead_ms: 150,
            skill_logos_ms: 150,
            intro_lead_ms: 300,
            intro_ms: 200,
        }
    }
}

/// Stagger settings as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileStagger {
    pub skill_bars_ms: Option<u64>,
    pub skill_cards_ms: Option<u64>,
    pub skill_cards_lead_ms: Option<u64>,
    pub skill_logos_ms: Option<u64>,
    pub intro_lead_ms: Option<u64>,
    pub intro_ms: Option<u64>,
}

impl StaggerConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileStagger>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            skill_bars_ms: file.skill_bars_ms.unwrap_or(d.skill_bars_ms),
            skill_cards_ms: file.skill_cards_ms.unwrap_or(d.skill_cards_ms),
            skill_cards_lead_ms: file.skill_cards_lead_ms.unwrap_or(d.skill_cards_lead_ms),
            skill_logos_ms: file.skill_logos_ms.unwrap_or(d.skill_logos_ms),
            intro_lead_ms: file.intro_lead_ms.unwrap_or(d.intro_lead_ms),
            intro_ms: file.intro_ms.unwrap_or(d.intro_ms),
        }
    }

    pub fn skill_bars(&self) -> Stagger {
        Stagger::new(Duration::from_millis(self.skill_bars_ms))
    }

    pub fn skill_cards(&self) -> Stagger {
        Stagger::new(Duration::from_millis(self.skill_cards_ms))
            .with_lead(Duration::from_millis(self.skill_cards_lead_ms))
    }

    pub fn skill_logos(&self) -> Stagger {
        Stagger::new(Duration::from_millis(self.skill_logos_ms))
    }

    /// Timed from the window load event
    pub fn intro(&self) -> Stagger {
        Stagger::new(Duration::from_millis(self.intro_ms))
            .with_lead(Duration::from_millis(self.intro_lead_ms))
    }
}
