//! Navigation configuration
//!
//! Selectors and offsets for smooth scrolling and active-link highlighting.

use serde::Deserialize;

/// Navigation settings
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Fixed header whose height offsets every scroll computation
    pub header_selector: String,

    /// Internal anchors that smooth-scroll instead of jumping
    pub anchor_selector: String,

    /// Nav links that receive the active class
    pub link_selector: String,

    /// Sections matched against nav link hrefs
    pub section_selector: String,

    /// Gap left between the header and a scroll target
    pub scroll_margin_px: f64,

    /// How far below the header the active-section focus line sits
    pub lookahead_px: f64,

    /// Class marking the active nav link
    pub active_class: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_selector: ".header".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            link_selector: ".nav-link".to_string(),
            section_selector: "section[id]".to_string(),
            scroll_margin_px: 20.0,
            lookahead_px: 100.0,
            active_class: "active".to_string(),
        }
    }
}

/// Navigation settings as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileNavigation {
    pub header_selector: Option<String>,
    pub anchor_selector: Option<String>,
    pub link_selector: Option<String>,
    pub section_selector: Option<String>,
    pub scroll_margin_px: Option<f64>,
    pub lookahead_px: Option<f64>,
    pub active_class: Option<String>,
}

impl NavigationConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileNavigation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            header_selector: file.header_selector.unwrap_or(defaults.header_selector),
            anchor_selector: file.anchor_selector.unwrap_or(defaults.anchor_selector),
            link_selector: file.link_selector.unwrap_or(defaults.link_selector),
            section_selector: file.section_selector.unwrap_or(defaults.section_selector),
            scroll_margin_px: file.scroll_margin_px.unwrap_or(defaults.scroll_margin_px),
            lookahead_px: file.lookahead_px.unwrap_or(defaults.lookahead_px),
            active_class: file.active_class.unwrap_or(defaults.active_class),
        }
    }
}
