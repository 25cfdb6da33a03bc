//! Feature flags configuration
//!
//! Optional page effects (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional effects (opt-out: default enabled)
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    /// Reveal `.fade-in` elements by scroll position on each frame
    pub scroll_reveal: bool,

    /// Shift `.about-visual` against the scroll direction
    pub parallax: bool,

    /// Parallax factor: 0.5 moves the visual at half the scroll speed
    pub parallax_speed: f64,

    /// Mark the body loaded and stagger the about-section intro
    pub load_intro: bool,

    /// Click a contact item to copy its text
    pub copy_contacts: bool,

    /// Staggered skill cards when the chart section appears
    pub skill_cards: bool,

    /// Staggered skill logos when the skills section appears
    pub skill_logos: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            scroll_reveal: true,
            parallax: true,
            parallax_speed: 0.5,
            load_intro: true,
            copy_contacts: true,
            skill_cards: true,
            skill_logos: true,
        }
    }
}

/// Feature flags as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileFeatures {
    pub scroll_reveal: Option<bool>,
    pub parallax: Option<bool>,
    pub parallax_speed: Option<f64>,
    pub load_intro: Option<bool>,
    pub copy_contacts: Option<bool>,
    pub skill_cards: Option<bool>,
    pub skill_logos: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            scroll_reveal: file.scroll_reveal.unwrap_or(d.scroll_reveal),
            parallax: file.parallax.unwrap_or(d.parallax),
            parallax_speed: file.parallax_speed.unwrap_or(d.parallax_speed),
            load_intro: file.load_intro.unwrap_or(d.load_intro),
            copy_contacts: file.copy_contacts.unwrap_or(d.copy_contacts),
            skill_cards: file.skill_cards.unwrap_or(d.skill_cards),
            skill_logos: file.skill_logos.unwrap_or(d.skill_logos),
        }
    }
}
