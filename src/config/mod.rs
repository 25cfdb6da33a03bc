//! Configuration for the page interactions
//!
//! Configuration is loaded in order of precedence:
//! 1. Inline page config (`<script type="application/toml" id="folio-config">`)
//! 2. Built-in defaults (lowest priority)
//!
//! A page that ships no config behaves exactly like the defaults below. A
//! page whose config fails to parse logs the error and keeps the defaults;
//! the page must stay interactive either way.

use anyhow::{Context, Result};
use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod contact;
mod features;
mod navigation;
mod notification;
mod observability;
mod reveal;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use contact::{ContactConfig, ContactMode, FileContact};
pub use features::{Features, FileFeatures};
pub use navigation::{FileNavigation, NavigationConfig};
pub use notification::{FileNotification, NotificationConfig};
pub use observability::{FileLogging, LoggingConfig};
pub use reveal::{FileReveal, FileStagger, RevealConfig, StaggerConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Element id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

const DEFAULT_OWNER: &str = "Jesús Daniel Chablé Narváez";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Page configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Portfolio owner, shown in the startup banner
    pub owner: String,

    /// Smooth scroll and active-link highlighting
    pub navigation: NavigationConfig,

    /// Viewport-triggered reveals
    pub reveal: RevealConfig,

    /// Stagger intervals for batch animations
    pub stagger: StaggerConfig,

    /// Contact form behavior
    pub contact: ContactConfig,

    /// Toast notifications and clipboard messages
    pub notification: NotificationConfig,

    /// Feature flags for optional effects
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            navigation: NavigationConfig::default(),
            reveal: RevealConfig::default(),
            stagger: StaggerConfig::default(),
            contact: ContactConfig::default(),
            notification: NotificationConfig::default(),
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub owner: Option<String>,

    /// Optional [navigation] section
    pub navigation: Option<FileNavigation>,

    /// Optional [reveal] section
    pub reveal: Option<FileReveal>,

    /// Optional [stagger] section
    pub stagger: Option<FileStagger>,

    /// Optional [contact] section
    pub contact: Option<FileContact>,

    /// Optional [notification] section
    pub notification: Option<FileNotification>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Build from the parsed file layer, filling gaps with defaults
    pub(crate) fn from_file(file: FileConfig) -> Self {
        Self {
            owner: file.owner.unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            navigation: NavigationConfig::from_file(file.navigation),
            reveal: RevealConfig::from_file(file.reveal),
            stagger: StaggerConfig::from_file(file.stagger),
            contact: ContactConfig::from_file(file.contact),
            notification: NotificationConfig::from_file(file.notification),
            features: Features::from_file(file.features),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Parse TOML config text
    ///
    /// Blank text yields the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: FileConfig = toml::from_str(text).context("Failed to parse page config")?;
        Ok(Self::from_file(file))
    }

    /// Load from the inline config text, if the page has any
    ///
    /// Never fails: a broken config is reported and the defaults are used.
    /// The returned error (if any) is for the caller to log once logging is
    /// up, since logging itself is configured from the result.
    pub fn load(inline: Option<&str>) -> (Self, Option<anyhow::Error>) {
        match inline.map(Self::from_toml) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
        }
    }
}
