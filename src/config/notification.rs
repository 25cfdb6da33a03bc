//! Toast notification configuration

use serde::Deserialize;
use std::time::Duration;

/// Toast timing, placement and messages
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    /// Delay before sliding in
    pub enter_delay_ms: u64,
    /// Slide-out starts this long after the toast was created
    pub hold_ms: u64,
    /// Slide-out transition length; the element is removed after it
    pub exit_ms: u64,

    /// Distance of the first toast from the viewport top
    pub top_px: u32,
    /// Vertical step between stacked toasts
    pub stack_spacing_px: u32,

    pub background: String,
    pub foreground: String,

    /// Shown after a successful clipboard copy
    pub copied_message: String,
    /// Shown when the clipboard write fails or is unavailable
    pub copy_failed_message: String,
    /// Tooltip on copyable contact items
    pub copy_hint: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            hold_ms: 3000,
            exit_ms: 300,
            top_px: 20,
            stack_spacing_px: 64,
            background: "#10b981".to_string(),
            foreground: "white".to_string(),
            copied_message: "¡Información copiada al portapapeles!".to_string(),
            copy_failed_message: "No se pudo copiar la información".to_string(),
            copy_hint: "Click para copiar".to_string(),
        }
    }
}

/// Notification settings as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileNotification {
    pub enter_delay_ms: Option<u64>,
    pub hold_ms: Option<u64>,
    pub exit_ms: Option<u64>,
    pub top_px: Option<u32>,
    pub stack_spacing_px: Option<u32>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub copied_message: Option<String>,
    pub copy_failed_message: Option<String>,
    pub copy_hint: Option<String>,
}

impl NotificationConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileNotification>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            enter_delay_ms: file.enter_delay_ms.unwrap_or(d.enter_delay_ms),
            hold_ms: file.hold_ms.unwrap_or(d.hold_ms),
            exit_ms: file.exit_ms.unwrap_or(d.exit_ms),
            top_px: file.top_px.unwrap_or(d.top_px),
            stack_spacing_px: file.stack_spacing_px.unwrap_or(d.stack_spacing_px),
            background: file.background.unwrap_or(d.background),
            foreground: file.foreground.unwrap_or(d.foreground),
            copied_message: file.copied_message.unwrap_or(d.copied_message),
            copy_failed_message: file.copy_failed_message.unwrap_or(d.copy_failed_message),
            copy_hint: file.copy_hint.unwrap_or(d.copy_hint),
        }
    }

    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}
