//! Clipboard copy results
//!
//! The browser write is asynchronous and can fail (insecure context,
//! permission denied, no clipboard API). The outcome is returned to the
//! caller instead of being swallowed, and carries its own toast message.

use crate::config::NotificationConfig;

/// Result of one clipboard write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text is on the clipboard
    Copied {
        /// Characters copied
        length: usize,
    },
    /// The write was attempted and rejected
    Failed(String),
    /// No clipboard API in this context
    Unsupported,
}

impl CopyOutcome {
    pub fn copied(text: &str) -> Self {
        Self::Copied {
            length: text.chars().count(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Toast text for this outcome
    pub fn toast_message<'a>(&self, config: &'a NotificationConfig) -> &'a str {
        match self {
            Self::Copied { .. } => &config.copied_message,
            Self::Failed(_) | Self::Unsupported => &config.copy_failed_message,
        }
    }

    /// Log the outcome at the level it deserves
    pub fn log(&self) {
        match self {
            Self::Copied { length } => tracing::debug!(length, "Copied to clipboard"),
            Self::Failed(reason) => tracing::error!("Error copying to clipboard: {}", reason),
            Self::Unsupported => tracing::warn!("Clipboard API unavailable in this context"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_counts_characters() {
        assert_eq!(
            CopyOutcome::copied("jesús@mail.com"),
            CopyOutcome::Copied { length: 14 }
        );
        assert!(CopyOutcome::copied("x").is_success());
    }

    #[test]
    fn test_failures_surface_a_message() {
        let config = NotificationConfig::default();
        assert_eq!(
            CopyOutcome::copied("a").toast_message(&config),
            config.copied_message
        );
        for outcome in [CopyOutcome::failed("NotAllowedError"), CopyOutcome::Unsupported] {
            assert!(!outcome.is_success());
            assert_eq!(outcome.toast_message(&config), config.copy_failed_message);
        }
    }
}
