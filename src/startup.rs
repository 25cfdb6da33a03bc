// Startup module - logs the console banner and module status
//
// The banner goes through tracing like everything else, so it lands in the
// browser console and the in-memory log buffer.

use crate::config::{Config, Features, VERSION};

/// Module loading result for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Get status of all modules based on config
pub fn module_status(config: &Config) -> Vec<ModuleStatus> {
    let Features {
        scroll_reveal,
        parallax,
        load_intro,
        copy_contacts,
        skill_cards,
        skill_logos,
        ..
    } = &config.features;

    vec![
        ModuleStatus {
            name: "navigation",
            enabled: true, // Core, always on
            description: "Smooth scroll + active link",
        },
        ModuleStatus {
            name: "reveal",
            enabled: true, // Core, always on
            description: "Section fade-in + skill bars",
        },
        ModuleStatus {
            name: "contact",
            enabled: true,
            description: config.contact.mode.as_str(),
        },
        ModuleStatus {
            name: "scroll-reveal",
            enabled: *scroll_reveal,
            description: "Reveal by scroll position",
        },
        ModuleStatus {
            name: "parallax",
            enabled: *parallax,
            description: "About visual parallax",
        },
        ModuleStatus {
            name: "intro",
            enabled: *load_intro,
            description: "Load-time about intro",
        },
        ModuleStatus {
            name: "copy",
            enabled: *copy_contacts,
            description: "Click-to-copy contact items",
        },
        ModuleStatus {
            name: "skill-cards",
            enabled: *skill_cards,
            description: "Staggered skill cards",
        },
        ModuleStatus {
            name: "skill-logos",
            enabled: *skill_logos,
            description: "Staggered skill logos",
        },
    ]
}

/// Log the banner and module list
pub fn log_startup(config: &Config) {
    tracing::info!("🚀 Portfolio de {} (folio v{})", config.owner, VERSION);
    tracing::info!("📧 {}", config.contact.recipient);

    for module in module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::debug!("  {} {} - {}", icon, module.name, module.description);
    }
}

/// A named wiring step run at startup
pub type WiringStep<'a> = (&'static str, Box<dyn FnOnce() -> anyhow::Result<()> + 'a>);

pub fn wiring_step<'a>(
    name: &'static str,
    step: impl FnOnce() -> anyhow::Result<()> + 'a,
) -> WiringStep<'a> {
    (name, Box::new(step))
}

/// Run every step even when earlier ones fail
///
/// Failures are logged; returns the names of the steps that failed.
pub fn run_isolated(steps: Vec<WiringStep<'_>>) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, step) in steps {
        if let Err(e) = step() {
            tracing::error!("Failed to wire {}: {:#}", name, e);
            failed.push(name);
        }
    }
    failed
}
