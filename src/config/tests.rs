//! Configuration tests
//!
//! The round-trip tests guard the template: every field written by
//! `to_toml()` must parse back into the same value, so adding a field to a
//! section without serializing it fails here.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::from_toml(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let parsed = parsed.unwrap();
    assert_eq!(parsed.owner, config.owner);
    assert_eq!(parsed.navigation, config.navigation);
    assert_eq!(parsed.reveal, config.reveal);
    assert_eq!(parsed.stagger, config.stagger);
    assert_eq!(parsed.contact, config.contact);
    assert_eq!(parsed.notification, config.notification);
    assert_eq!(parsed.features, config.features);
    assert_eq!(parsed.logging, config.logging);
}

/// Every non-default value must survive the trip, not just the defaults
#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.owner = "Ana \"La Dev\" Pérez".to_string();
    config.navigation.scroll_margin_px = 12.5;
    config.reveal.threshold = 0.35;
    config.reveal.bottom_margin_px = 0;
    config.stagger.skill_logos_ms = 90;
    config.contact.mode = ContactMode::Simulated;
    config.contact.body_template = "Hola {name}\n\n{message}".to_string();
    config.notification.stack_spacing_px = 0;
    config.features.parallax = false;
    config.features.parallax_speed = 0.25;
    config.logging.filter = "folio=debug,warn".to_string();

    let parsed = Config::from_toml(&config.to_toml()).expect("customized config should parse");
    assert_eq!(parsed.owner, config.owner);
    assert_eq!(parsed.navigation, config.navigation);
    assert_eq!(parsed.reveal, config.reveal);
    assert_eq!(parsed.stagger, config.stagger);
    assert_eq!(parsed.contact, config.contact);
    assert_eq!(parsed.notification, config.notification);
    assert_eq!(parsed.features, config.features);
    assert_eq!(parsed.logging, config.logging);
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_blank_config_is_default() {
    let config = Config::from_toml("  \n").unwrap();
    assert_eq!(config.contact, ContactConfig::default());
    assert_eq!(config.owner, Config::default().owner);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_toml(
        r#"
[contact]
mode = "simulated"
sending_delay_ms = 800

[features]
parallax = false
"#,
    )
    .unwrap();

    assert_eq!(config.contact.mode, ContactMode::Simulated);
    assert_eq!(config.contact.sending_delay_ms, 800);
    assert_eq!(config.contact.recipient, ContactConfig::default().recipient);
    assert!(!config.features.parallax);
    assert!(config.features.copy_contacts);
    assert_eq!(config.notification, NotificationConfig::default());
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = Config::from_toml("[contact]\nmode = \"smtp\"\n").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse page config"));
}

#[test]
fn test_misspelled_key_is_rejected() {
    assert!(Config::from_toml("[notification]\nhold = 5000\n").is_err());
    assert!(Config::from_toml("ownr = \"x\"\n").is_err());
}

#[test]
fn test_load_falls_back_to_defaults_on_error() {
    let (config, err) = Config::load(Some("[reveal\nthreshold = "));
    assert!(err.is_some());
    assert_eq!(config.reveal, RevealConfig::default());

    let (config, err) = Config::load(None);
    assert!(err.is_none());
    assert_eq!(config.stagger, StaggerConfig::default());

    let (config, err) = Config::load(Some("[stagger]\nskill_bars_ms = 120\n"));
    assert!(err.is_none());
    assert_eq!(config.stagger.skill_bars_ms, 120);
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived values
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_default_observer_options() {
    let reveal = RevealConfig::default();
    assert_eq!(reveal.sections().root_margin(), "0px 0px -50px 0px");
    assert_eq!(reveal.sections().threshold, 0.1);
    assert_eq!(reveal.skill_cards().threshold, 0.24);
    assert_eq!(reveal.skill_logos().threshold, 0.2);
}

#[test]
fn test_default_stagger_plans() {
    use std::time::Duration;
    let ms = Duration::from_millis;
    let stagger = StaggerConfig::default();

    assert_eq!(stagger.skill_bars().delay_for(3), ms(600));
    assert_eq!(stagger.skill_cards().delay_for(0), ms(150));
    assert_eq!(stagger.skill_cards().delay_for(2), ms(650));
    assert_eq!(stagger.skill_logos().delay_for(4), ms(600));
    assert_eq!(stagger.intro().delay_for(0), ms(300));
    assert_eq!(stagger.intro().delay_for(1), ms(500));
}

#[test]
fn test_notification_timeline_totals() {
    let notif = NotificationConfig::default();
    assert_eq!(
        (notif.hold() + notif.exit()).as_millis(),
        3300,
        "toast lives for hold + exit"
    );
}
