//! Config serialization to TOML
//!
//! Single source of truth for the inline config format. Strings go through
//! `{:?}`, which produces valid TOML basic strings for the quotes, newlines
//! and accented text used here.

use super::Config;

impl Config {
    /// Render the full config as a commented TOML template
    pub fn to_toml(&self) -> String {
        let nav = &self.navigation;
        let reveal = &self.reveal;
        let stagger = &self.stagger;
        let contact = &self.contact;
        let notif = &self.notification;
        let features = &self.features;
        let logging = &self.logging;

        format!(
            r#"# folio page configuration
# Embed as <script type="application/toml" id="folio-config">...</script>

# Shown in the console banner
owner = {owner:?}

# Smooth scroll and active nav link
[navigation]
header_selector = {header:?}
anchor_selector = {anchor:?}
link_selector = {link:?}
section_selector = {section:?}
scroll_margin_px = {margin:?}
lookahead_px = {lookahead:?}
active_class = {active:?}

# Viewport-triggered reveals (thresholds are visible fractions, 0.0-1.0)
[reveal]
section_selector = {reveal_sections:?}
threshold = {threshold:?}
bottom_margin_px = {bottom}
skill_bars_section_class = {bars_class:?}
skill_cards_section = {cards_section:?}
skill_cards_threshold = {cards_threshold:?}
skill_logos_section = {logos_section:?}
skill_logos_threshold = {logos_threshold:?}
scroll_reveal_offset_px = {scroll_offset:?}
fade_class = {fade:?}
visible_class = {visible:?}

# Batch animation intervals (milliseconds)
[stagger]
skill_bars_ms = {bars_ms}
skill_cards_ms = {cards_ms}
skill_cards_lead_ms = {cards_lead}
skill_logos_ms = {logos_ms}
intro_lead_ms = {intro_lead}
intro_ms = {intro_ms}

# Contact form: mode = "mailto" (open mail client) or "simulated"
[contact]
mode = "{mode}"
form_selector = {form:?}
name_field = {name_field:?}
email_field = {email_field:?}
message_field = {message_field:?}
recipient = {recipient:?}
subject_template = {subject:?}
body_template = {body:?}
missing_fields_message = {missing:?}
sending_label = {sending:?}
sent_message = {sent:?}
sending_delay_ms = {sending_delay}

# Toast notifications
[notification]
enter_delay_ms = {enter}
hold_ms = {hold}
exit_ms = {exit}
top_px = {top}
stack_spacing_px = {spacing}
background = {bg:?}
foreground = {fg:?}
copied_message = {copied:?}
copy_failed_message = {copy_failed:?}
copy_hint = {hint:?}

# Optional effects
[features]
scroll_reveal = {scroll_reveal}
parallax = {parallax}
parallax_speed = {parallax_speed:?}
load_intro = {load_intro}
copy_contacts = {copy_contacts}
skill_cards = {skill_cards}
skill_logos = {skill_logos}

# Logging (EnvFilter directive syntax)
[logging]
filter = {filter:?}
buffer_size = {buffer}
"#,
            owner = self.owner,
            header = nav.header_selector,
            anchor = nav.anchor_selector,
            link = nav.link_selector,
            section = nav.section_selector,
            margin = nav.scroll_margin_px,
            lookahead = nav.lookahead_px,
            active = nav.active_class,
            reveal_sections = reveal.section_selector,
            threshold = reveal.threshold,
            bottom = reveal.bottom_margin_px,
            bars_class = reveal.skill_bars_section_class,
            cards_section = reveal.skill_cards_section,
            cards_threshold = reveal.skill_cards_threshold,
            logos_section = reveal.skill_logos_section,
            logos_threshold = reveal.skill_logos_threshold,
            scroll_offset = reveal.scroll_reveal_offset_px,
            fade = reveal.fade_class,
            visible = reveal.visible_class,
            bars_ms = stagger.skill_bars_ms,
            cards_ms = stagger.skill_cards_ms,
            cards_lead = stagger.skill_cards_lead_ms,
            logos_ms = stagger.skill_logos_ms,
            intro_lead = stagger.intro_lead_ms,
            intro_ms = stagger.intro_ms,
            mode = contact.mode.as_str(),
            form = contact.form_selector,
            name_field = contact.name_field,
            email_field = contact.email_field,
            message_field = contact.message_field,
            recipient = contact.recipient,
            subject = contact.subject_template,
            body = contact.body_template,
            missing = contact.missing_fields_message,
            sending = contact.sending_label,
            sent = contact.sent_message,
            sending_delay = contact.sending_delay_ms,
            enter = notif.enter_delay_ms,
            hold = notif.hold_ms,
            exit = notif.exit_ms,
            top = notif.top_px,
            spacing = notif.stack_spacing_px,
            bg = notif.background,
            fg = notif.foreground,
            copied = notif.copied_message,
            copy_failed = notif.copy_failed_message,
            hint = notif.copy_hint,
            scroll_reveal = features.scroll_reveal,
            parallax = features.parallax,
            parallax_speed = features.parallax_speed,
            load_intro = features.load_intro,
            copy_contacts = features.copy_contacts,
            skill_cards = features.skill_cards,
            skill_logos = features.skill_logos,
            filter = logging.filter,
            buffer = logging.buffer_size,
        )
    }
}
