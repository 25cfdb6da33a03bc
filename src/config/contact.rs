//! Contact form configuration

use serde::Deserialize;
use std::time::Duration;

/// What a valid submission does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMode {
    /// Open the visitor's mail client with a prefilled message
    #[default]
    Mailto,
    /// Pretend to send: sending label, delay, confirmation, reset
    Simulated,
}

impl ContactMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMode::Mailto => "mailto",
            ContactMode::Simulated => "simulated",
        }
    }
}

/// Contact form settings
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub mode: ContactMode,

    /// Candidate forms, first match wins
    pub form_selector: String,

    /// Element ids of the three fields
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,

    /// Fixed `mailto:` recipient
    pub recipient: String,

    /// `{name}`, `{email}` and `{message}` are substituted
    pub subject_template: String,
    pub body_template: String,

    /// Alert shown when a field is empty
    pub missing_fields_message: String,

    /// Simulated mode: label while "sending", alert afterwards
    pub sending_label: String,
    pub sent_message: String,
    pub sending_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            mode: ContactMode::default(),
            form_selector: "#contactForm, .contact-form form".to_string(),
            name_field: "nombre".to_string(),
            email_field: "correo".to_string(),
            message_field: "mensaje".to_string(),
            recipient: "jesusdanielchable@gmail.com".to_string(),
            subject_template: "Contacto profesional de {name}".to_string(),
            body_template:
                "Nombre o empresa: {name}\nCorreo de contacto: {email}\n\nMensaje:\n{message}"
                    .to_string(),
            missing_fields_message: "Por favor, completa todos los campos.".to_string(),
            sending_label: "Enviando...".to_string(),
            sent_message: "¡Mensaje enviado exitosamente! Te contactaré pronto.".to_string(),
            sending_delay_ms: 1500,
        }
    }
}

/// Contact settings as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileContact {
    pub mode: Option<ContactMode>,
    pub form_selector: Option<String>,
    pub name_field: Option<String>,
    pub email_field: Option<String>,
    pub message_field: Option<String>,
    pub recipient: Option<String>,
    pub subject_template: Option<String>,
    pub body_template: Option<String>,
    pub missing_fields_message: Option<String>,
    pub sending_label: Option<String>,
    pub sent_message: Option<String>,
    pub sending_delay_ms: Option<u64>,
}

impl ContactConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileContact>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            mode: file.mode.unwrap_or(d.mode),
            form_selector: file.form_selector.unwrap_or(d.form_selector),
            name_field: file.name_field.unwrap_or(d.name_field),
            email_field: file.email_field.unwrap_or(d.email_field),
            message_field: file.message_field.unwrap_or(d.message_field),
            recipient: file.recipient.unwrap_or(d.recipient),
            subject_template: file.subject_template.unwrap_or(d.subject_template),
            body_template: file.body_template.unwrap_or(d.body_template),
            missing_fields_message: file
                .missing_fields_message
                .unwrap_or(d.missing_fields_message),
            sending_label: file.sending_label.unwrap_or(d.sending_label),
            sent_message: file.sent_message.unwrap_or(d.sent_message),
            sending_delay_ms: file.sending_delay_ms.unwrap_or(d.sending_delay_ms),
        }
    }

    pub fn sending_delay(&self) -> Duration {
        Duration::from_millis(self.sending_delay_ms)
    }
}
