//! Contact form handling
//!
//! A single submit handler with one contract, selected by [`ContactMode`]:
//!
//! - `Mailto`: validate, build a `mailto:` URL, hand the page to the mail
//!   client. Delivery is invisible to us.
//! - `Simulated`: validate, disable the submit control with a "sending"
//!   label, wait, confirm, reset, restore the control.
//!
//! Validation is "every field non-empty"; no format checks.

mod mailto;

pub use mailto::{build_mailto, encode_component, render_template};

use crate::config::{ContactConfig, ContactMode};
use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingField(Field),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingField(field) => write!(f, "missing {} field", field.as_str()),
        }
    }
}

impl std::error::Error for ContactError {}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate raw field values; absent and empty both count as missing
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactError> {
        fn required(value: Option<String>, field: Field) -> Result<String, ContactError> {
            value
                .filter(|v| !v.is_empty())
                .ok_or(ContactError::MissingField(field))
        }

        Ok(Self {
            name: required(name, Field::Name)?,
            email: required(email, Field::Email)?,
            message: required(message, Field::Message)?,
        })
    }
}

/// Where a field's value is looked up in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The configured element id (`#nombre`, ...)
    Id,
    /// The form-data entry named after [`Field::as_str`]
    Name,
    /// The first control of the field's input type
    Type,
}

impl FieldSource {
    /// Lookup priority
    pub const ORDER: [FieldSource; 3] = [FieldSource::Id, FieldSource::Name, FieldSource::Type];
}

/// First non-empty value, trying sources in [`FieldSource::ORDER`]
///
/// Later sources are not consulted once one yields a value.
pub fn resolve_field(mut lookup: impl FnMut(FieldSource) -> Option<String>) -> Option<String> {
    FieldSource::ORDER
        .into_iter()
        .find_map(|source| lookup(source).filter(|v| !v.is_empty()))
}

/// The page-side of the contact form
///
/// Implemented over the DOM in the browser build and by recording fakes in
/// tests.
pub trait ContactSurface {
    /// Current value of a field, if the field exists
    fn read_field(&self, field: Field) -> Option<String>;
    /// Blocking user-facing message
    fn alert(&self, message: &str);
    /// Current submit control label
    fn submit_label(&self) -> String;
    fn set_submit_state(&self, label: &str, disabled: bool);
    fn reset(&self);
    fn navigate(&self, url: &str) -> anyhow::Result<()>;
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the user was alerted
    Rejected(ContactError),
    /// The page was pointed at this `mailto:` URL
    Delegated(String),
    /// Navigation to the mail client failed
    NavigationFailed(String),
    /// Simulated send started
    Sending,
    /// A simulated send is already in flight; ignored
    Busy,
}

/// Owns the submit contract for one form
pub struct ContactController {
    config: ContactConfig,
    surface: Rc<dyn ContactSurface>,
    scheduler: Rc<dyn Scheduler>,
    sending: Cell<bool>,
}

impl ContactController {
    pub fn new(
        config: ContactConfig,
        surface: Rc<dyn ContactSurface>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Rc<Self> {
        Rc::new(Self {
            config,
            surface,
            scheduler,
            sending: Cell::new(false),
        })
    }

    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Handle a submit event (default navigation already prevented)
    pub fn submit(self: &Rc<Self>) -> SubmitOutcome {
        if self.sending.get() {
            tracing::debug!("Submit ignored: send already in flight");
            return SubmitOutcome::Busy;
        }

        let message = match self.read_message() {
            Ok(message) => message,
            Err(e) => {
                tracing::info!("Contact form rejected: {}", e);
                self.surface.alert(&self.config.missing_fields_message);
                return SubmitOutcome::Rejected(e);
            }
        };

        match self.config.mode {
            ContactMode::Mailto => self.delegate(&message),
            ContactMode::Simulated => self.simulate_send(),
        }
    }

    fn read_message(&self) -> Result<ContactMessage, ContactError> {
        ContactMessage::from_fields(
            self.surface.read_field(Field::Name),
            self.surface.read_field(Field::Email),
            self.surface.read_field(Field::Message),
        )
    }

    fn delegate(&self, message: &ContactMessage) -> SubmitOutcome {
        let url = build_mailto(
            &self.config.recipient,
            &self.config.subject_template,
            &self.config.body_template,
            message,
        );
        match self.surface.navigate(&url) {
            Ok(()) => {
                tracing::info!(
                    recipient = %self.config.recipient,
                    "Handing contact message to mail client"
                );
                SubmitOutcome::Delegated(url)
            }
            Err(e) => {
                tracing::error!("Failed to open mail client: {:#}", e);
                SubmitOutcome::NavigationFailed(e.to_string())
            }
        }
    }

    fn simulate_send(self: &Rc<Self>) -> SubmitOutcome {
        let original_label = self.surface.submit_label();
        self.sending.set(true);
        self.surface.set_submit_state(&self.config.sending_label, true);

        let this = self.clone();
        self.scheduler.after(
            self.config.sending_delay(),
            Box::new(move || {
                this.surface.alert(&this.config.sent_message);
                this.surface.reset();
                this.surface.set_submit_state(&original_label, false);
                this.sending.set(false);
                tracing::debug!("Simulated send finished");
            }),
        );
        SubmitOutcome::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::VirtualScheduler;
    use std::cell::RefCell;
    use std::time::Duration;

    #[test]
    fn test_field_lookup_order() {
        let mut tried = Vec::new();
        let value = resolve_field(|source| {
            tried.push(source);
            match source {
                FieldSource::Id => None,
                FieldSource::Name => Some("Ana".to_string()),
                FieldSource::Type => Some("ignored".to_string()),
            }
        });
        assert_eq!(value.as_deref(), Some("Ana"));
        assert_eq!(tried, vec![FieldSource::Id, FieldSource::Name]);
    }

    #[test]
    fn test_empty_id_value_falls_through_to_type() {
        let value = resolve_field(|source| match source {
            FieldSource::Id | FieldSource::Name => Some(String::new()),
            FieldSource::Type => Some("ana@example.com".to_string()),
        });
        assert_eq!(value.as_deref(), Some("ana@example.com"));
        assert_eq!(resolve_field(|_| None), None);
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Alert(String),
        Submit(String, bool),
        Reset,
        Navigate(String),
    }

    struct FakeForm {
        fields: [Option<String>; 3],
        label: RefCell<String>,
        calls: RefCell<Vec<Call>>,
        navigation_fails: bool,
    }

    impl FakeForm {
        fn new(name: &str, email: &str, message: &str) -> Rc<Self> {
            Self::build(name, email, message, false)
        }

        fn build(name: &str, email: &str, message: &str, navigation_fails: bool) -> Rc<Self> {
            Rc::new(Self {
                fields: [
                    Some(name.to_string()),
                    Some(email.to_string()),
                    Some(message.to_string()),
                ],
                label: RefCell::new("Enviar".to_string()),
                calls: RefCell::new(Vec::new()),
                navigation_fails,
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl ContactSurface for FakeForm {
        fn read_field(&self, field: Field) -> Option<String> {
            let i = Field::ALL.iter().position(|f| *f == field)?;
            self.fields[i].clone()
        }

        fn alert(&self, message: &str) {
            self.calls.borrow_mut().push(Call::Alert(message.to_string()));
        }

        fn submit_label(&self) -> String {
            self.label.borrow().clone()
        }

        fn set_submit_state(&self, label: &str, disabled: bool) {
            *self.label.borrow_mut() = label.to_string();
            self.calls
                .borrow_mut()
                .push(Call::Submit(label.to_string(), disabled));
        }

        fn reset(&self) {
            self.calls.borrow_mut().push(Call::Reset);
        }

        fn navigate(&self, url: &str) -> anyhow::Result<()> {
            if self.navigation_fails {
                anyhow::bail!("blocked");
            }
            self.calls.borrow_mut().push(Call::Navigate(url.to_string()));
            Ok(())
        }
    }

    fn controller(
        mode: ContactMode,
        form: Rc<FakeForm>,
    ) -> (Rc<VirtualScheduler>, Rc<ContactController>) {
        let sched = Rc::new(VirtualScheduler::new());
        let config = ContactConfig {
            mode,
            ..ContactConfig::default()
        };
        let controller = ContactController::new(config, form, sched.clone());
        (sched, controller)
    }

    #[test]
    fn test_validation_requires_every_field() {
        let ok = ContactMessage::from_fields(
            Some("Ana".into()),
            Some("a@b.com".into()),
            Some("Hola".into()),
        );
        assert!(ok.is_ok());

        let cases = [
            (None, Some("a@b.com"), Some("Hola"), Field::Name),
            (Some("Ana"), Some(""), Some("Hola"), Field::Email),
            (Some("Ana"), Some("a@b.com"), None, Field::Message),
        ];
        for (name, email, message, missing) in cases {
            let result = ContactMessage::from_fields(
                name.map(String::from),
                email.map(String::from),
                message.map(String::from),
            );
            assert_eq!(result, Err(ContactError::MissingField(missing)));
        }
    }

    #[test]
    fn test_empty_field_alerts_and_stops() {
        for mode in [ContactMode::Mailto, ContactMode::Simulated] {
            let form = FakeForm::new("Ana", "", "Hola");
            let (sched, ctl) = controller(mode, form.clone());

            let outcome = ctl.submit();
            assert_eq!(
                outcome,
                SubmitOutcome::Rejected(ContactError::MissingField(Field::Email))
            );
            assert_eq!(
                form.calls(),
                vec![Call::Alert(ContactConfig::default().missing_fields_message)]
            );
            assert_eq!(sched.pending_timers(), 0);
            assert!(!ctl.is_sending());
        }
    }

    #[test]
    fn test_mailto_mode_navigates_to_built_link() {
        let form = FakeForm::new("Ana", "a@b.com", "Hola");
        let (_, ctl) = controller(ContactMode::Mailto, form.clone());

        let url = match ctl.submit() {
            SubmitOutcome::Delegated(url) => url,
            other => panic!("expected delegation, got {:?}", other),
        };
        assert!(url.starts_with(
            "mailto:jesusdanielchable@gmail.com?subject=Contacto%20profesional%20de%20Ana&body="
        ));
        assert_eq!(form.calls(), vec![Call::Navigate(url)]);
    }

    #[test]
    fn test_mailto_navigation_failure_is_reported() {
        let form = FakeForm::build("Ana", "a@b.com", "Hola", true);
        let (_, ctl) = controller(ContactMode::Mailto, form.clone());
        assert!(matches!(ctl.submit(), SubmitOutcome::NavigationFailed(_)));
        assert!(form.calls().is_empty());
    }

    #[test]
    fn test_simulated_send_disables_then_restores() {
        let form = FakeForm::new("Ana", "a@b.com", "Hola");
        let (sched, ctl) = controller(ContactMode::Simulated, form.clone());
        let defaults = ContactConfig::default();

        assert_eq!(ctl.submit(), SubmitOutcome::Sending);
        assert_eq!(
            form.calls(),
            vec![Call::Submit(defaults.sending_label.clone(), true)]
        );
        assert!(ctl.is_sending());

        sched.advance(Duration::from_millis(1499));
        assert_eq!(form.calls().len(), 1);

        sched.advance(Duration::from_millis(1));
        assert_eq!(
            form.calls(),
            vec![
                Call::Submit(defaults.sending_label.clone(), true),
                Call::Alert(defaults.sent_message.clone()),
                Call::Reset,
                Call::Submit("Enviar".to_string(), false),
            ]
        );
        assert!(!ctl.is_sending());
    }

    #[test]
    fn test_second_submit_while_sending_is_ignored() {
        let form = FakeForm::new("Ana", "a@b.com", "Hola");
        let (sched, ctl) = controller(ContactMode::Simulated, form.clone());

        assert_eq!(ctl.submit(), SubmitOutcome::Sending);
        assert_eq!(ctl.submit(), SubmitOutcome::Busy);
        assert_eq!(sched.pending_timers(), 1);

        sched.advance(Duration::from_secs(2));
        assert_eq!(ctl.submit(), SubmitOutcome::Sending);
    }
}
