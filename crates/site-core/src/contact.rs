//! Contact Form
//!
//! Field state, validation and the submit/reset cycle of the contact page.
//! Delivery goes through a [`SubmissionSink`]; the site ships a sink that
//! only logs, so nothing leaves the browser.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// How long the confirmation panel stays up before the form resets
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// What the visitor wants to talk about
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    #[default]
    General,
    Demo,
    Pricing,
    Partnership,
    Support,
}

impl Interest {
    /// Options in the order the select lists them
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Demo,
        Self::Pricing,
        Self::Partnership,
        Self::Support,
    ];

    /// Value submitted by the `<select>`
    pub const fn value(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Demo => "demo",
            Self::Pricing => "pricing",
            Self::Partnership => "partnership",
            Self::Support => "support",
        }
    }

    /// Option label
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Demo => "Request a Demo",
            Self::Pricing => "Pricing Information",
            Self::Partnership => "Partnership Opportunities",
            Self::Support => "Technical Support",
        }
    }
}

impl FromStr for Interest {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|interest| interest.value() == s)
            .ok_or_else(|| SiteError::UnknownInterest(s.to_string()))
    }
}

/// A contact form input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
    Interest,
}

impl Field {
    /// The `name` attribute of the input
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::Interest => "interest",
        }
    }

    /// Phrase used in visitor-facing messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "your name",
            Self::Email => "your email",
            Self::Company => "your company",
            Self::Phone => "your phone number",
            Self::Message => "a message",
            Self::Interest => "your interest",
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message | Self::Interest)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

impl FromStr for Field {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "phone" => Ok(Self::Phone),
            "message" => Ok(Self::Message),
            "interest" => Ok(Self::Interest),
            other => Err(SiteError::UnknownField(other.to_string())),
        }
    }
}

/// Field values as typed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub interest: Interest,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field from its raw input value
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
            Field::Interest => self.interest = value.parse()?,
        }
        Ok(())
    }

    /// Current raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Interest => self.interest.value(),
        }
    }

    /// Check required fields and the email shape.
    ///
    /// Mirrors what the browser enforces through `required` and
    /// `type="email"`: empty values fail, whitespace-only values do not.
    pub fn validate(&self) -> Result<()> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).is_empty() {
                return Err(SiteError::MissingField(field));
            }
        }
        if !is_email(&self.email) {
            return Err(SiteError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Whether every field is back to its initial value
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Payload handed to a [`SubmissionSink`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub interest: Interest,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    fn from_form(form: &ContactForm) -> Self {
        let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            company: optional(&form.company),
            phone: optional(&form.phone),
            message: form.message.clone(),
            interest: form.interest,
            submitted_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Destination for contact submissions
pub trait SubmissionSink {
    /// Accept a submission or report why it could not be delivered
    fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Sink that records submissions through `tracing`.
///
/// For host-side use (tests, tooling); the browser build delivers through
/// its own console sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::info!(payload = %submission.to_json()?, "contact form submitted");
        Ok(())
    }
}

/// Where the form is in its submit/reset cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Contact form with its submit/reset cycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormMachine {
    form: ContactForm,
    phase: FormPhase,
}

impl ContactFormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Edit a field. Ignored while the confirmation panel is up.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        if self.is_submitted() {
            return Err(SiteError::NotEditing);
        }
        self.form.set_field(field, value)
    }

    /// Validate, deliver and show the confirmation.
    ///
    /// On any error the phase and field values are left as they were.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<ContactSubmission> {
        if self.is_submitted() {
            return Err(SiteError::NotEditing);
        }
        self.form.validate()?;

        let submission = ContactSubmission::from_form(&self.form);
        sink.deliver(&submission)?;

        tracing::debug!(interest = ?submission.interest, "contact form moved to submitted");
        self.phase = FormPhase::Submitted;
        Ok(submission)
    }

    /// Return to an empty editable form. No-op while editing.
    pub fn reset(&mut self) {
        if self.is_submitted() {
            self.form = ContactForm::default();
            self.phase = FormPhase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: RefCell<Vec<ContactSubmission>>,
    }

    impl SubmissionSink for RecordingSink {
        fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
            self.delivered.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn deliver(&self, _submission: &ContactSubmission) -> Result<()> {
            Err(SiteError::Delivery("offline".into()))
        }
    }

    fn filled() -> ContactFormMachine {
        let mut machine = ContactFormMachine::new();
        machine.set_field(Field::Name, "Jane").unwrap();
        machine.set_field(Field::Email, "jane@x.com").unwrap();
        machine.set_field(Field::Interest, "demo").unwrap();
        machine.set_field(Field::Message, "Hi").unwrap();
        machine
    }

    #[test]
    fn test_submit_then_reset() {
        let sink = RecordingSink::default();
        let mut machine = filled();

        let submission = machine.submit(&sink).unwrap();
        assert_eq!(machine.phase(), FormPhase::Submitted);
        assert_eq!(submission.interest, Interest::Demo);
        assert_eq!(submission.company, None);
        assert_eq!(sink.delivered.borrow().len(), 1);

        machine.reset();
        assert_eq!(machine.phase(), FormPhase::Editing);
        assert!(machine.form().is_blank());
        assert_eq!(machine.form().interest, Interest::General);
    }

    #[test]
    fn test_missing_required_field_blocks_submit() {
        let sink = RecordingSink::default();
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut machine = filled();
            machine.set_field(field, "").unwrap();
            let before = machine.clone();

            let err = machine.submit(&sink).unwrap_err();
            assert!(matches!(err, SiteError::MissingField(f) if f == field));
            assert_eq!(machine, before);
        }
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn test_optional_fields_are_optional() {
        let mut machine = filled();
        machine.set_field(Field::Company, "Acme").unwrap();
        let submission = machine.submit(&TracingSink).unwrap();
        assert_eq!(submission.company.as_deref(), Some("Acme"));
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("jane@x.com"));
        assert!(is_email("jane@localhost"));
        assert!(!is_email("jane"));
        assert!(!is_email("@x.com"));
        assert!(!is_email("jane@"));
        assert!(!is_email("ja ne@x.com"));
        assert!(!is_email("a@b@c"));
        assert!(!is_email("jane@.com"));
    }

    #[test]
    fn test_delivery_failure_keeps_editing() {
        let mut machine = filled();
        let err = machine.submit(&FailingSink).unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(machine.phase(), FormPhase::Editing);
        assert_eq!(machine.form().name, "Jane");
    }

    #[test]
    fn test_locked_while_submitted() {
        let mut machine = filled();
        machine.submit(&TracingSink).unwrap();
        assert!(matches!(machine.set_field(Field::Name, "X"), Err(SiteError::NotEditing)));
        assert!(matches!(machine.submit(&TracingSink), Err(SiteError::NotEditing)));
    }

    #[test]
    fn test_reset_while_editing_is_noop() {
        let mut machine = filled();
        machine.reset();
        assert_eq!(machine.form().name, "Jane");
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!("phone".parse::<Field>().unwrap(), Field::Phone);
        assert!("fax".parse::<Field>().is_err());
        assert_eq!("support".parse::<Interest>().unwrap(), Interest::Support);
        assert!(matches!("sales".parse::<Interest>(), Err(SiteError::UnknownInterest(_))));
    }

    #[test]
    fn test_submission_json() {
        let submission = filled().submit(&TracingSink).unwrap();
        let json: serde_json::Value = serde_json::from_str(&submission.to_json().unwrap()).unwrap();
        assert_eq!(json["interest"], "demo");
        assert_eq!(json["email"], "jane@x.com");
        assert!(json.get("company").is_none());
    }
}
