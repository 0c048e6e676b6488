//! Contact form fields, validation, and the submission state machine.
//!
//! DESIGN
//! ======
//! `idle → submitting → {success, failed}`; a field edit moves a settled
//! form back to `idle`. The network call itself lives in `net::api` and is
//! driven by the component between [`ContactForm::begin_submit`] and
//! [`ContactForm::complete`], so the state machine stays synchronous.
//!
//! The `submitting` status is the only re-entrancy guard: a second submit
//! while a request is in flight is refused.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::api::SubmitError;
use crate::net::types::ContactPayload;

pub const NAME_REQUIRED: &str = "お名前を入力してください";
pub const EMAIL_INVALID: &str = "有効なメールアドレスを入力してください";
pub const MESSAGE_REQUIRED: &str = "ご相談内容を入力してください";
pub const SUCCESS_NOTICE: &str = "送信完了。折り返しご連絡いたします。";
pub const FAILURE_NOTICE: &str = "送信に失敗しました。時間をおいて再度お試しいただくか、メールでご連絡ください。";

/// Editable form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Values typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Per-field error messages. Empty string means no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name.clear(),
            Field::Email => self.email.clear(),
            Field::Message => self.message.clear(),
        }
    }
}

/// Apply the three field rules.
#[must_use]
pub fn validate(fields: &ContactFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if fields.name.trim().is_empty() {
        NAME_REQUIRED.clone_into(&mut errors.name);
    }
    if !fields.email.contains('@') {
        EMAIL_INVALID.clone_into(&mut errors.email);
    }
    if fields.message.trim().is_empty() {
        MESSAGE_REQUIRED.clone_into(&mut errors.message);
    }
    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Result of a submit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Honeypot filled: drop silently.
    Ignored,
    /// A request is already in flight.
    Busy,
    /// Validation failed; errors are populated.
    Invalid,
    /// Send this payload, then call [`ContactForm::complete`].
    Send(ContactPayload),
}

/// Complete contact form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    /// Hidden spam-trap input. Humans never see or fill it.
    pub honeypot: String,
}

impl ContactForm {
    /// Record a keystroke in `field`.
    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
        self.errors.clear(field);
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Failed) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn set_honeypot(&mut self, value: String) {
        self.honeypot = value;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Decide what a submit press does and move into `submitting` when valid.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if !self.honeypot.is_empty() {
            log::debug!("contact submission dropped by spam trap");
            return SubmitStep::Ignored;
        }
        if self.is_submitting() {
            return SubmitStep::Busy;
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return SubmitStep::Invalid;
        }
        self.status = SubmissionStatus::Submitting;
        SubmitStep::Send(ContactPayload::from(&self.fields))
    }

    /// Settle an in-flight submission.
    pub fn complete(&mut self, result: Result<(), SubmitError>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors = ValidationErrors::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.status = SubmissionStatus::Failed;
            }
        }
    }

    /// User-visible notice for a settled submission.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Success => Some(SUCCESS_NOTICE),
            SubmissionStatus::Failed => Some(FAILURE_NOTICE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}
