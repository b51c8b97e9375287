//! Contact-form intake.
//!
//! Validates a submission, persists it as a [`ContactMessage`], then
//! triggers the notifier. The two effects are deliberately independent:
//! the persist must succeed or the whole submission fails, while a
//! notification failure is logged and swallowed so the submitter still
//! sees success. The message row is never rolled back on mail trouble.

use tracing::warn;

use crate::models::ContactMessage;
use crate::notify::Notifier;
use crate::storage::Storage;
use crate::{Error, Result};

/// Raw contact-form input, exactly as the form posted it.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Trim surrounding whitespace and validate.
    ///
    /// Checks run in order: required fields first (name, email, subject,
    /// message must be non-empty after trimming), then the email
    /// heuristic - it must contain both an `@` and a `.`. This is a
    /// deliberately weak check, not RFC validation; the address is only
    /// ever used as a Reply-To.
    pub fn validate(&self) -> Result<ContactForm> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if form.name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if form.email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if form.subject.is_empty() {
            return Err(Error::MissingField("subject"));
        }
        if form.message.is_empty() {
            return Err(Error::MissingField("message"));
        }

        if !form.email.contains('@') || !form.email.contains('.') {
            return Err(Error::InvalidEmail);
        }

        Ok(form)
    }
}

/// Validate and persist a submission, then notify best-effort.
///
/// Returns the persisted message. Exactly one row is created and exactly
/// one notification attempt is made per successful call; the attempt is
/// neither retried nor allowed to fail the submission.
pub fn submit(
    store: &mut Storage,
    notifier: &Notifier,
    form: &ContactForm,
) -> Result<ContactMessage> {
    let form = form.validate()?;

    let mut message = ContactMessage::new(form.name, form.email, form.subject, form.message);
    message.phone = form.phone;
    store.add_contact_message(&mut message)?;

    if let Err(e) = notifier.notify_new_message(&message) {
        warn!(id = message.id, error = %e, "contact notification failed");
    }

    Ok(message)
}
