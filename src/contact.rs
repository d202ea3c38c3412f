use log::info;

use crate::error::{ContactError, ContactField};

/// Local state of the "Share Your Thoughts" form. Nothing is ever sent
/// anywhere: a valid submission only flips the form into its thank-you state
/// until the acknowledgement timer expires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    acknowledged: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Edits are dropped while the acknowledgement is on screen.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.acknowledged {
            return;
        }
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// `required` on text inputs accepts whitespace; email values are
    /// stripped by the browser before the check.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField(ContactField::Name));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField(ContactField::Email));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField(ContactField::Message));
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn submit(&mut self) -> Result<(), ContactError> {
        if self.acknowledged {
            return Err(ContactError::AwaitingReset);
        }
        self.validate()?;

        info!("Contact form submitted ({} characters)", self.message.chars().count());
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.acknowledged = true;
        Ok(())
    }

    /// Called when the acknowledgement delay runs out.
    pub fn acknowledgement_expired(&mut self) {
        *self = Self::default();
    }
}

/// Same shape the browser enforces for `type="email"`: one `@` with something
/// on both sides and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Ada".to_string());
        form.set_field(ContactField::Email, "ada@example.com".to_string());
        form.set_field(ContactField::Message, "Listening is hard.".to_string());
        form
    }

    fn assert_empty(form: &ContactForm) {
        assert_eq!(form.field(ContactField::Name), "");
        assert_eq!(form.field(ContactField::Email), "");
        assert_eq!(form.field(ContactField::Message), "");
    }

    #[test]
    fn test_submit_acknowledges_and_clears() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_acknowledged());
        assert_empty(&form);
    }

    #[test]
    fn test_form_returns_empty_after_delay() {
        let mut form = filled();
        form.submit().unwrap();
        form.set_field(ContactField::Name, "Typed during thank-you".to_string());
        form.acknowledgement_expired();
        assert!(!form.is_acknowledged());
        assert_empty(&form);
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut form = filled();
        form.set_field(ContactField::Message, String::new());
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(ContactField::Message))
        );
        assert!(!form.is_acknowledged());
        assert_eq!(form.field(ContactField::Name), "Ada");

        let mut form = ContactForm::new();
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_whitespace_only_text_counts_as_filled() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "   ".to_string());
        form.set_field(ContactField::Email, "a@b.co".to_string());
        form.set_field(ContactField::Message, "hi".to_string());
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_acknowledged());

        let mut form = filled();
        form.set_field(ContactField::Email, "   ".to_string());
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(ContactField::Email))
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = filled();
        form.set_field(ContactField::Email, "not-an-email".to_string());
        assert_eq!(form.submit(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_second_submit_while_acknowledged() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(ContactError::AwaitingReset));
        assert!(form.is_acknowledged());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email(" someone@example.org "));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("someone@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("some one@example.org"));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ContactError::MissingField(ContactField::Email);
        assert_eq!(err.to_string(), "Email Address is required");
    }
}
