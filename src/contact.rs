//! Contact form state and validation

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Shortest message the form accepts
pub const MIN_MESSAGE_LEN: usize = 10;

/// A problem with one field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address is not valid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Which input currently has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Field receiving keystrokes
    pub focus: Field,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the focused input
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Checks every field and returns all problems found, in field order
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !email_pattern().is_match(email) {
            errors.push(FieldError::EmailInvalid);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::MessageRequired);
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::MessageTooShort);
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates the form and clears it when it passes
    ///
    /// # Returns
    /// * `Ok(name)` - the sender's name, for the confirmation message
    /// * `Err(errors)` - every field problem; the form is left as typed
    pub fn submit(&mut self) -> Result<String, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let name = self.name.trim().to_string();
        *self = Self::default();
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "Do you ship to Canada?".to_string(),
            focus: Field::Message,
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let form = ContactForm::new();
        assert_eq!(
            form.validate(),
            vec![
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::MessageRequired
            ]
        );
    }

    #[test]
    fn test_valid_form() {
        assert!(filled_form().is_valid());
    }

    #[test]
    fn test_email_shapes() {
        let mut form = filled_form();
        for bad in ["sam", "sam@", "sam@example", "@example.com", "sam @example.com"] {
            form.email = bad.to_string();
            assert_eq!(form.validate(), vec![FieldError::EmailInvalid], "{}", bad);
        }
        for good in ["sam@example.com", "s.a.m+shop@mail.example.co.uk"] {
            form.email = good.to_string();
            assert!(form.is_valid(), "{}", good);
        }
    }

    #[test]
    fn test_short_message() {
        let mut form = filled_form();
        form.message = "  hi there ".to_string();
        assert_eq!(form.validate(), vec![FieldError::MessageTooShort]);

        form.message = "0123456789".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), vec![FieldError::NameRequired]);
    }

    #[test]
    fn test_submit_clears_valid_form() {
        let mut form = filled_form();
        assert_eq!(form.submit(), Ok("Sam".to_string()));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_keeps_invalid_form() {
        let mut form = filled_form();
        form.email = "nope".to_string();
        let before = form.clone();

        assert_eq!(form.submit(), Err(vec![FieldError::EmailInvalid]));
        assert_eq!(form, before);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.push_char('A');
        form.focus = form.focus.next();
        form.push_char('b');
        form.push_char('c');
        form.backspace();

        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");
        assert_eq!(form.focus, Field::Email);
        assert_eq!(form.focus.previous(), Field::Name);
    }
}
