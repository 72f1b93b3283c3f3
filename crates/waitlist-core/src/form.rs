//! Form fields and their validation errors.

use std::collections::BTreeMap;

use crate::{validate_email, ValidationError};

/// Fields of the waitlist form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// The email input.
    Recipient,
}

impl Field {
    /// Form control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Recipient => "recipient",
        }
    }
}

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub recipient_email: String,
}

impl FormState {
    /// Whether the email field holds anything besides whitespace.
    pub fn is_blank(&self) -> bool {
        self.recipient_email.trim().is_empty()
    }

    /// Validate every field.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.set(Field::Recipient, validate_email(&self.recipient_email).err());
        errors
    }
}

/// Per-field validation errors. A missing entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    /// Record or clear the error for a field.
    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(Field::Recipient.as_str(), "recipient");
    }

    #[test]
    fn test_blank_form() {
        let form = FormState::default();
        assert!(form.is_blank());

        let form = FormState {
            recipient_email: "  ".to_string(),
        };
        assert!(form.is_blank());
    }

    #[test]
    fn test_validate_form() {
        let form = FormState {
            recipient_email: "nope".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.get(Field::Recipient), Some(ValidationError::Invalid));

        let form = FormState {
            recipient_email: "ok@example.com".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_set_and_clear() {
        let mut errors = ValidationErrors::default();
        errors.set(Field::Recipient, Some(ValidationError::Required));
        assert!(!errors.is_empty());
        assert_eq!(errors.get(Field::Recipient), Some(ValidationError::Required));

        errors.set(Field::Recipient, None);
        assert!(errors.is_empty());

        errors.set(Field::Recipient, Some(ValidationError::Invalid));
        errors.clear();
        assert!(errors.get(Field::Recipient).is_none());
    }
}
