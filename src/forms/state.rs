//! Form state
//!
//! Transient values held by the registration and login forms between a
//! submit event and the next reset.

use crate::forms::fields::{Field, SubmittedFields};

/// Values of the registration form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_check: String,
    pub terms: bool,
}

impl RegistrationForm {
    pub fn from_fields(fields: &SubmittedFields) -> Self {
        Self {
            username: fields.text(Field::Username),
            email: fields.text(Field::Email),
            password: fields.text(Field::Password),
            password_check: fields.text(Field::PasswordCheck),
            terms: fields.checked(Field::Terms),
        }
    }

    /// Clears every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Values of the login form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub persist: bool,
}

impl LoginForm {
    pub fn from_fields(fields: &SubmittedFields) -> Self {
        Self {
            username: fields.text(Field::Username),
            password: fields.text(Field::Password),
            persist: fields.checked(Field::Persist),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_from_fields() {
        let mut fields = SubmittedFields::new();
        fields.insert("username", "Bob1");
        fields.insert("email", "bob1@mail.com");
        fields.insert("password", "StrongPass123!");
        fields.insert("passwordCheck", "StrongPass123!");
        fields.insert("terms", "on");

        let mut form = RegistrationForm::from_fields(&fields);
        assert_eq!(form.username, "Bob1");
        assert_eq!(form.password_check, "StrongPass123!");
        assert!(form.terms);

        form.reset();
        assert_eq!(form, RegistrationForm::default());
    }

    #[test]
    fn test_login_without_persist() {
        let mut fields = SubmittedFields::new();
        fields.insert("username", "bob1");
        fields.insert("password", "secret");

        let form = LoginForm::from_fields(&fields);
        assert!(!form.persist);
        assert_eq!(form.password, "secret");
    }
}
