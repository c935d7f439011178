//! Form field names
//!
//! Fixed element names shared by the registration and login forms, plus the
//! raw name/value pairs a submit event carries.

use std::collections::HashMap;
use std::fmt;

/// A named input on one of the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordCheck,
    Terms,
    Persist,
}

impl Field {
    /// Element name as it appears on the form.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordCheck => "passwordCheck",
            Field::Terms => "terms",
            Field::Persist => "persist",
        }
    }

    /// Looks a field up by element name (exact match).
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "username" => Some(Field::Username),
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "passwordCheck" => Some(Field::PasswordCheck),
            "terms" => Some(Field::Terms),
            "persist" => Some(Field::Persist),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name/value pairs submitted with a form.
///
/// Unknown names are kept but ignored by the forms.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmittedFields {
    values: HashMap<String, String>,
}

impl SubmittedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Text value of a field, empty when it was not submitted.
    pub fn text(&self, field: Field) -> String {
        self.values.get(field.name()).cloned().unwrap_or_default()
    }

    /// Checkbox state: checked when present with a truthy value.
    pub fn checked(&self, field: Field) -> bool {
        match self.values.get(field.name()) {
            Some(value) => matches!(
                value.to_ascii_lowercase().as_str(),
                "" | "on" | "true" | "yes" | "1"
            ),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
