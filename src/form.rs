//! Field errors and transient banner messages shared by the form controllers

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Food,
    Quantity,
    Email,
    FirstName,
    LastName,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Quantity => "quantity",
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages
///
/// A field is invalid exactly when it has an entry. Values are never
/// mutated in place: every update returns a new map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this map with `field` set to `message`
    pub fn with(&self, field: Field, message: &str) -> Self {
        let mut errors = self.0.clone();
        errors.insert(field, message.to_string());
        Self(errors)
    }

    /// Copy of this map with `field` cleared
    pub fn without(&self, field: Field) -> Self {
        let mut errors = self.0.clone();
        errors.remove(&field);
        Self(errors)
    }

    /// Copy with `field` set when `message` is `Some`, cleared otherwise
    pub fn with_result(&self, field: Field, message: Option<&str>) -> Self {
        match message {
            Some(message) => self.with(field, message),
            None => self.without(field),
        }
    }

    /// Entries of `other` override entries of `self`
    pub fn union(&self, other: &FormErrors) -> Self {
        let mut errors = self.0.clone();
        errors.extend(other.0.iter().map(|(k, v)| (*k, v.clone())));
        Self(errors)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// Transient banner shown after a remote operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SnackbarMessage {
    pub text: String,
    pub open: bool,
    pub severity: Severity,
}

impl SnackbarMessage {
    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            open: true,
            severity: Severity::Success,
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            open: true,
            severity: Severity::Error,
        }
    }

    /// Hide the banner, keeping its text and severity
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Text of the banner while it is visible
    pub fn visible_text(&self) -> Option<&str> {
        if self.open {
            Some(&self.text)
        } else {
            None
        }
    }
}
