//! Field validators for the signup and diary entry forms
//!
//! Every function here is pure: same input, same answer, no panics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::{Field, FormErrors};
use crate::model::Food;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "It must be a valid email address";
pub const FIRST_NAME_MESSAGE: &str = "The first name is required";
pub const LAST_NAME_MESSAGE: &str = "The last name is required";
pub const PASSWORD_MESSAGE: &str = "The password must have at least one digit, one lowercase letter, one uppercase letter, and one non-alphanumeric character";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("email pattern compiles")
});

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
static LOWER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));
static UPPER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
static SYMBOL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!#$@%&'*+/=?^_`{|}~-]").expect("symbol pattern compiles"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Digit, lowercase, uppercase and symbol are required. Length is not checked.
pub fn is_valid_password(value: &str) -> bool {
    DIGIT_REGEX.is_match(value)
        && LOWER_REGEX.is_match(value)
        && UPPER_REGEX.is_match(value)
        && SYMBOL_REGEX.is_match(value)
}

pub fn email_error(value: &str) -> Option<&'static str> {
    (!is_valid_email(value)).then_some(EMAIL_MESSAGE)
}

pub fn first_name_error(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(FIRST_NAME_MESSAGE)
}

pub fn last_name_error(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(LAST_NAME_MESSAGE)
}

pub fn password_error(value: &str) -> Option<&'static str> {
    (!is_valid_password(value)).then_some(PASSWORD_MESSAGE)
}

/// Fresh error map for the diary entry form
pub fn validate_entry_form(selected_food: Option<&Food>, quantity: &str) -> FormErrors {
    let mut errors = FormErrors::new();

    if selected_food.is_none() {
        errors = errors.with(Field::Food, REQUIRED_MESSAGE);
    }

    if quantity.is_empty() {
        errors = errors.with(Field::Quantity, REQUIRED_MESSAGE);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> Food {
        Food { id: 3, name: "Bread".into(), calories: 265.0, portion: 100.0 }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a+tag@localhost"));
        assert!(is_valid_email("o'neil@mail.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john.doe"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john@exa mple.com"));
        assert!(!is_valid_email("john@example..com"));
    }

    #[test]
    fn test_password_strength() {
        assert!(!is_valid_password("p@ssw0rd"));
        assert!(is_valid_password("Str0ng-P@ssw0rd"));
        assert!(!is_valid_password("Passw0rd"));
        assert!(!is_valid_password("PASSW0RD!"));
        assert!(!is_valid_password("Password!"));
    }

    #[test]
    fn test_password_length_is_not_enforced() {
        // The message mentions no minimum and none is applied.
        assert!(is_valid_password("Ab1!"));
        assert!(is_valid_password("Abcd3f!"));
    }

    #[test]
    fn test_validators_are_stable() {
        for value in ["", "Str0ng-P@ssw0rd", "weak"] {
            assert_eq!(is_valid_password(value), is_valid_password(value));
            assert_eq!(password_error(value), password_error(value));
        }
    }

    #[test]
    fn test_name_errors() {
        assert_eq!(first_name_error(""), Some(FIRST_NAME_MESSAGE));
        assert_eq!(first_name_error("Ada"), None);
        assert_eq!(last_name_error(""), Some(LAST_NAME_MESSAGE));
    }

    #[test]
    fn test_entry_form_requires_food() {
        let errors = validate_entry_form(None, "100");
        assert_eq!(errors.get(Field::Food), Some(REQUIRED_MESSAGE));
        assert!(!errors.has(Field::Quantity));
    }

    #[test]
    fn test_entry_form_requires_quantity() {
        let food = bread();
        let errors = validate_entry_form(Some(&food), "");
        assert_eq!(errors.get(Field::Quantity), Some(REQUIRED_MESSAGE));
        assert!(!errors.has(Field::Food));
    }

    #[test]
    fn test_entry_form_accepts_zero_quantity_text() {
        let food = bread();
        assert!(validate_entry_form(Some(&food), "0").is_empty());
    }
}
