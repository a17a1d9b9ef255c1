//! Account creation form

use log::warn;

use crate::api::SignupApi;
use crate::auth::SignUpPayload;
use crate::form::{Field, FormErrors, SnackbarMessage};
use crate::validation::{email_error, first_name_error, last_name_error, password_error};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account successfully created.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Error during account creation.";

/// Field values and per-field errors of the signup form
///
/// Change and blur events validate only the touched field; every other
/// field keeps its current error state.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    password_visible: bool,
    errors: FormErrors,
    message: SnackbarMessage,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.errors = self.errors.with_result(Field::Email, email_error(value));
    }

    pub fn blur_email(&mut self, value: &str) {
        self.change_email(value);
    }

    pub fn change_first_name(&mut self, value: &str) {
        let value = value.trim();
        self.first_name = value.to_string();
        self.errors = self.errors.with_result(Field::FirstName, first_name_error(value));
    }

    pub fn blur_first_name(&mut self, value: &str) {
        self.change_first_name(value);
    }

    pub fn change_last_name(&mut self, value: &str) {
        let value = value.trim();
        self.last_name = value.to_string();
        self.errors = self.errors.with_result(Field::LastName, last_name_error(value));
    }

    pub fn blur_last_name(&mut self, value: &str) {
        self.change_last_name(value);
    }

    pub fn change_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.errors = self.errors.with_result(Field::Password, password_error(value));
    }

    pub fn blur_password(&mut self, value: &str) {
        self.change_password(value);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn message(&self) -> &SnackbarMessage {
        &self.message
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }

    /// Re-validate every field from scratch
    fn validate(&self) -> FormErrors {
        FormErrors::new()
            .with_result(Field::Email, email_error(&self.email))
            .with_result(Field::FirstName, first_name_error(&self.first_name))
            .with_result(Field::LastName, last_name_error(&self.last_name))
            .with_result(Field::Password, password_error(&self.password))
    }

    /// Validate all fields and, if they pass, create the account
    ///
    /// Returns `true` when the account was created.
    pub async fn submit<A: SignupApi + ?Sized>(&mut self, api: &A) -> bool {
        self.errors = self.validate();

        if !self.errors.is_empty() {
            return false;
        }

        let payload = SignUpPayload {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
        };

        match api.sign_up(&payload).await {
            Ok(()) => {
                self.message = SnackbarMessage::success(SIGNUP_SUCCESS_MESSAGE);
                true
            }
            Err(e) => {
                warn!("Sign up rejected: {}", e);
                self.message = SnackbarMessage::error(SIGNUP_FAILED_MESSAGE);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Call, FakeApi};
    use crate::form::Severity;
    use crate::validation::{EMAIL_MESSAGE, FIRST_NAME_MESSAGE, LAST_NAME_MESSAGE, PASSWORD_MESSAGE};

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.change_email("ada@example.com");
        form.change_first_name("Ada");
        form.change_last_name("Lovelace");
        form.change_password("Str0ng-P@ssw0rd");
        form
    }

    #[test]
    fn test_field_validation_is_incremental() {
        let mut form = SignupForm::new();
        form.change_email("not-an-email");
        form.change_first_name("");

        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_MESSAGE));
        assert_eq!(form.errors().get(Field::FirstName), Some(FIRST_NAME_MESSAGE));

        form.blur_email("ada@example.com");
        assert!(!form.errors().has(Field::Email));
        assert!(form.errors().has(Field::FirstName));
        assert!(!form.errors().has(Field::Password));
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut form = SignupForm::new();
        form.change_first_name("   ");
        form.change_last_name("  Lovelace ");

        assert_eq!(form.first_name(), "");
        assert_eq!(form.errors().get(Field::FirstName), Some(FIRST_NAME_MESSAGE));
        assert_eq!(form.last_name(), "Lovelace");
        assert!(!form.errors().has(Field::LastName));
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut form = SignupForm::new();
        assert!(!form.password_visible());
        form.toggle_password_visibility();
        assert!(form.password_visible());
    }

    #[tokio::test]
    async fn test_empty_submit_reports_every_field() {
        let api = FakeApi::new();
        let mut form = SignupForm::new();

        assert!(!form.submit(&api).await);
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_MESSAGE));
        assert_eq!(form.errors().get(Field::FirstName), Some(FIRST_NAME_MESSAGE));
        assert_eq!(form.errors().get(Field::LastName), Some(LAST_NAME_MESSAGE));
        assert_eq!(form.errors().get(Field::Password), Some(PASSWORD_MESSAGE));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_weak_password_blocks_submit() {
        let api = FakeApi::new();
        let mut form = filled();
        form.change_password("p@ssw0rd");

        assert!(!form.submit(&api).await);
        assert_eq!(form.errors().len(), 1);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_short_strong_password_is_accepted() {
        let api = FakeApi::new();
        let mut form = filled();
        form.change_password("Ab1!");

        assert!(form.submit(&api).await);
    }

    #[tokio::test]
    async fn test_successful_signup() {
        let api = FakeApi::new();
        let mut form = filled();

        assert!(form.submit(&api).await);
        assert!(form.errors().is_empty());
        assert_eq!(form.message(), &SnackbarMessage::success(SIGNUP_SUCCESS_MESSAGE));
        assert_eq!(
            api.calls(),
            vec![Call::SignUp(SignUpPayload {
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                password: "Str0ng-P@ssw0rd".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_rejected_signup() {
        let api = FakeApi::failing();
        let mut form = filled();

        assert!(!form.submit(&api).await);
        assert_eq!(form.message().text, SIGNUP_FAILED_MESSAGE);
        assert_eq!(form.message().severity, Severity::Error);

        form.dismiss_message();
        assert!(!form.message().open);
    }
}
