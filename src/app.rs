//! Application-level state: who is signed in

use log::{debug, warn};

use crate::error::Error;
use crate::form::SnackbarMessage;
use crate::model::User;
use crate::HealthManager;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// State owned by the application shell and lent to the views
#[derive(Debug, Clone, Default)]
pub struct AppState {
    current_user: Option<User>,
    message: SnackbarMessage,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user
            .as_ref()
            .map(|u| !u.email.is_empty())
            .unwrap_or(false)
    }

    pub fn message(&self) -> &SnackbarMessage {
        &self.message
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }

    /// Log in, then load the user. Returns `true` once the user is set.
    ///
    /// A rejected login shows "Invalid credentials"; a failed user lookup
    /// after a successful login is silent.
    pub async fn sign_in(&mut self, client: &HealthManager, email: &str, password: &str) -> bool {
        if let Err(e) = client.auth().sign_in(email, password).await {
            warn!("Login rejected: {}", e);
            self.message = SnackbarMessage::error(INVALID_CREDENTIALS_MESSAGE);
            return false;
        }

        self.refresh_user(client).await
    }

    /// Load the user for a token left by an earlier session, if any
    pub async fn restore(&mut self, client: &HealthManager) -> bool {
        if !client.session().is_present() {
            return false;
        }

        self.refresh_user(client).await
    }

    async fn refresh_user(&mut self, client: &HealthManager) -> bool {
        match client.auth().get_user().await {
            Ok(user) => {
                self.current_user = Some(user);
                true
            }
            Err(e) => {
                debug!("Fetching current user failed: {}", e);
                false
            }
        }
    }

    /// Drop the token and the current user
    pub fn logout(&mut self, client: &HealthManager) -> Result<(), Error> {
        self.current_user = None;
        client.auth().sign_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_needs_email() {
        let mut state = AppState::new();
        assert!(!state.is_authenticated());

        state.set_user(User::default());
        assert!(!state.is_authenticated());

        state.set_user(User {
            id: 1,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        });
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_without_token_is_noop() {
        let client = HealthManager::new("http://127.0.0.1:9").unwrap();
        let mut state = AppState::new();

        assert!(!state.restore(&client).await);
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_logout_clears_user_and_token() {
        let client = HealthManager::new("http://127.0.0.1:9").unwrap();
        client.session().set_token("abc").unwrap();
        let mut state = AppState::new();
        state.set_user(User { email: "a@b.c".to_string(), ..Default::default() });

        state.logout(&client).unwrap();

        assert!(state.current_user().is_none());
        assert!(!client.session().is_present());
    }
}
