//! Account creation, sign-in and current user lookup

mod types;
mod session;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;

use crate::api::SignupApi;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::model::User;

pub use types::*;
pub use session::*;

/// Client for the authentication endpoints
#[derive(Clone)]
pub struct Auth {
    /// HTTP client used for requests
    client: Client,

    /// The current session
    session: Session,

    /// Client options
    options: ClientOptions,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(client: Client, session: Session, options: ClientOptions) -> Self {
        Self {
            client,
            session,
            options,
        }
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.options.api_url, path)
    }

    /// Create a new account
    pub async fn sign_up(&self, payload: &SignUpPayload) -> Result<User, Error> {
        let url = self.get_url("/signup");

        let user = Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .json(payload)?
            .execute::<User>()
            .await?;

        info!("Account created");
        Ok(user)
    }

    /// Create a new account, ignoring whatever the server sends back
    pub async fn create_account(&self, payload: &SignUpPayload) -> Result<(), Error> {
        let url = self.get_url("/signup");

        Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .json(payload)?
            .execute_empty()
            .await?;

        info!("Account created");
        Ok(())
    }

    /// Exchange credentials for a bearer token and store it in the session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, Error> {
        let url = self.get_url("/login");

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .json(&credentials)?
            .execute::<TokenResponse>()
            .await?;

        if let Err(e) = self.session.set_token(&response.token) {
            warn!("Token kept in memory only: {}", e);
        }
        debug!("Signed in");

        Ok(response.token)
    }

    /// Get the user data for the currently authenticated user
    pub async fn get_user(&self) -> Result<User, Error> {
        let url = self.get_url("/user");

        let token = self
            .session
            .token()
            .ok_or_else(|| Error::auth("Not logged in"))?;

        let user = Fetch::get(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .bearer_auth(&token)
            .execute::<User>()
            .await?;

        Ok(user)
    }

    /// Drop the stored token
    pub fn sign_out(&self) -> Result<(), Error> {
        self.session.clear()
    }

    /// Get the current session
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[async_trait]
impl SignupApi for Auth {
    async fn sign_up(&self, payload: &SignUpPayload) -> Result<(), Error> {
        self.create_account(payload).await
    }
}
