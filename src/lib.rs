//! Health Manager Rust Client Library
//!
//! A Rust client for the Health Manager food diary API: account creation
//! and sign-in, food search, and the per-day diary with its entry dialog,
//! local list reconciliation and nutrition summary.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod daily_entries;
pub mod day_view;
pub mod entries;
pub mod entry_form;
pub mod error;
pub mod fetch;
pub mod foods;
pub mod form;
pub mod model;
pub mod signup_form;
pub mod summary;
pub mod validation;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{EntryApi, FoodApi, SignupApi};
use crate::auth::{Auth, Session, SignUpPayload};
use crate::config::ClientOptions;
use crate::entries::EntriesClient;
use crate::error::Error;
use crate::foods::FoodsClient;
use crate::model::{DayDate, EntryPayload, Food, FoodItem};

/// The main entry point for the Health Manager client
#[derive(Clone)]
pub struct HealthManager {
    /// HTTP client used for requests
    http_client: Client,
    /// Bearer token shared by every sub-client
    session: Session,
    /// Auth client for sign-up and sign-in
    auth: Auth,
    /// Client options
    options: ClientOptions,
}

impl HealthManager {
    /// Create a new client against `api_url` with default options
    ///
    /// # Example
    ///
    /// ```
    /// use health_manager::HealthManager;
    ///
    /// let client = HealthManager::new("http://localhost:8000").unwrap();
    /// ```
    pub fn new(api_url: &str) -> Result<Self, Error> {
        Self::new_with_options(ClientOptions::default().with_api_url(api_url))
    }

    /// Create a new client with custom options
    ///
    /// The session file, if configured, is read here.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use health_manager::{HealthManager, config::ClientOptions};
    ///
    /// let options = ClientOptions::default()
    ///     .with_api_url("http://localhost:8000")
    ///     .with_request_timeout(Some(Duration::from_secs(5)));
    /// let client = HealthManager::new_with_options(options).unwrap();
    /// ```
    pub fn new_with_options(options: ClientOptions) -> Result<Self, Error> {
        url::Url::parse(&options.api_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let session = Session::load(options.session_path.clone())?;
        let auth = Auth::new(http_client.clone(), session.clone(), options.clone());

        Ok(Self {
            http_client,
            session,
            auth,
            options,
        })
    }

    /// Get a reference to the auth client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Client for the food catalog
    pub fn foods(&self) -> FoodsClient {
        FoodsClient::new(self.http_client.clone(), self.session.clone(), self.options.clone())
    }

    /// Client for the signed-in user's diary entries
    pub fn entries(&self) -> EntriesClient {
        EntriesClient::new(self.http_client.clone(), self.session.clone(), self.options.clone())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

#[async_trait]
impl FoodApi for HealthManager {
    async fn search_foods(&self, name: &str) -> Result<Vec<Food>, Error> {
        self.foods().search(name).await
    }
}

#[async_trait]
impl EntryApi for HealthManager {
    async fn list_entries(&self, date: &DayDate) -> Result<Vec<FoodItem>, Error> {
        self.entries().list(date).await
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<FoodItem, Error> {
        self.entries().create(payload).await
    }

    async fn update_entry(&self, id: i64, payload: &EntryPayload) -> Result<FoodItem, Error> {
        self.entries().update(id, payload).await
    }

    async fn delete_entry(&self, id: i64) -> Result<(), Error> {
        self.entries().delete(id).await
    }
}

#[async_trait]
impl SignupApi for HealthManager {
    async fn sign_up(&self, payload: &SignUpPayload) -> Result<(), Error> {
        self.auth.create_account(payload).await
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::HealthManager;
    pub use crate::app::AppState;
    pub use crate::config::ClientOptions;
    pub use crate::day_view::DayView;
    pub use crate::error::Error;
    pub use crate::model::{DayDate, Food, FoodItem, User};
    pub use crate::signup_form::SignupForm;
}
