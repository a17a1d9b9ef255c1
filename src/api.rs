//! Remote collaborators used by the form controllers and the day view
//!
//! The HTTP clients implement these traits; controller tests substitute
//! in-memory fakes.

use async_trait::async_trait;

use crate::auth::SignUpPayload;
use crate::error::Error;
use crate::model::{DayDate, EntryPayload, Food, FoodItem};

/// Food catalog lookup
#[async_trait]
pub trait FoodApi: Send + Sync {
    async fn search_foods(&self, name: &str) -> Result<Vec<Food>, Error>;
}

/// CRUD on the signed-in user's diary entries
#[async_trait]
pub trait EntryApi: Send + Sync {
    async fn list_entries(&self, date: &DayDate) -> Result<Vec<FoodItem>, Error>;

    async fn create_entry(&self, payload: &EntryPayload) -> Result<FoodItem, Error>;

    async fn update_entry(&self, id: i64, payload: &EntryPayload) -> Result<FoodItem, Error>;

    async fn delete_entry(&self, id: i64) -> Result<(), Error>;
}

/// Account creation
#[async_trait]
pub trait SignupApi: Send + Sync {
    async fn sign_up(&self, payload: &SignUpPayload) -> Result<(), Error>;
}
