//! Diary entries of the signed-in user

use async_trait::async_trait;
use log::info;
use reqwest::Client;

use crate::api::EntryApi;
use crate::auth::Session;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};
use crate::model::{DayDate, EntryPayload, FoodItem};

/// Client for `/user/food`
#[derive(Clone)]
pub struct EntriesClient {
    client: Client,
    session: Session,
    options: ClientOptions,
}

impl EntriesClient {
    pub(crate) fn new(client: Client, session: Session, options: ClientOptions) -> Self {
        Self {
            client,
            session,
            options,
        }
    }

    fn get_url(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/user/food/{}", self.options.api_url, id),
            None => format!("{}/user/food", self.options.api_url),
        }
    }

    fn authorized<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        let token = self.session.token();
        builder
            .header("X-Client-Info", &self.options.client_info)
            .maybe_bearer_auth(token.as_deref())
    }

    /// Entries logged on `date`
    pub async fn list(&self, date: &DayDate) -> Result<Vec<FoodItem>, Error> {
        let url = self.get_url(None);

        self.authorized(Fetch::get(&self.client, &url))
            .query("timestamp", &date.timestamp_filter())
            .execute::<Vec<FoodItem>>()
            .await
    }

    /// Log a new entry
    pub async fn create(&self, payload: &EntryPayload) -> Result<FoodItem, Error> {
        let url = self.get_url(None);

        let item = self
            .authorized(Fetch::post(&self.client, &url))
            .json(payload)?
            .execute::<FoodItem>()
            .await?;

        info!("Created entry {}", item.id);
        Ok(item)
    }

    /// Replace food, quantity and timestamp of entry `id`
    pub async fn update(&self, id: i64, payload: &EntryPayload) -> Result<FoodItem, Error> {
        let url = self.get_url(Some(id));

        let item = self
            .authorized(Fetch::put(&self.client, &url))
            .json(payload)?
            .execute::<FoodItem>()
            .await?;

        info!("Updated entry {}", item.id);
        Ok(item)
    }

    /// Delete entry `id`
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let url = self.get_url(Some(id));

        self.authorized(Fetch::delete(&self.client, &url))
            .execute_empty()
            .await?;

        info!("Deleted entry {}", id);
        Ok(())
    }
}

#[async_trait]
impl EntryApi for EntriesClient {
    async fn list_entries(&self, date: &DayDate) -> Result<Vec<FoodItem>, Error> {
        self.list(date).await
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<FoodItem, Error> {
        self.create(payload).await
    }

    async fn update_entry(&self, id: i64, payload: &EntryPayload) -> Result<FoodItem, Error> {
        self.update(id, payload).await
    }

    async fn delete_entry(&self, id: i64) -> Result<(), Error> {
        self.delete(id).await
    }
}
