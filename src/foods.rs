//! Food catalog search

use async_trait::async_trait;
use reqwest::Client;

use crate::api::FoodApi;
use crate::auth::Session;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::model::Food;

/// Client for `/food`
#[derive(Clone)]
pub struct FoodsClient {
    client: Client,
    session: Session,
    options: ClientOptions,
}

impl FoodsClient {
    pub(crate) fn new(client: Client, session: Session, options: ClientOptions) -> Self {
        Self {
            client,
            session,
            options,
        }
    }

    /// Foods whose name matches `name`
    pub async fn search(&self, name: &str) -> Result<Vec<Food>, Error> {
        let url = format!("{}/food", self.options.api_url);
        let token = self.session.token();

        Fetch::get(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .maybe_bearer_auth(token.as_deref())
            .query("name", name)
            .execute::<Vec<Food>>()
            .await
    }
}

#[async_trait]
impl FoodApi for FoodsClient {
    async fn search_foods(&self, name: &str) -> Result<Vec<Food>, Error> {
        self.search(name).await
    }
}
