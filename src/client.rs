use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::FoodiesError;
use crate::model::{RecipeDetail, SearchCriteria, SearchResults, PAGE_SIZE};

/// Read-only surface of the recipe API, behind a trait so the views can be
/// driven by a stub in tests.
#[async_trait]
pub trait RecipeApi {
    /// Search recipes matching the given criteria. One GET to the
    /// `complexSearch` endpoint; no retry, no caching.
    async fn search_recipes(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, FoodiesError>;

    /// Fetch the full recipe document for one identifier.
    async fn fetch_recipe_by_id(&self, id: u64) -> Result<RecipeDetail, FoodiesError>;
}

/// HTTP client for the Spoonacular recipe API
pub struct SpoonacularClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to create HTTP client");

        SpoonacularClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Create a client pointed at a custom endpoint (used by tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        SpoonacularClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn search_recipes(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, FoodiesError> {
        let offset = criteria.offset();
        debug!(
            "searching recipes query={:?} cuisine={:?} page={} offset={}",
            criteria.query, criteria.cuisine, criteria.page, offset
        );

        let response = self
            .client
            .get(format!("{}/complexSearch", self.base_url))
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("query", criteria.query.as_str()),
                ("cuisine", criteria.cuisine.as_str()),
            ])
            .query(&[("number", PAGE_SIZE), ("offset", offset)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FoodiesError::RequestFailed(format!(
                "recipe search returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    async fn fetch_recipe_by_id(&self, id: u64) -> Result<RecipeDetail, FoodiesError> {
        debug!("fetching recipe detail id={}", id);

        let response = self
            .client
            .get(format!("{}/{}/information", self.base_url, id))
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FoodiesError::RequestFailed(format!(
                "recipe detail returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
