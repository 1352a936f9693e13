mod model;

pub use model::*;

use std::env;

use serde::Deserialize;
use thiserror::Error;

static BASE_URL: &str = "https://api.rawg.io/api";

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("RAWG_API_KEY not set")]
    MissingApiKey,
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the remote game catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    api_key: String,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client from an explicit api key, falling back to the
    /// RAWG_API_KEY environment variable when no key is given.
    pub fn new(api_key: Option<String>) -> Result<CatalogClient, CatalogError> {
        let api_key = match api_key.or_else(|| env::var("RAWG_API_KEY").ok()) {
            Some(v) => v,
            None => return Err(CatalogError::MissingApiKey),
        };

        Ok(CatalogClient {
            api_key,
            base_url: BASE_URL.to_owned(),
        })
    }

    /// Creates a client that talks to `base_url` instead of the live service.
    pub fn with_base_url(api_key: &str, base_url: &str) -> CatalogClient {
        CatalogClient {
            api_key: api_key.to_owned(),
            base_url: base_url.to_owned(),
        }
    }

    /// Retrieves one page of games with the default page size.
    pub async fn fetch_games(&self, page: u32) -> Result<Vec<RawGame>, CatalogError> {
        self.fetch_games_sized(page, DEFAULT_PAGE_SIZE).await
    }

    /// Retrieves one page of games from the catalog service.
    ///
    /// Any non-success status or transport failure surfaces as a single
    /// [`CatalogError::Request`]; nothing is retried.
    pub async fn fetch_games_sized(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RawGame>, CatalogError> {
        // Each call scopes its own connection.
        let req_client: reqwest::Client = reqwest::Client::new();

        let params = [
            ("key", self.api_key.clone()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];

        let response = req_client
            .get(format!("{}/games", self.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let body: CatalogPage = response.json().await?;

        Ok(body.results)
    }
}

// The catalog responds with pagination metadata next to `results`; only the
// records themselves are consumed.
#[derive(Deserialize)]
struct CatalogPage {
    #[serde(default)]
    results: Vec<RawGame>,
}
