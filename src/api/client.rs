// SPDX-License-Identifier: MPL-2.0
//! `reqwest` client for the image search endpoint.

use crate::config::{ApiConfig, SortDirection};
use crate::error::FetchError;
use crate::gallery::{Item, Page};
use reqwest::Url;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("CatGallery/", env!("CARGO_PKG_VERSION"));

/// Path of the search endpoint relative to the API base URL.
const SEARCH_PATH: &str = "images/search";

/// Where and how to query the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub base_url: String,
    pub page_size: u32,
    pub order: SortDirection,
}

impl Endpoint {
    /// Builds the search URL for `page`:
    /// `{base}/images/search?limit={size}&page={page}&order={Desc|Asc|Rand}`.
    pub fn search_url(&self, page: Page) -> Result<Url, FetchError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{SEARCH_PATH}"))
            .map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("limit", &self.page_size.to_string())
            .append_pair("page", &page.value().to_string())
            .append_pair("order", self.order.as_query_value());
        Ok(url)
    }
}

impl From<&ApiConfig> for Endpoint {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url(),
            page_size: config.page_size(),
            order: config.order(),
        }
    }
}

/// Client for the image search API.
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl CatApiClient {
    /// Builds a client with the configured timeout, a bounded redirect policy
    /// and the application user agent.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_secs(config.timeout_secs()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: Endpoint::from(config),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetches one page of image records.
    ///
    /// An empty array means there are no further results.
    pub async fn search_images(&self, page: Page) -> Result<Vec<Item>, FetchError> {
        let url = self.endpoint.search_url(page)?;
        let body = self.get_bytes(url).await?;
        parse_items(&body)
    }

    /// Downloads the raw bytes of one image.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        self.get_bytes(url).await
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Decodes a search response body (a JSON array of records).
pub fn parse_items(body: &[u8]) -> Result<Vec<Item>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
