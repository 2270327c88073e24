//! NewsAPI client
//!
//! Builds the upstream query URLs and forwards a single GET per inbound
//! request, normalizing every outcome into the shared response envelope.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use newswire_core::Envelope;

use crate::error::UpstreamError;
use crate::filter::filter_articles;

/// Base URL for the NewsAPI v2 REST API
const NEWSAPI_BASE: &str = "https://newsapi.org/v2";

/// NewsAPI client
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI client against the production API
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, NEWSAPI_BASE.to_string())
    }

    /// Create a client against a custom base URL (used by tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the everything feed
    pub async fn everything(&self, q: &str, page: u32, page_size: u32) -> Envelope {
        let url = self.everything_url(q, page, page_size);
        self.forward(&url).await
    }

    /// Fetch top headlines for a category (English only)
    pub async fn top_headlines(&self, category: &str, page: u32, page_size: u32) -> Envelope {
        let url = self.top_headlines_url(category, page, page_size);
        self.forward(&url).await
    }

    /// Fetch top headlines for a country
    ///
    /// The country feed call carries no paging parameters; callers that
    /// accept `page`/`pageSize` drop them before reaching here.
    pub async fn country_headlines(&self, iso: &str) -> Envelope {
        let url = self.country_url(iso);
        self.forward(&url).await
    }

    fn everything_url(&self, q: &str, page: u32, page_size: u32) -> String {
        format!(
            "{}/everything?q={}&page={}&pageSize={}&apiKey={}",
            self.base_url,
            urlencoding::encode(q),
            page,
            page_size,
            self.api_key
        )
    }

    fn top_headlines_url(&self, category: &str, page: u32, page_size: u32) -> String {
        format!(
            "{}/top-headlines?category={}&language=en&page={}&pageSize={}&apiKey={}",
            self.base_url, category, page, page_size, self.api_key
        )
    }

    fn country_url(&self, iso: &str) -> String {
        format!(
            "{}/top-headlines?country={}&apiKey={}",
            self.base_url, iso, self.api_key
        )
    }

    /// Forward one GET to the upstream and normalize the outcome
    ///
    /// Never fails: any transport error, non-2xx status, or malformed body
    /// becomes the 500 error envelope. The upstream's own status code is not
    /// propagated.
    pub async fn forward(&self, url: &str) -> Envelope {
        match self.fetch(url).await {
            Ok(data) => Envelope::ok(data),
            Err(e) => {
                error!("Upstream request failed: {}", e);
                Envelope::failure(e.into_detail())
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Value, UpstreamError> {
        debug!("Forwarding request to upstream: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| UpstreamError::Request(e.to_string()))?;
            // Keep the upstream's error body verbatim when it is JSON,
            // else pass the raw text through as a string
            let body = serde_json::from_str::<Value>(&text)
                .unwrap_or_else(|_| Value::String(text));
            return Err(UpstreamError::ErrorResponse {
                status: status.as_u16(),
                body,
            });
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedBody(e.to_string()))?;

        let articles = body
            .get_mut("articles")
            .and_then(Value::as_array_mut)
            .map(std::mem::take)
            .ok_or_else(|| {
                UpstreamError::MalformedBody("response has no articles array".to_string())
            })?;

        body["articles"] = Value::Array(filter_articles(articles));
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NewsApiClient {
        NewsApiClient::new("test-key".to_string())
    }

    #[test]
    fn everything_url_carries_all_params() {
        let url = client().everything_url("world", 1, 80);
        assert_eq!(
            url,
            "https://newsapi.org/v2/everything?q=world&page=1&pageSize=80&apiKey=test-key"
        );
    }

    #[test]
    fn everything_url_encodes_the_query() {
        let url = client().everything_url("rust language", 2, 10);
        assert!(url.contains("q=rust%20language"));
    }

    #[test]
    fn top_headlines_url_pins_english() {
        let url = client().top_headlines_url("sports", 2, 10);
        assert_eq!(
            url,
            "https://newsapi.org/v2/top-headlines?category=sports&language=en&page=2&pageSize=10&apiKey=test-key"
        );
    }

    #[test]
    fn country_url_omits_paging_params() {
        let url = client().country_url("us");
        assert_eq!(
            url,
            "https://newsapi.org/v2/top-headlines?country=us&apiKey=test-key"
        );
        assert!(!url.contains("page"));
    }
}
