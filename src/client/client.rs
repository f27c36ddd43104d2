use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use reqwest::Client;

use crate::client::error::{YummlyError, YummlyResult};
use crate::client::params::SearchParams;
use crate::client::types::{MetadataEntry, Recipe, SearchResult};

/// Public Yummly API root.
pub const DEFAULT_BASE_URL: &str = "https://api.yummly.com/v1/api";

/// Metadata categories the backend enumerates.
///
/// [`YummlyClient::metadata`] rejects any key outside this set without
/// issuing a request.
pub const METADATA_KEYS: &[&str] = &[
    "allergy",
    "course",
    "cuisine",
    "diet",
    "holiday",
    "ingredient",
    "source",
    "technique",
];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Yummly recipe-search API.
///
/// Credentials ride as `_app_id`/`_app_key` query parameters on every
/// request. The timeout and retry count may be adjusted between calls; a
/// request that exceeds the timeout is retried up to `retries` additional
/// times before failing with [`YummlyError::Timeout`].
pub struct YummlyClient {
    base_url: String,
    api_id: String,
    api_key: String,
    timeout: Duration,
    retries: u32,
    failed_attempts: AtomicU32,
    client: Client,
}

impl YummlyClient {
    /// Client against the public API.
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_id, api_key)
    }

    /// Client against a specific API root (testing, proxies).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_id: api_id.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            retries: 0,
            failed_attempts: AtomicU32::new(0),
            client: Client::new(),
        }
    }

    /// Per-request timeout. Requests exceeding it are retried, then fail
    /// with [`YummlyError::Timeout`].
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of additional attempts after a timed-out request.
    pub fn set_retries(&mut self, retries: u32) {
        self.retries = retries;
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Timed-out attempts that were retried during the most recent call.
    ///
    /// Reset at the start of every operation; after a call fails with
    /// [`YummlyError::Timeout`] this equals the configured retry count.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts.load(Ordering::Relaxed)
    }

    // Recipe operations

    /// Fetch full detail for a recipe by identifier.
    ///
    /// An unknown identifier surfaces as [`YummlyError::Api`] with the
    /// backend's 404 status.
    pub async fn recipe(&self, id: &str) -> YummlyResult<Recipe> {
        let url = format!("{}/recipe/{}", self.base_url, urlencoding::encode(id));
        let response = self.get_with_retry(&url, &[]).await?;
        let recipe = response.json().await?;
        Ok(recipe)
    }

    // Search operations

    /// Keyword search, optionally capped at `max_result` matches.
    pub async fn search(&self, q: &str, max_result: Option<u32>) -> YummlyResult<SearchResult> {
        let mut params = SearchParams::new(q);
        if let Some(max) = max_result {
            params = params.with_max_result(max);
        }
        self.search_with(&params).await
    }

    /// Search with the full parameter set.
    ///
    /// The returned [`SearchResult::criteria`] echoes the structured
    /// parameters the backend applied.
    pub async fn search_with(&self, params: &SearchParams) -> YummlyResult<SearchResult> {
        let url = format!("{}/search", self.base_url);
        let response = self.get_with_retry(&url, &params.query_pairs()).await?;
        let result = response.json().await?;
        Ok(result)
    }

    // Metadata operations

    /// Fetch a metadata list (cuisines, diets, allergies, ...).
    ///
    /// `key` must be a member of [`METADATA_KEYS`]; anything else fails with
    /// [`YummlyError::UnknownMetadata`] before any request is made. The
    /// endpoint answers with a JSONP document, which is unwrapped before
    /// deserialization.
    pub async fn metadata(&self, key: &str) -> YummlyResult<Vec<MetadataEntry>> {
        if !METADATA_KEYS.contains(&key) {
            return Err(YummlyError::UnknownMetadata(key.to_string()));
        }

        let url = format!("{}/metadata/{}", self.base_url, key);
        let response = self.get_with_retry(&url, &[]).await?;
        let body = response.text().await?;
        let payload = strip_jsonp(&body)?;
        let entries = serde_json::from_str(payload)?;
        Ok(entries)
    }

    // Request plumbing

    fn build_url(&self, endpoint: &str, pairs: &[(String, String)]) -> String {
        let mut url = format!(
            "{}?_app_id={}&_app_key={}",
            endpoint,
            urlencoding::encode(&self.api_id),
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in pairs {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Issue a GET, retrying timed-out attempts up to the configured count.
    ///
    /// Only transport timeouts are retried; every other failure, including
    /// non-success statuses, surfaces immediately.
    async fn get_with_retry(
        &self,
        endpoint: &str,
        pairs: &[(String, String)],
    ) -> YummlyResult<reqwest::Response> {
        self.failed_attempts.store(0, Ordering::Relaxed);
        let url = self.build_url(endpoint, pairs);
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(endpoint, attempt, "issuing request");

            let result = self
                .client
                .get(&url)
                .timeout(self.timeout)
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "unable to read error response".to_string());
                    tracing::error!(endpoint, status = status.as_u16(), "request failed");
                    return Err(YummlyError::api(status.as_u16(), message));
                }
                Err(err) if err.is_timeout() => {
                    if attempt == self.retries {
                        tracing::error!(endpoint, attempt, "request timed out, retries exhausted");
                        return Err(YummlyError::Timeout { attempts: attempt });
                    }
                    attempt += 1;
                    self.failed_attempts.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(endpoint, attempt, "request timed out, retrying");
                }
                Err(err) => {
                    tracing::error!(endpoint, error = %err, "transport error");
                    return Err(err.into());
                }
            }
        }
    }
}

/// Unwrap the metadata endpoint's JSONP envelope.
///
/// The endpoint answers `set_metadata('<key>', <payload>);`; the JSON payload
/// is the callback's second argument.
fn strip_jsonp(body: &str) -> YummlyResult<&str> {
    let body = body.trim();
    let open = body
        .find('(')
        .ok_or_else(|| YummlyError::Jsonp("missing callback wrapper".to_string()))?;
    let close = body
        .rfind(')')
        .filter(|close| *close > open)
        .ok_or_else(|| YummlyError::Jsonp("unterminated callback wrapper".to_string()))?;

    let inner = &body[open + 1..close];
    let comma = inner
        .find(',')
        .ok_or_else(|| YummlyError::Jsonp("callback payload missing".to_string()))?;

    Ok(inner[comma + 1..].trim())
}
