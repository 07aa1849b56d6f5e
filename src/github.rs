use crate::error::{FetchError, Result};
use crate::types::{ApiRepo, RepoSummary};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 30;
const MAX_RETRIES: u32 = 3;

/// Status codes that are worth retrying with backoff.
const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Explicit session configuration passed to the fetcher; nothing here is
/// ambient or global.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub per_page: u32,
    pub user_agent: String,
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            per_page: PER_PAGE,
            user_agent: format!("github-repo-summary/{}", env!("CARGO_PKG_VERSION")),
            max_retries: MAX_RETRIES,
            backoff_base: Duration::from_millis(500),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the public repository-listing endpoint. One fetcher (and its
/// connection pool) is created per fetch and dropped when the fetch returns.
pub struct RepoFetcher {
    client: Client,
    config: FetchConfig,
}

impl RepoFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(RepoFetcher { client, config })
    }

    /// Fetch every page of repositories owned by `username`, newest update
    /// first. An empty result means either no repositories or an unknown
    /// account; the listing endpoint does not distinguish the two.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let url = format!("{}/users/{}/repos", self.config.base_url, username);
        let mut all_repos = Vec::new();
        let mut page = 1;

        loop {
            let repos = self.fetch_page(&url, page).await?;
            let count = repos.len();
            debug!("page {} returned {} repositories", page, count);

            all_repos.extend(repos.into_iter().map(RepoSummary::from));

            // Terminal condition: a short or empty page means no more pages.
            if count < self.config.per_page as usize {
                break;
            }
            page += 1;
        }

        Ok(all_repos)
    }

    async fn fetch_page(&self, url: &str, page: u32) -> Result<Vec<ApiRepo>> {
        let response = self.make_request(url, page).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.to_lowercase().contains("application/json") {
            return Err(FetchError::InvalidContentType(content_type));
        }

        let body = response.text().await?;
        let repos: Vec<ApiRepo> = serde_json::from_str(&body)?;
        Ok(repos)
    }

    async fn make_request(&self, url: &str, page: u32) -> Result<Response> {
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(url)
                .header("Accept", "application/vnd.github.v3+json")
                .query(&[("type", "owner"), ("sort", "updated"), ("direction", "desc")])
                .query(&[("per_page", self.config.per_page), ("page", page)])
                .send()
                .await?;

            let status = response.status();

            match status {
                StatusCode::FORBIDDEN => {
                    let message = match rate_limit_reset(&response) {
                        Some(reset_ts) => {
                            format!("It will reset at: {}", convert_reset_to_ist(reset_ts))
                        }
                        None => "No reset time provided.".to_string(),
                    };
                    return Err(FetchError::RateLimited(message));
                }
                status if RETRY_STATUSES.contains(&status.as_u16())
                    && retries < self.config.max_retries =>
                {
                    // Retry-After takes precedence over the computed backoff.
                    let delay = retry_after(&response)
                        .unwrap_or_else(|| self.config.backoff_base * 2u32.pow(retries));
                    warn!("transient status {} on page {}, retrying in {:?}", status, page, delay);
                    sleep(delay).await;
                    retries += 1;
                    continue;
                }
                status if !status.is_success() => {
                    return Err(FetchError::Http(status));
                }
                _ => return Ok(response),
            }
        }
    }
}

fn rate_limit_reset(response: &Response) -> Option<i64> {
    response
        .headers()
        .get("X-RateLimit-Reset")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Render a rate-limit reset timestamp at the fixed UTC+5:30 offset, e.g.
/// `15-Nov-2023 03:43:20 AM IST`.
pub fn convert_reset_to_ist(reset_timestamp: i64) -> String {
    let utc_time = DateTime::from_timestamp(reset_timestamp, 0).unwrap_or_else(Utc::now);
    let ist_time = utc_time + chrono::Duration::hours(5) + chrono::Duration::minutes(30);
    ist_time.format("%d-%b-%Y %I:%M:%S %p IST").to_string()
}
