//! Asynchronous client for the Brawlhalla API.

pub mod options;

use std::sync::Arc;

use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    api::{
        BrawlhallaId, Bracket, Clan, ClanId, LegendId, LegendInfo, PlayerRanked, PlayerSearch,
        PlayerStats, RankingEntry, Region, Response, SteamId,
    },
    error::{BrawlhallaError, Result, NO_FURTHER_DETAILS},
    ratelimit::RateBucket,
};

pub use options::ClientOptions;


/// Base URL of the Brawlhalla API.
pub const BRAWLHALLA_BASE_URL: &str = "https://api.brawlhalla.com";

const USER_AGENT: &str = concat!("brawlhalla-rs/", env!("CARGO_PKG_VERSION"));

/// Query parameters; `None` values are left out of the URL.
pub type Query<'a> = &'a [(&'a str, Option<String>)];

/// Client for the Brawlhalla API.
///
/// Cloning is cheap; clones share the connection pool and the rate limiter.
///
/// ```rust,no_run
/// use brawlhalla::{BrawlhallaClient, BrawlhallaId};
///
/// # async fn example() -> brawlhalla::Result<()> {
/// let client = BrawlhallaClient::new("my-api-key")?;
/// if let Some(ranked) = client.get_player_ranked_stats(BrawlhallaId::new(2)).await? {
///     println!("{}", ranked.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BrawlhallaClient {
    http: Client,
    api_key: String,
    base_url: String,
    options: ClientOptions,
    bucket: Arc<RateBucket>,
}

impl BrawlhallaClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, ClientOptions::default())
    }

    pub fn with_options(api_key: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let bucket = Arc::new(RateBucket::new(
            options.requests_per_15_minutes,
            options.requests_per_second,
        ));

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: BRAWLHALLA_BASE_URL.to_string(),
            options,
            bucket,
        })
    }

    /// Point the client at another server (a proxy or a mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn rate_bucket(&self) -> &RateBucket {
        &self.bucket
    }

    /// Build the GET request for `path`; the API key always goes last.
    pub fn build_request(&self, path: &str, query: Query<'_>) -> Result<Request> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut params: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect();
        params.push(("api_key", self.api_key.as_str()));

        Ok(self
            .http
            .get(url)
            .query(&params)
            .timeout(self.options.max_timeout)
            .build()?)
    }

    fn map_send_error(&self, err: reqwest::Error) -> BrawlhallaError {
        if err.is_timeout() {
            BrawlhallaError::Timeout {
                timeout: self.options.max_timeout,
            }
        } else {
            BrawlhallaError::Http(err)
        }
    }

    /// Send one request through the rate limiter and 429 handling.
    ///
    /// `Ok(None)` means a rate-limited response was swallowed.
    async fn fetch(&self, path: &str, query: Query<'_>) -> Result<Option<Response>> {
        let mut retries = 0;

        loop {
            if self.options.use_internal_ratelimiter {
                self.bucket.acquire().await;
            }

            let request = self.build_request(path, query)?;
            tracing::debug!(path, ?query, "GET");

            let response = self
                .http
                .execute(request)
                .await
                .map_err(|e| self.map_send_error(e))?;
            let status = response.status();
            let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;

            if status == StatusCode::OK {
                return Response::from_slice(&body).map(Some);
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                if self.options.retry_on_429 && retries < self.options.max_retries_on_429 {
                    retries += 1;
                    tracing::warn!(
                        path,
                        retries,
                        delay = ?self.options.retry_delay,
                        "rate limited, retrying"
                    );
                    sleep(self.options.retry_delay).await;
                    continue;
                }
                if self.options.swallow_429 {
                    tracing::warn!(path, "rate limited, dropping request");
                    return Ok(None);
                }
                return Err(BrawlhallaError::RateLimited { retries });
            }

            return Err(api_error(status, &body));
        }
    }

    /// Apply `propagate_exceptions` to a finished call.
    fn settle<T>(&self, path: &str, result: Result<Option<T>>) -> Result<Option<T>> {
        match result {
            Err(err) if !self.options.propagate_exceptions => {
                tracing::warn!(path, error = %err, "request failed");
                Ok(None)
            }
            other => other,
        }
    }

    async fn get_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<Option<T>> {
        let result = match self.fetch(path, query).await {
            Ok(Some(response)) => response.deserialize().map(Some),
            Ok(None) => Ok(None),
            Err(err) => Err(err),
        };
        self.settle(path, result)
    }

    /// Like `get_typed` for endpoints returning one object. The API answers
    /// `[]` when there is nothing to return (an unlinked Steam ID, a player
    /// with no ranked season), which becomes `Ok(None)`.
    async fn get_record<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<Option<T>> {
        let result = match self.fetch(path, query).await {
            Ok(Some(response)) if response.is_empty_list() => {
                tracing::debug!(path, "no record returned");
                Ok(None)
            }
            Ok(Some(response)) => response.deserialize().map(Some),
            Ok(None) => Ok(None),
            Err(err) => Err(err),
        };
        self.settle(path, result)
    }

    /// GET any endpoint and return the body as a generic [`Response`].
    pub async fn get_raw(&self, path: &str, query: Query<'_>) -> Result<Option<Response>> {
        let result = self.fetch(path, query).await;
        self.settle(path, result)
    }

    /// Look up the Brawlhalla account linked to a Steam account.
    pub async fn get_player_from_steam_id(&self, steam_id: SteamId) -> Result<Option<PlayerSearch>> {
        self.get_record("search", &[("steamid", Some(steam_id.to_string()))])
            .await
    }

    /// One page of a ranked ladder, optionally filtered by player name prefix.
    pub async fn get_ranked_page(
        &self,
        bracket: Bracket,
        region: Region,
        page: u32,
        name: Option<&str>,
    ) -> Result<Option<Vec<RankingEntry>>> {
        let path = format!("rankings/{}/{}/{}", bracket, region, page);
        self.get_typed(&path, &[("name", name.map(str::to_string))])
            .await
    }

    pub async fn get_player_stats(&self, brawlhalla_id: BrawlhallaId) -> Result<Option<PlayerStats>> {
        let path = format!("player/{}/stats", brawlhalla_id);
        self.get_record(&path, &[]).await
    }

    pub async fn get_player_ranked_stats(
        &self,
        brawlhalla_id: BrawlhallaId,
    ) -> Result<Option<PlayerRanked>> {
        let path = format!("player/{}/ranked", brawlhalla_id);
        self.get_record(&path, &[]).await
    }

    pub async fn get_clan(&self, clan_id: ClanId) -> Result<Option<Clan>> {
        let path = format!("clan/{}", clan_id);
        self.get_record(&path, &[]).await
    }

    /// Accepts a [`crate::Legend`] or a raw [`LegendId`].
    pub async fn get_legend_info(&self, legend: impl Into<LegendId>) -> Result<Option<LegendInfo>> {
        let path = format!("legend/{}", legend.into());
        self.get_record(&path, &[]).await
    }

    pub async fn get_all_legends(&self) -> Result<Option<Vec<LegendInfo>>> {
        self.get_typed("legend/all", &[]).await
    }
}

/// Turn a non-200 response into an error, pulling `error.message` from the
/// body when there is one.
fn api_error(status: StatusCode, body: &[u8]) -> BrawlhallaError {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| NO_FURTHER_DETAILS.to_string());

    BrawlhallaError::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("").to_string(),
        detail,
    }
}
