use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use marquee_model::{MovieDetails, SearchPage, TvDetails};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::{ProviderError, TitleLookup};

const API_KEY_HEADER: &str = "x-api-key";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    page: u32,
}

/// HTTP client for the Overseerr v1 API.
pub struct OverseerrProvider {
    http: reqwest::Client,
    base_url: Url,
}

impl fmt::Debug for OverseerrProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverseerrProvider")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl OverseerrProvider {
    pub fn new(
        base_url: Url,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| ProviderError::InvalidApiKey)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        self.base_url.join(path).map_err(|err| {
            ProviderError::ApiError(format!("bad endpoint {path}: {err}"))
        })
    }

    async fn get_json<Q, T>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "overseerr request");

        let mut request = self.http.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|err| ProviderError::ParseError(err.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct OverseerrErrorBody {
            #[serde(default)]
            message: Option<String>,
        }

        let message = response
            .json::<OverseerrErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                format!("Overseerr request failed with status {}", status)
            });
        warn!(status = status.as_u16(), %message, "overseerr request failed");

        match status.as_u16() {
            401 | 403 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }
}

#[async_trait]
impl TitleLookup for OverseerrProvider {
    async fn search(&self, query: &str) -> Result<SearchPage, ProviderError> {
        self.get_json("api/v1/search", Some(&SearchQuery { query, page: 1 }))
            .await
    }

    async fn movie_details(
        &self,
        movie_id: u64,
    ) -> Result<MovieDetails, ProviderError> {
        self.get_json::<(), _>(&format!("api/v1/movie/{movie_id}"), None)
            .await
    }

    async fn tv_details(&self, tv_id: u64) -> Result<TvDetails, ProviderError> {
        self.get_json::<(), _>(&format!("api/v1/tv/{tv_id}"), None)
            .await
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
