pub mod overseerr;

use async_trait::async_trait;
use marquee_model::{MovieDetails, SearchPage, TvDetails};

pub use overseerr::OverseerrProvider;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Source of title search results and title details.
///
/// Commands receive an implementation as an injected handle; nothing in the
/// crate holds a global client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchPage, ProviderError>;

    async fn movie_details(
        &self,
        movie_id: u64,
    ) -> Result<MovieDetails, ProviderError>;

    async fn tv_details(&self, tv_id: u64) -> Result<TvDetails, ProviderError>;
}
