//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod details;
pub mod error;
pub mod release;
pub mod search;
pub mod status;

pub use details::{
    ExternalIds, MediaInfo, MovieDetails, ReleaseDateEntry,
    ReleaseDatesByCountry, Releases, TvDetails,
};
pub use error::{ModelError, Result as ModelResult};
pub use release::{DisplayCategory, RegionCode, ReleaseType};
pub use search::{SearchMediaType, SearchPage, SearchResult};
pub use status::MediaStatus;
