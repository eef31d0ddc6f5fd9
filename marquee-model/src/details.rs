use crate::release::ReleaseType;
use crate::status::MediaStatus;

/// One dated release event inside a country group.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseDateEntry {
    pub certification: Option<String>,
    pub release_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub release_type: Option<i32>,
    pub note: Option<String>,
    pub iso_639_1: Option<String>,
}

impl ReleaseDateEntry {
    /// Typed release category, `None` when the code is missing or unknown.
    pub fn kind(&self) -> Option<ReleaseType> {
        self.release_type
            .and_then(|code| ReleaseType::from_code(code).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseDatesByCountry {
    pub iso_3166_1: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_dates: Vec<ReleaseDateEntry>,
}

/// Wrapper matching the `releases` object of a movie payload.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Releases {
    #[cfg_attr(feature = "serde", serde(default))]
    pub results: Vec<ReleaseDatesByCountry>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
    pub tvdb_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MediaInfo {
    pub id: Option<u64>,
    pub status: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub status: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub external_ids: ExternalIds,
    #[cfg_attr(feature = "serde", serde(default))]
    pub releases: Releases,
    pub media_info: Option<MediaInfo>,
}

impl MovieDetails {
    pub fn availability(&self) -> MediaStatus {
        availability(self.media_info.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub status: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub external_ids: ExternalIds,
    pub media_info: Option<MediaInfo>,
}

impl TvDetails {
    pub fn availability(&self) -> MediaStatus {
        availability(self.media_info.as_ref())
    }
}

fn availability(info: Option<&MediaInfo>) -> MediaStatus {
    MediaStatus::from(info.and_then(|info| info.status))
}
