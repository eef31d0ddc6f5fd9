//! Platform-neutral chat replies.
//!
//! A [`Reply`] mirrors the shape of a chat embed: a title with an optional
//! link, a description, an image and named fields. Transports decide how to
//! ship it; [`Reply::to_markdown`] covers plain-text ones.

use marquee_model::{ExternalIds, MovieDetails, TvDetails};
use serde::Serialize;

use crate::release::{ReleaseTimeline, format_release_date};

const IMDB_TITLE_BASE: &str = "https://www.imdb.com/title";
const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w600_and_h900_bestv2";

pub const RELEASE_FIELD: &str = "Release Details";
pub const AVAILABILITY_FIELD: &str = "Is it on Plex Yet?";
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
}

impl ReplyField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub fields: Vec<ReplyField>,
}

impl Reply {
    /// Reply carrying a user-facing error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            url: None,
            description: Some(message.into()),
            image: None,
            fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&ReplyField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn to_markdown(&self) -> String {
        let mut out = match &self.url {
            Some(url) => format!("# [{}]({})\n", self.title, url),
            None => format!("# {}\n", self.title),
        };
        if let Some(description) = &self.description {
            out.push('\n');
            out.push_str(description);
            out.push('\n');
        }
        for field in &self.fields {
            out.push_str(&format!("\n## {}\n{}\n", field.name, field.value));
        }
        if let Some(image) = &self.image {
            out.push_str(&format!("\n![poster]({image})\n"));
        }
        out
    }
}

pub fn imdb_url(ids: &ExternalIds) -> Option<String> {
    ids.imdb_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| format!("{IMDB_TITLE_BASE}/{id}/"))
}

pub fn poster_url(poster_path: Option<&str>) -> Option<String> {
    poster_path
        .map(|path| path.trim().trim_start_matches('/'))
        .filter(|path| !path.is_empty())
        .map(|path| format!("{POSTER_BASE}/{path}"))
}

fn status_or_unknown(status: Option<&str>) -> &str {
    status.filter(|s| !s.trim().is_empty()).unwrap_or(UNKNOWN)
}

pub fn movie_reply(movie: &MovieDetails, timeline: &ReleaseTimeline) -> Reply {
    let release_details = format!(
        "**{}**\n\n{}",
        status_or_unknown(movie.status.as_deref()),
        timeline.render_lines()
    );

    Reply {
        title: movie.title.clone(),
        url: imdb_url(&movie.external_ids),
        description: movie.overview.clone(),
        image: poster_url(movie.poster_path.as_deref()),
        fields: vec![
            ReplyField::new(RELEASE_FIELD, release_details),
            ReplyField::new(AVAILABILITY_FIELD, movie.availability().label()),
        ],
    }
}

pub fn show_reply(show: &TvDetails) -> Reply {
    let first_air_date = show
        .first_air_date
        .as_deref()
        .and_then(|raw| format_release_date(raw).ok())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let release_details = format!(
        "* **{}**\n* First Air Date: {}",
        status_or_unknown(show.status.as_deref()),
        first_air_date
    );

    Reply {
        title: show.name.clone(),
        url: imdb_url(&show.external_ids),
        description: show.overview.clone(),
        image: poster_url(show.poster_path.as_deref()),
        fields: vec![
            ReplyField::new(RELEASE_FIELD, release_details),
            ReplyField::new(AVAILABILITY_FIELD, show.availability().label()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::resolve_release_timeline;
    use marquee_model::{
        MediaInfo, RegionCode, ReleaseDateEntry, ReleaseDatesByCountry,
        Releases,
    };

    fn movie() -> MovieDetails {
        MovieDetails {
            id: 603,
            title: "The Matrix".to_string(),
            overview: Some("A hacker learns the truth.".to_string()),
            poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string()),
            status: Some("Released".to_string()),
            external_ids: ExternalIds {
                imdb_id: Some("tt0133093".to_string()),
                tvdb_id: None,
            },
            releases: Releases {
                results: vec![ReleaseDatesByCountry {
                    iso_3166_1: "US".to_string(),
                    release_dates: vec![ReleaseDateEntry {
                        release_date: Some(
                            "1999-03-31T00:00:00.000Z".to_string(),
                        ),
                        release_type: Some(3),
                        ..ReleaseDateEntry::default()
                    }],
                }],
            },
            media_info: Some(MediaInfo {
                id: Some(1),
                status: Some(4),
            }),
            ..MovieDetails::default()
        }
    }

    #[test]
    fn movie_reply_layout() {
        let movie = movie();
        let timeline = resolve_release_timeline(
            &movie.releases.results,
            &RegionCode::default(),
        );

        let reply = movie_reply(&movie, &timeline);

        assert_eq!(reply.title, "The Matrix");
        assert_eq!(
            reply.url.as_deref(),
            Some("https://www.imdb.com/title/tt0133093/")
        );
        assert_eq!(
            reply.image.as_deref(),
            Some(
                "https://image.tmdb.org/t/p/w600_and_h900_bestv2/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
            )
        );
        assert_eq!(
            reply.field(RELEASE_FIELD).unwrap().value,
            "**Released**\n\n* Theatrical (US) : Mar 31, 1999\n* Digital : No Info\n* Physical : No Info"
        );
        assert_eq!(
            reply.field(AVAILABILITY_FIELD).unwrap().value,
            "Partially Available"
        );
    }

    #[test]
    fn movie_reply_without_links_or_status() {
        let movie = MovieDetails {
            title: "Obscure".to_string(),
            ..MovieDetails::default()
        };
        let timeline =
            resolve_release_timeline(&[], &RegionCode::default());

        let reply = movie_reply(&movie, &timeline);

        assert!(reply.url.is_none());
        assert!(reply.image.is_none());
        assert!(
            reply
                .field(RELEASE_FIELD)
                .unwrap()
                .value
                .starts_with("**Unknown**")
        );
        assert_eq!(
            reply.field(AVAILABILITY_FIELD).unwrap().value,
            "Unknown or Not Available"
        );
    }

    #[test]
    fn show_reply_layout() {
        let show = TvDetails {
            id: 1399,
            name: "Game of Thrones".to_string(),
            status: Some("Ended".to_string()),
            first_air_date: Some("2011-04-17".to_string()),
            media_info: Some(MediaInfo {
                id: None,
                status: Some(5),
            }),
            ..TvDetails::default()
        };

        let reply = show_reply(&show);

        assert_eq!(
            reply.field(RELEASE_FIELD).unwrap().value,
            "* **Ended**\n* First Air Date: Apr 17, 2011"
        );
        assert_eq!(reply.field(AVAILABILITY_FIELD).unwrap().value, "Available");
    }

    #[test]
    fn show_reply_with_unparseable_air_date() {
        let show = TvDetails {
            name: "Pilot".to_string(),
            first_air_date: Some("TBA".to_string()),
            ..TvDetails::default()
        };

        let reply = show_reply(&show);

        assert!(
            reply
                .field(RELEASE_FIELD)
                .unwrap()
                .value
                .ends_with("First Air Date: Unknown")
        );
    }

    #[test]
    fn blank_imdb_ids_produce_no_link() {
        let ids = ExternalIds {
            imdb_id: Some("  ".to_string()),
            tvdb_id: None,
        };
        assert!(imdb_url(&ids).is_none());
    }

    #[test]
    fn markdown_rendering() {
        let reply = Reply {
            title: "Heat".to_string(),
            url: Some("https://www.imdb.com/title/tt0113277/".to_string()),
            description: Some("Cops and robbers.".to_string()),
            image: None,
            fields: vec![ReplyField::new("Is it on Plex Yet?", "Available")],
        };

        assert_eq!(
            reply.to_markdown(),
            "# [Heat](https://www.imdb.com/title/tt0113277/)\n\nCops and robbers.\n\n## Is it on Plex Yet?\nAvailable\n"
        );
        assert_eq!(Reply::error("boom").to_markdown(), "# Error\n\nboom\n");
    }
}
