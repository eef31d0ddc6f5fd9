use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use marquee_core::{Commands, ProviderError, TitleLookup};
use marquee_model::{
    ExternalIds, MediaInfo, MovieDetails, RegionCode, ReleaseDateEntry,
    ReleaseDatesByCountry, Releases, SearchMediaType, SearchPage, SearchResult,
    TvDetails,
};
use marquee_server::{AppState, build_router};
use serde_json::Value;

/// Canned Overseerr: one movie, one show, and a title that always fails.
struct StubLookup;

const BROKEN_TITLE: &str = "broken";

fn hit(id: u64, media_type: SearchMediaType, name: &str) -> SearchResult {
    SearchResult {
        id,
        media_type,
        title: Some(name.to_string()),
        name: None,
        release_date: None,
        first_air_date: None,
    }
}

#[async_trait]
impl TitleLookup for StubLookup {
    async fn search(&self, query: &str) -> Result<SearchPage, ProviderError> {
        let results = match query {
            BROKEN_TITLE => {
                return Err(ProviderError::ApiError("upstream down".into()));
            }
            "Heat" => vec![
                hit(7, SearchMediaType::Person, "Heat Miser"),
                hit(949, SearchMediaType::Movie, "Heat"),
            ],
            "Severance" => vec![hit(95396, SearchMediaType::Tv, "Severance")],
            _ => Vec::new(),
        };
        Ok(SearchPage {
            page: 1,
            total_pages: 1,
            total_results: results.len() as u32,
            results,
        })
    }

    async fn movie_details(
        &self,
        movie_id: u64,
    ) -> Result<MovieDetails, ProviderError> {
        Ok(MovieDetails {
            id: movie_id,
            title: "Heat".to_string(),
            overview: Some("A group of high-end professional thieves.".into()),
            poster_path: Some("/heat.jpg".into()),
            status: Some("Released".into()),
            external_ids: ExternalIds {
                imdb_id: Some("tt0113277".into()),
                tvdb_id: None,
            },
            releases: Releases {
                results: vec![ReleaseDatesByCountry {
                    iso_3166_1: "US".into(),
                    release_dates: vec![ReleaseDateEntry {
                        release_date: Some("1995-12-15T00:00:00.000Z".into()),
                        release_type: Some(3),
                        ..ReleaseDateEntry::default()
                    }],
                }],
            },
            media_info: Some(MediaInfo {
                id: Some(1),
                status: Some(5),
            }),
            ..MovieDetails::default()
        })
    }

    async fn tv_details(&self, tv_id: u64) -> Result<TvDetails, ProviderError> {
        Ok(TvDetails {
            id: tv_id,
            name: "Severance".to_string(),
            first_air_date: Some("2022-02-18".into()),
            status: Some("Returning Series".into()),
            ..TvDetails::default()
        })
    }
}

fn server() -> TestServer {
    let commands = Commands::new(Arc::new(StubLookup), RegionCode::default());
    let app = build_router(AppState::new(Arc::new(commands)));
    TestServer::new(app).expect("test server")
}

fn field<'a>(reply: &'a Value, name: &str) -> &'a str {
    reply["fields"]
        .as_array()
        .and_then(|fields| fields.iter().find(|f| f["name"] == name))
        .and_then(|f| f["value"].as_str())
        .unwrap_or_else(|| panic!("missing field {name}"))
}

#[tokio::test]
async fn health_reports_ok() {
    let response = server().get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn movie_route_returns_rendered_reply() {
    let response = server()
        .get("/api/v1/movie")
        .add_query_param("title", "Heat")
        .await;

    response.assert_status_ok();
    let reply: Value = response.json();
    assert_eq!(reply["title"], "Heat");
    assert_eq!(reply["url"], "https://www.imdb.com/title/tt0113277/");
    assert_eq!(
        reply["image"],
        "https://image.tmdb.org/t/p/w600_and_h900_bestv2/heat.jpg"
    );
    assert_eq!(
        field(&reply, "Release Details"),
        "**Released**\n\n\
         * Theatrical (US) : Dec 15, 1995\n\
         * Digital : No Info\n\
         * Physical : No Info"
    );
    assert_eq!(field(&reply, "Is it on Plex Yet?"), "Available");
}

#[tokio::test]
async fn show_route_returns_rendered_reply() {
    let response = server()
        .get("/api/v1/show")
        .add_query_param("title", "Severance")
        .await;

    response.assert_status_ok();
    let reply: Value = response.json();
    assert_eq!(reply["title"], "Severance");
    assert!(reply.get("url").is_none());
    assert_eq!(
        field(&reply, "Release Details"),
        "* **Returning Series**\n* First Air Date: Feb 18, 2022"
    );
    assert_eq!(
        field(&reply, "Is it on Plex Yet?"),
        "Unknown or Not Available"
    );
}

#[tokio::test]
async fn unmatched_title_is_not_found() {
    let response = server()
        .get("/api/v1/movie")
        .add_query_param("title", "Nothing Like This")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Could not find any movies with matched title 'Nothing Like This'"
    );
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn show_route_ignores_movie_hits() {
    let response = server()
        .get("/api/v1/show")
        .add_query_param("title", "Heat")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Could not find any Shows with matched title 'Heat'"
    );
}

#[tokio::test]
async fn blank_title_is_bad_request() {
    let server = server();

    let missing = server.get("/api/v1/movie").await;
    missing.assert_status(StatusCode::BAD_REQUEST);

    let blank = server.get("/api/v1/show").add_query_param("title", "   ").await;
    blank.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let response = server()
        .get("/api/v1/movie")
        .add_query_param("title", BROKEN_TITLE)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Overseer API failed while searching for movies: API error: upstream down"
    );
}
