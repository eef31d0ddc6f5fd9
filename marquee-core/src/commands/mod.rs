//! The `movie` and `show` chat commands.
//!
//! Both run the same flow: search, keep hits of the wanted media type, load
//! the details of the top hit and render a [`Reply`]. Any failure stops the
//! flow with a [`CommandError`].


use std::fmt;
use std::sync::Arc;

use marquee_model::{RegionCode, SearchMediaType};
use tracing::{debug, info, warn};

use crate::error::{CommandError, Result};
use crate::providers::TitleLookup;
use crate::release::resolve_release_timeline;
use crate::reply::{Reply, movie_reply, show_reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Show,
}

impl MediaKind {
    pub fn command_name(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "show",
        }
    }

    pub fn search_type(self) -> SearchMediaType {
        match self {
            MediaKind::Movie => SearchMediaType::Movie,
            MediaKind::Show => SearchMediaType::Tv,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "Show",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            MediaKind::Movie => "movies",
            MediaKind::Show => "Shows",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

/// Command runner bound to a lookup handle and the home release region.
#[derive(Clone)]
pub struct Commands {
    lookup: Arc<dyn TitleLookup>,
    home_region: RegionCode,
}

impl fmt::Debug for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commands")
            .field("home_region", &self.home_region)
            .finish_non_exhaustive()
    }
}

impl Commands {
    pub fn new(lookup: Arc<dyn TitleLookup>, home_region: RegionCode) -> Self {
        Self {
            lookup,
            home_region,
        }
    }

    pub fn home_region(&self) -> &RegionCode {
        &self.home_region
    }

    pub async fn movie(&self, title: &str) -> Result<Reply> {
        self.execute(MediaKind::Movie, title).await
    }

    pub async fn show(&self, title: &str) -> Result<Reply> {
        self.execute(MediaKind::Show, title).await
    }

    /// Runs a command, folding failures into an error reply.
    pub async fn reply(&self, kind: MediaKind, title: &str) -> Reply {
        match self.execute(kind, title).await {
            Ok(reply) => reply,
            Err(err) => Reply::error(err.to_string()),
        }
    }

    pub async fn execute(&self, kind: MediaKind, title: &str) -> Result<Reply> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CommandError::EmptyTitle);
        }
        info!(command = %kind, title, "running title lookup");

        let page = self.lookup.search(title).await.map_err(|source| {
            warn!(command = %kind, %source, "search failed");
            CommandError::Search { kind, source }
        })?;

        let Some(hit) = page.of_type(kind.search_type()).next() else {
            debug!(command = %kind, total = page.results.len(), "no matching hits");
            return Err(CommandError::NoMatch {
                kind,
                title: title.to_string(),
            });
        };
        debug!(command = %kind, id = hit.id, name = ?hit.display_name(), "selected top hit");

        let details_err = |source| {
            warn!(command = %kind, id = hit.id, %source, "details lookup failed");
            CommandError::Details { kind, source }
        };

        match kind {
            MediaKind::Movie => {
                let movie =
                    self.lookup.movie_details(hit.id).await.map_err(details_err)?;
                let timeline = resolve_release_timeline(
                    &movie.releases.results,
                    &self.home_region,
                );
                Ok(movie_reply(&movie, &timeline))
            }
            MediaKind::Show => {
                let show =
                    self.lookup.tv_details(hit.id).await.map_err(details_err)?;
                Ok(show_reply(&show))
            }
        }
    }
}
