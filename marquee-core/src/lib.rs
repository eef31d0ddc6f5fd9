//! # Marquee Core
//!
//! Core library for Marquee, a chat bot that answers "when does it come out
//! and is it on Plex yet?" from an Overseerr instance.
//!
//! ## Overview
//!
//! - **Release timelines**: [`release::resolve_release_timeline`] collapses
//!   per-country release dates into one Theatrical, Digital and Physical
//!   date, preferring the configured home region
//! - **Title lookup**: [`providers::TitleLookup`] with an Overseerr HTTP
//!   implementation
//! - **Replies**: embed-like [`reply::Reply`] values for movies and shows
//! - **Commands**: the `movie` and `show` flows in [`commands::Commands`]
//!
//! ## Examples
//!
//! ```
//! use marquee_core::release::resolve_release_timeline;
//! use marquee_model::{RegionCode, ReleaseDateEntry, ReleaseDatesByCountry};
//!
//! let dates = vec![ReleaseDatesByCountry {
//!     iso_3166_1: "US".to_string(),
//!     release_dates: vec![ReleaseDateEntry {
//!         release_date: Some("2023-06-01".to_string()),
//!         release_type: Some(3),
//!         ..ReleaseDateEntry::default()
//!     }],
//! }];
//!
//! let timeline = resolve_release_timeline(&dates, &RegionCode::default());
//! assert_eq!(timeline.entries()[0].label(), "Theatrical (US)");
//! assert_eq!(timeline.entries()[0].display_date(), "Jun 1, 2023");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod commands;
pub mod error;
pub mod providers;
pub mod release;
pub mod reply;

pub use commands::{Commands, MediaKind};
pub use error::{CommandError, Result};
pub use providers::{OverseerrProvider, ProviderError, TitleLookup};
pub use release::{
    FormatError, NO_INFO, ReleaseTimeline, ResolvedEntry,
    resolve_release_timeline,
};
pub use reply::{Reply, ReplyField};
