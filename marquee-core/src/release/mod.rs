//! Release timeline resolution.
//!
//! Collapses the per-country `release_dates` of a title into one entry per
//! [`DisplayCategory`]. The home region is searched first; when it has no
//! matching record the chronologically earliest record from any region is
//! used instead.

pub mod format;


use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use marquee_model::{
    DisplayCategory, RegionCode, ReleaseDateEntry, ReleaseDatesByCountry,
    ReleaseType,
};
use serde::Serialize;
use tracing::trace;

pub use format::{FormatError, display_date, format_release_date, parse_release_date};

/// Placeholder shown when no record exists for a category.
pub const NO_INFO: &str = "No Info";

/// Region tag attached to every home-region match.
///
/// This is a fixed literal, not the configured home region code.
pub const HOME_REGION_LABEL: &str = "US";

struct CategoryRule {
    category: DisplayCategory,
    primary: ReleaseType,
    alias: Option<ReleaseType>,
    /// Codes only considered by the cross-region search.
    fallback_only: &'static [ReleaseType],
}

const RULES: [CategoryRule; 3] = [
    CategoryRule {
        category: DisplayCategory::Theatrical,
        primary: ReleaseType::Theatrical,
        alias: Some(ReleaseType::TheatricalLimited),
        fallback_only: &[ReleaseType::Premiere],
    },
    CategoryRule {
        category: DisplayCategory::Digital,
        primary: ReleaseType::Digital,
        alias: None,
        fallback_only: &[],
    },
    CategoryRule {
        category: DisplayCategory::Physical,
        primary: ReleaseType::Physical,
        alias: None,
        fallback_only: &[],
    },
];

impl CategoryRule {
    fn accepts(&self, kind: ReleaseType) -> bool {
        kind == self.primary
            || self.alias == Some(kind)
            || self.fallback_only.contains(&kind)
    }

    fn resolve(
        &self,
        home: &[DatedRelease<'_>],
        all: &[DatedRelease<'_>],
    ) -> ResolvedEntry {
        let home_hit = first_of_kind(home, self.primary).or_else(|| {
            self.alias.and_then(|alias| first_of_kind(home, alias))
        });

        match home_hit.or_else(|| all.iter().find(|r| self.accepts(r.kind))) {
            Some(release) => ResolvedEntry::found(
                self.category,
                release.region,
                release.at.date(),
            ),
            None => ResolvedEntry::missing(self.category),
        }
    }
}

fn first_of_kind<'r, 'a>(
    releases: &'r [DatedRelease<'a>],
    kind: ReleaseType,
) -> Option<&'r DatedRelease<'a>> {
    releases.iter().find(|release| release.kind == kind)
}

/// A release record whose type and date both parsed.
#[derive(Debug, Clone, Copy)]
struct DatedRelease<'a> {
    region: &'a str,
    kind: ReleaseType,
    at: NaiveDateTime,
}

fn dated_releases<'a>(
    region: &'a str,
    entries: &'a [ReleaseDateEntry],
) -> impl Iterator<Item = DatedRelease<'a>> + 'a {
    entries.iter().filter_map(move |entry| {
        let kind = entry.kind()?;
        let raw = entry.release_date.as_deref()?;
        match parse_release_date(raw) {
            Ok(at) => Some(DatedRelease { region, kind, at }),
            Err(err) => {
                trace!(region, %kind, %err, "skipping release record");
                None
            }
        }
    })
}

/// One line of a release timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub category: DisplayCategory,
    /// Region the date was sourced from; `None` when nothing was found.
    pub region: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ResolvedEntry {
    fn found(category: DisplayCategory, region: &str, date: NaiveDate) -> Self {
        Self {
            category,
            region: Some(region.to_string()),
            date: Some(date),
        }
    }

    fn missing(category: DisplayCategory) -> Self {
        Self {
            category,
            region: None,
            date: None,
        }
    }

    /// `Theatrical (US)`, or just `Theatrical` when unresolved.
    pub fn label(&self) -> String {
        match &self.region {
            Some(region) => format!("{} ({})", self.category, region),
            None => self.category.to_string(),
        }
    }

    /// Formatted date, or [`NO_INFO`].
    pub fn display_date(&self) -> String {
        self.date
            .map(display_date)
            .unwrap_or_else(|| NO_INFO.to_string())
    }
}

impl fmt::Display for ResolvedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {} : {}", self.label(), self.display_date())
    }
}

/// Exactly one entry per display category, in
/// `Theatrical, Digital, Physical` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReleaseTimeline {
    entries: [ResolvedEntry; 3],
}

impl ReleaseTimeline {
    pub fn entries(&self) -> &[ResolvedEntry; 3] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedEntry> {
        self.entries.iter()
    }

    pub fn get(&self, category: DisplayCategory) -> &ResolvedEntry {
        match category {
            DisplayCategory::Theatrical => &self.entries[0],
            DisplayCategory::Digital => &self.entries[1],
            DisplayCategory::Physical => &self.entries[2],
        }
    }

    /// `(label, display date)` pairs.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|entry| (entry.label(), entry.display_date()))
            .collect()
    }

    /// One `* <label> : <date>` line per category.
    pub fn render_lines(&self) -> String {
        self.iter()
            .map(ResolvedEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a ReleaseTimeline {
    type Item = &'a ResolvedEntry;
    type IntoIter = std::slice::Iter<'a, ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves the display timeline for a title's release dates.
///
/// Records with a missing type, an unknown type code or an unparseable date
/// are ignored. Never fails; missing data becomes [`NO_INFO`].
pub fn resolve_release_timeline(
    by_region: &[ReleaseDatesByCountry],
    home_region: &RegionCode,
) -> ReleaseTimeline {
    let home: Vec<DatedRelease<'_>> = by_region
        .iter()
        .find(|country| country.iso_3166_1 == home_region.as_str())
        .map(|country| {
            dated_releases(HOME_REGION_LABEL, &country.release_dates).collect()
        })
        .unwrap_or_default();

    let mut all: Vec<DatedRelease<'_>> = by_region
        .iter()
        .flat_map(|country| {
            dated_releases(&country.iso_3166_1, &country.release_dates)
        })
        .collect();
    // Stable: equal dates keep their input order.
    all.sort_by_key(|release| release.at);

    ReleaseTimeline {
        entries: RULES.map(|rule| rule.resolve(&home, &all)),
    }
}
