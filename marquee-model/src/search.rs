use std::fmt::{self, Display, Formatter};

/// `mediaType` discriminator on search hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchMediaType {
    Movie,
    Tv,
    Person,
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl Display for SearchMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchMediaType::Movie => write!(f, "movie"),
            SearchMediaType::Tv => write!(f, "tv"),
            SearchMediaType::Person => write!(f, "person"),
            SearchMediaType::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchResult {
    pub id: u64,
    pub media_type: SearchMediaType,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

impl SearchResult {
    /// Movies carry `title`, shows and people carry `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub page: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_pages: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_results: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub results: Vec<SearchResult>,
}

impl SearchPage {
    /// Hits of one media type, in upstream ranking order.
    pub fn of_type(
        &self,
        media_type: SearchMediaType,
    ) -> impl Iterator<Item = &SearchResult> {
        self.results
            .iter()
            .filter(move |hit| hit.media_type == media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64, media_type: SearchMediaType) -> SearchResult {
        SearchResult {
            id,
            media_type,
            title: None,
            name: Some(format!("hit {id}")),
            release_date: None,
            first_air_date: None,
        }
    }

    #[test]
    fn of_type_keeps_ranking_order() {
        let page = SearchPage {
            results: vec![
                hit(1, SearchMediaType::Person),
                hit(2, SearchMediaType::Tv),
                hit(3, SearchMediaType::Movie),
                hit(4, SearchMediaType::Tv),
            ],
            ..SearchPage::default()
        };

        let ids: Vec<u64> =
            page.of_type(SearchMediaType::Tv).map(|hit| hit.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_media_types_deserialize_as_other() {
        let page: SearchPage = serde_json::from_str(
            r#"{ "page": 1, "results": [
                { "id": 7, "mediaType": "collection", "name": "Box set" },
                { "id": 8, "mediaType": "movie", "title": "Heat" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(page.results[0].media_type, SearchMediaType::Other);
        assert_eq!(page.results[1].display_name(), Some("Heat"));
    }
}
