//! Search filters as carried in the `/search` query string.

use std::fmt::Display;

use common::search_filters::SearchFilters;

/// Route query segment for the search page. Parsing is lenient: unknown keys
/// and undecodable pairs are dropped rather than failing the route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchUrlQuery(pub SearchFilters);

impl From<&str> for SearchUrlQuery {
    fn from(query: &str) -> Self {
        SearchUrlQuery(SearchFilters::from_query_string(query))
    }
}

impl From<SearchFilters> for SearchUrlQuery {
    fn from(filters: SearchFilters) -> Self {
        SearchUrlQuery(filters)
    }
}

impl Display for SearchUrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}

impl SearchUrlQuery {
    /// Short page title for the filters that are set.
    pub fn title(&self) -> String {
        let filters = &self.0;
        let topics = filters.topics.joined();
        let parts = [filters.institution.as_str(), topics.as_str(), filters.researcher.as_str()]
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.to_string())
            .collect::<Vec<_>>();
        if parts.is_empty() {
            return "All institutions".to_string();
        }
        let title = parts.join(" / ");
        if title.chars().count() > 40 {
            title.chars().take(38).collect::<String>() + "..."
        } else {
            title
        }
    }
}
