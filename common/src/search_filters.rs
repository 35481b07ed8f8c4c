//! Search filter state and its URL query representation.

use serde::{Deserialize, Serialize};

use crate::{
    search_const::{QUERY_KEY_INSTITUTION, QUERY_KEY_INSTITUTION_TYPE, QUERY_KEY_RESEARCHER, QUERY_KEY_TOPIC},
    search_variant::{SearchPlan, resolve_search_plan},
    topic_tags::TopicTags,
};

/// The four user-facing filter fields. The URL query string is their source
/// of truth; see [`SearchFilters::from_query_string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchFilters {
    pub institution: String,
    pub institution_type: String,
    pub topics: TopicTags,
    pub researcher: String,
}

/// One of the fields a result can pivot the search on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PivotField {
    Institution,
    Topic,
    Researcher,
}

impl SearchFilters {
    pub fn search_plan(&self) -> SearchPlan {
        resolve_search_plan(&self.institution, &self.topics.joined(), &self.researcher)
    }

    pub fn is_empty(&self) -> bool {
        self.search_plan() == SearchPlan::NoFilter && self.institution_type.trim().is_empty()
    }

    /// Trims the free-text fields. Topics are already normalized on insert.
    pub fn normalized(mut self) -> Self {
        self.institution = self.institution.trim().to_string();
        self.institution_type = self.institution_type.trim().to_string();
        self.researcher = self.researcher.trim().to_string();
        self
    }

    /// Returns a copy with one field replaced, as when a result entity is clicked.
    ///
    /// Topics travel comma-joined both in the URL and to the backend, so a
    /// topic name containing commas becomes several tags. The result is the
    /// same state the URL decodes back to.
    pub fn pivot(&self, field: PivotField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            PivotField::Institution => next.institution = value.trim().to_string(),
            PivotField::Researcher => next.researcher = value.trim().to_string(),
            PivotField::Topic => next.topics = TopicTags::from_joined(value),
        }
        next
    }

    /// Encodes the non-empty fields as `institution=..&type=..&topic=..&researcher=..`.
    /// Empty fields are left out entirely. There is no leading `?`.
    pub fn to_query_string(&self) -> String {
        let topic = self.topics.joined();
        let pairs = [
            (QUERY_KEY_INSTITUTION, self.institution.trim()),
            (QUERY_KEY_INSTITUTION_TYPE, self.institution_type.trim()),
            (QUERY_KEY_TOPIC, topic.as_str()),
            (QUERY_KEY_RESEARCHER, self.researcher.trim()),
        ];
        pairs
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decodes a query string. Unknown keys and undecodable pairs are skipped,
    /// and a later duplicate key overrides an earlier one.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut filters = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let plus_decoded = value.replace('+', " ");
            let Ok(value) = urlencoding::decode(&plus_decoded) else {
                continue;
            };
            let value = value.trim();
            match key {
                QUERY_KEY_INSTITUTION => filters.institution = value.to_string(),
                QUERY_KEY_INSTITUTION_TYPE => filters.institution_type = value.to_string(),
                QUERY_KEY_TOPIC => filters.topics = TopicTags::from_joined(value),
                QUERY_KEY_RESEARCHER => filters.researcher = value.to_string(),
                _ => {}
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_variant::SearchVariant;

    fn filters(institution: &str, institution_type: &str, topics: &str, researcher: &str) -> SearchFilters {
        SearchFilters {
            institution: institution.to_string(),
            institution_type: institution_type.to_string(),
            topics: TopicTags::from_joined(topics),
            researcher: researcher.to_string(),
        }
    }

    #[test]
    fn query_string_round_trips() {
        let cases = [
            filters("", "", "", ""),
            filters("Georgia Tech", "", "", ""),
            filters("Texas A&M University", "Carnegie R1", "machine learning,optics", "Jane Doe"),
            filters("", "HBCU", "", "José Núñez"),
            filters("a=b?c", "", "c++,100%", ""),
        ];
        for original in cases {
            let query = original.to_query_string();
            assert_eq!(SearchFilters::from_query_string(&query), original, "query: {query}");
        }
    }

    #[test]
    fn cleared_fields_are_left_out_of_the_query() {
        let f = filters("Georgia Tech", "", "", "  ");
        assert_eq!(f.to_query_string(), "institution=Georgia%20Tech");
        assert_eq!(SearchFilters::default().to_query_string(), "");
    }

    #[test]
    fn parsing_is_lenient() {
        let f = SearchFilters::from_query_string("?institution=Georgia+Tech&page=3&bogus&topic=Machine%20Learning,%20Optics&researcher=%FF");
        assert_eq!(f.institution, "Georgia Tech");
        assert_eq!(f.topics.joined(), "machine learning,optics");
        assert_eq!(f.researcher, "");
        assert_eq!(f.institution_type, "");
    }

    #[test]
    fn search_plan_ignores_institution_type() {
        assert_eq!(filters("", "HBCU", "", "").search_plan(), SearchPlan::NoFilter);
        assert_eq!(
            filters("Georgia Tech", "", "machine learning", "").search_plan(),
            SearchPlan::Combination(SearchVariant::TopicInstitution)
        );
    }

    #[test]
    fn topic_pivot_with_commas_matches_the_url_state() {
        let base = filters("Emory University", "", "", "");
        let next = base.pivot(PivotField::Topic, "Health, Toxicology and Mutagenesis");
        assert_eq!(next.topics.joined(), "health,toxicology and mutagenesis");
        assert_eq!(SearchFilters::from_query_string(&next.to_query_string()), next);
    }

    #[test]
    fn pivot_replaces_a_single_field() {
        let base = filters("Georgia Tech", "HBCU", "", "");
        let next = base.pivot(PivotField::Topic, "Artificial Intelligence");
        assert_eq!(next.institution, "Georgia Tech");
        assert_eq!(next.institution_type, "HBCU");
        assert_eq!(next.topics.joined(), "artificial intelligence");
        assert_eq!(next.search_plan(), SearchPlan::Combination(SearchVariant::TopicInstitution));
    }
}
