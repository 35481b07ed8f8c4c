//! Search variants and the resolver that picks one from the filled-in fields.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The seven result shapes the research backend can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SearchVariant {
    #[serde(rename = "institution")]
    Institution,
    #[serde(rename = "topic")]
    Topic,
    #[serde(rename = "researcher")]
    Researcher,
    #[serde(rename = "topic-researcher")]
    TopicResearcher,
    #[serde(rename = "researcher-institution")]
    ResearcherInstitution,
    #[serde(rename = "topic-institution")]
    TopicInstitution,
    #[serde(rename = "all-three", alias = "all-three-search")]
    AllThree,
}

impl SearchVariant {
    pub const ALL: [SearchVariant; 7] = [
        SearchVariant::Institution,
        SearchVariant::Topic,
        SearchVariant::Researcher,
        SearchVariant::TopicResearcher,
        SearchVariant::ResearcherInstitution,
        SearchVariant::TopicInstitution,
        SearchVariant::AllThree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchVariant::Institution => "institution",
            SearchVariant::Topic => "topic",
            SearchVariant::Researcher => "researcher",
            SearchVariant::TopicResearcher => "topic-researcher",
            SearchVariant::ResearcherInstitution => "researcher-institution",
            SearchVariant::TopicInstitution => "topic-institution",
            SearchVariant::AllThree => "all-three",
        }
    }
}

impl Display for SearchVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a filter state asks for: a combination search of some variant, or the
/// unfiltered default graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchPlan {
    NoFilter,
    Combination(SearchVariant),
}

impl SearchPlan {
    pub fn variant(&self) -> Option<SearchVariant> {
        match self {
            SearchPlan::NoFilter => None,
            SearchPlan::Combination(variant) => Some(*variant),
        }
    }
}

/// Maps the presence of institution, topic and researcher to a search plan.
///
/// Inputs are trimmed before the check. The institution type is not an input:
/// it narrows a search but never selects one.
pub fn resolve_search_plan(institution: &str, topic: &str, researcher: &str) -> SearchPlan {
    let has_institution = !institution.trim().is_empty();
    let has_topic = !topic.trim().is_empty();
    let has_researcher = !researcher.trim().is_empty();

    let variant = match (has_institution, has_topic, has_researcher) {
        (true, true, true) => SearchVariant::AllThree,
        (false, true, true) => SearchVariant::TopicResearcher,
        (true, false, true) => SearchVariant::ResearcherInstitution,
        (true, true, false) => SearchVariant::TopicInstitution,
        (true, false, false) => SearchVariant::Institution,
        (false, true, false) => SearchVariant::Topic,
        (false, false, true) => SearchVariant::Researcher,
        (false, false, false) => return SearchPlan::NoFilter,
    };
    SearchPlan::Combination(variant)
}
