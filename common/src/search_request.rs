//! Request bodies sent to the research backend.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    search_const::PAGE_SIZE,
    search_filters::SearchFilters,
    search_variant::{SearchPlan, SearchVariant},
    topic_tags::TopicTags,
};

/// Everything needed to run one search: the filters, the page, and any extra
/// institutions to compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub filters: SearchFilters,
    pub page: u32,
    pub extra_institutions: Vec<String>,
    /// Uploaded organization list, used when no filter is filled in.
    #[serde(default)]
    pub org_list: Option<OrgList>,
}

impl SearchParams {
    pub fn new(filters: SearchFilters, page: u32) -> Self {
        Self { filters, page: page.max(1), extra_institutions: vec![], org_list: None }
    }

    pub fn with_org_list(mut self, org_list: Option<OrgList>) -> Self {
        self.org_list = org_list;
        self
    }

    /// The filter plan, except that an uploaded organization list turns the
    /// unfiltered case into an institution search over the list.
    pub fn plan(&self) -> SearchPlan {
        match (self.filters.search_plan(), &self.org_list) {
            (SearchPlan::NoFilter, Some(_)) => SearchPlan::Combination(SearchVariant::Institution),
            (plan, _) => plan,
        }
    }

    fn uses_org_list(&self) -> bool {
        self.org_list.is_some() && self.filters.search_plan() == SearchPlan::NoFilter
    }

    /// Whether the result will carry metadata for more than one institution.
    pub fn has_extra_institutions(&self) -> bool {
        !self.extra_institutions.is_empty() || self.uses_org_list()
    }

    pub fn with_extra_institution(mut self, institution: &str) -> Self {
        let institution = institution.trim();
        if !institution.is_empty() {
            self.extra_institutions.push(institution.to_string());
        }
        self
    }
}

/// Body of `POST /initial-search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSearchRequest {
    pub organization: String,
    #[serde(rename = "type")]
    pub institution_type: String,
    pub topic: String,
    pub researcher: String,
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub extra_institutions: ExtraInstitutions,
}

/// `extra_institutions` is either a list of names or the raw text of an
/// uploaded CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraInstitutions {
    Names(Vec<String>),
    Csv(String),
}

impl Default for ExtraInstitutions {
    fn default() -> Self {
        ExtraInstitutions::Names(vec![])
    }
}

impl InitialSearchRequest {
    pub fn new(params: &SearchParams) -> Self {
        let filters = &params.filters;
        Self {
            organization: filters.institution.trim().to_string(),
            institution_type: filters.institution_type.trim().to_string(),
            topic: filters.topics.joined(),
            researcher: filters.researcher.trim().to_string(),
            page: params.page.max(1),
            per_page: PAGE_SIZE,
            extra_institutions: match &params.org_list {
                Some(org_list) if params.uses_org_list() => ExtraInstitutions::Csv(org_list.csv.clone()),
                _ => ExtraInstitutions::Names(params.extra_institutions.clone()),
            },
        }
    }
}

/// A `.csv` file of organizations picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgList {
    pub file_name: String,
    pub csv: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgListError {
    NotCsv(String),
    Empty(String),
}

impl Display for OrgListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrgListError::NotCsv(name) => write!(f, "{} is not a CSV file", name),
            OrgListError::Empty(name) => write!(f, "{} has no organizations", name),
        }
    }
}

impl OrgList {
    pub fn from_upload(file_name: &str, contents: &str) -> Result<Self, OrgListError> {
        if !file_name.to_lowercase().ends_with(".csv") {
            return Err(OrgListError::NotCsv(file_name.to_string()));
        }
        if contents.trim().is_empty() {
            return Err(OrgListError::Empty(file_name.to_string()));
        }
        Ok(Self { file_name: file_name.to_string(), csv: contents.to_string() })
    }

    /// Number of non-blank lines in the file.
    pub fn row_count(&self) -> usize {
        self.csv.lines().filter(|line| !line.trim().is_empty()).count()
    }
}

/// Body of `POST /autofill-institutions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutofillInstitutionRequest {
    pub institution: String,
}

/// Body of `POST /autofill-topics` and `POST /search-topic-space`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic: String,
}

impl TopicRequest {
    pub fn from_tags(tags: &TopicTags) -> Self {
        Self { topic: tags.joined() }
    }
}

/// Response of both autofill endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AutofillResponse {
    pub possible_searches: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn initial_search_body_matches_the_backend_contract() {
        let filters = SearchFilters {
            institution: " Georgia Tech ".to_string(),
            institution_type: "Carnegie R1".to_string(),
            topics: TopicTags::from_joined("Machine Learning,Optics"),
            researcher: "".to_string(),
        };
        let params = SearchParams::new(filters, 2).with_extra_institution(" Emory University ").with_extra_institution("  ");
        let body = serde_json::to_value(InitialSearchRequest::new(&params)).unwrap();
        assert_eq!(
            body,
            json!({
                "organization": "Georgia Tech",
                "type": "Carnegie R1",
                "topic": "machine learning,optics",
                "researcher": "",
                "page": 2,
                "per_page": 25,
                "extra_institutions": ["Emory University"],
            })
        );
    }

    #[test]
    fn org_list_replaces_the_default_graph_with_an_institution_search() {
        let org_list = OrgList::from_upload("orgs.csv", "Georgia Tech\nEmory University\n").unwrap();
        let params = SearchParams::new(SearchFilters::default(), 1).with_org_list(Some(org_list));
        assert_eq!(params.plan(), SearchPlan::Combination(SearchVariant::Institution));
        assert!(params.has_extra_institutions());
        let body = serde_json::to_value(InitialSearchRequest::new(&params)).unwrap();
        assert_eq!(body["organization"], "");
        assert_eq!(body["extra_institutions"], json!("Georgia Tech\nEmory University\n"));
    }

    #[test]
    fn org_list_is_ignored_once_a_filter_is_filled() {
        let org_list = OrgList::from_upload("orgs.csv", "Emory University").unwrap();
        let filters = SearchFilters { researcher: "Jane Doe".to_string(), ..Default::default() };
        let params = SearchParams::new(filters, 1).with_org_list(Some(org_list));
        assert_eq!(params.plan(), SearchPlan::Combination(SearchVariant::Researcher));
        assert!(!params.has_extra_institutions());
        let body = serde_json::to_value(InitialSearchRequest::new(&params)).unwrap();
        assert_eq!(body["extra_institutions"], json!([]));
    }

    #[test]
    fn org_list_upload_is_validated() {
        assert_eq!(OrgList::from_upload("orgs.txt", "a"), Err(OrgListError::NotCsv("orgs.txt".to_string())));
        assert_eq!(OrgList::from_upload("orgs.CSV", " \n "), Err(OrgListError::Empty("orgs.CSV".to_string())));
        let list = OrgList::from_upload("orgs.csv", "a\n\nb\n").unwrap();
        assert_eq!(list.row_count(), 2);
    }

    #[test]
    fn page_is_never_zero() {
        let params = SearchParams::new(SearchFilters::default(), 0);
        assert_eq!(params.page, 1);
        assert_eq!(InitialSearchRequest::new(&params).page, 1);
    }

    #[test]
    fn autofill_response_tolerates_missing_list() {
        let response: AutofillResponse = serde_json::from_str("{}").unwrap();
        assert!(response.possible_searches.is_empty());
    }
}
