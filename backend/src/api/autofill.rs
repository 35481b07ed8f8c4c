//! Suggestion lists for the institution and topic inputs.
//!
//! Suggestions are best-effort: any failure is logged and yields an empty list.

use common::{
    search_request::{AutofillInstitutionRequest, AutofillResponse, TopicRequest},
    topic_tags::TopicTags,
};

use crate::backend_utils::research_backend::ResearchBackend;

pub const AUTOFILL_INSTITUTIONS_PATH: &str = "/autofill-institutions";
pub const AUTOFILL_TOPICS_PATH: &str = "/autofill-topics";

pub async fn autofill_institutions(backend: &ResearchBackend, prefix: &str) -> Vec<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return vec![];
    }
    let body = AutofillInstitutionRequest { institution: prefix.to_string() };
    suggestions(backend.post_json(AUTOFILL_INSTITUTIONS_PATH, &body).await, AUTOFILL_INSTITUTIONS_PATH)
}

pub async fn autofill_topics(backend: &ResearchBackend, prefix: &str) -> Vec<String> {
    let mut tags = TopicTags::new();
    if !tags.push(prefix) {
        return vec![];
    }
    let body = TopicRequest::from_tags(&tags);
    suggestions(backend.post_json(AUTOFILL_TOPICS_PATH, &body).await, AUTOFILL_TOPICS_PATH)
}

fn suggestions(result: anyhow::Result<AutofillResponse>, path: &str) -> Vec<String> {
    match result {
        Ok(response) => response.possible_searches,
        Err(e) => {
            tracing::warn!("autofill {} failed: {:#}", path, e);
            vec![]
        }
    }
}
