//! Client API calls for the research search endpoints.

use common::{
    search_request::SearchParams,
    search_result::{Graph, SearchFailure, SearchResponse},
    topic_tags::TopicTags,
};
use dioxus::prelude::*;

/// Status used when the research backend could not be reached.
const UNREACHABLE_CODE: u16 = 503;

#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    let code = if backend::backend_utils::research_backend::is_unreachable(&e) { UNREACHABLE_CODE } else { 502 };
    ServerFnError::ServerError { message: format!("{:#}", e), code, details: None }
}

#[cfg(feature = "server")]
fn research_backend() -> Result<&'static backend::backend_utils::research_backend::ResearchBackend, ServerFnError> {
    backend::backend_utils::research_backend::ResearchBackend::shared().map_err(server_error)
}

#[server]
pub async fn search_research(params: SearchParams) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::search::search_research(research_backend()?, params).await;
    x.map_err(server_error)
}

#[server]
pub async fn autofill_institutions(prefix: String) -> Result<Vec<String>, ServerFnError> {
    Ok(backend::api::autofill::autofill_institutions(research_backend()?, &prefix).await)
}

#[server]
pub async fn autofill_topics(prefix: String) -> Result<Vec<String>, ServerFnError> {
    Ok(backend::api::autofill::autofill_topics(research_backend()?, &prefix).await)
}

#[server]
pub async fn topic_space_graph(tags: TopicTags) -> Result<Graph, ServerFnError> {
    let x = backend::api::topic_space::topic_space_graph(research_backend()?, &tags).await;
    x.map_err(server_error)
}

/// Classifies a failed server call for the search session.
pub fn search_failure(e: ServerFnError) -> SearchFailure {
    match e {
        ServerFnError::ServerError { message, code, .. } if code == UNREACHABLE_CODE => SearchFailure::Unreachable(message),
        ServerFnError::ServerError { message, .. } => SearchFailure::Backend(message),
        other => SearchFailure::Unreachable(other.to_string()),
    }
}
