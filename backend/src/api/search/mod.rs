//! Multi-entity search against the research backend.

pub mod normalize_response;
pub mod raw_response;

use common::{
    search_request::{InitialSearchRequest, SearchParams},
    search_result::SearchResponse,
    search_variant::SearchPlan,
};

use crate::backend_utils::research_backend::ResearchBackend;
use normalize_response::{normalize_default_graph, normalize_pagination, normalize_search_response};
use raw_response::{RawGraphResponse, RawSearchResponse};

pub const INITIAL_SEARCH_PATH: &str = "/initial-search";
pub const DEFAULT_GRAPH_PATH: &str = "/get-default-graph";

/// Runs one search: picks the endpoint from the filled filters (or the uploaded
/// organization list), sends it and normalizes the answer.
pub async fn search_research(backend: &ResearchBackend, params: SearchParams) -> anyhow::Result<SearchResponse> {
    let plan = params.plan();
    tracing::info!("search_research plan={:?} page={}", plan, params.page);
    match plan {
        SearchPlan::NoFilter => {
            let raw: RawGraphResponse = backend.post_empty(DEFAULT_GRAPH_PATH).await?;
            Ok(SearchResponse { plan, record: normalize_default_graph(raw), pagination: Default::default() })
        }
        SearchPlan::Combination(variant) => {
            let body = InitialSearchRequest::new(&params);
            let raw: RawSearchResponse = backend.post_json(INITIAL_SEARCH_PATH, &body).await?;
            let pagination = normalize_pagination(raw.metadata_pagination.as_ref());
            let record = normalize_search_response(variant, raw, params.has_extra_institutions())?;
            Ok(SearchResponse { plan, record, pagination })
        }
    }
}
