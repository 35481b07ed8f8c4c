//! Topic-space explorer: the taxonomy graph, whole or narrowed to some topics.

use common::{search_request::TopicRequest, search_result::Graph, topic_tags::TopicTags};

use crate::{api::search::raw_response::RawGraphResponse, backend_utils::research_backend::ResearchBackend};

pub const TOPIC_SPACE_DEFAULT_PATH: &str = "/get-topic-space-default-graph";
pub const TOPIC_SPACE_SEARCH_PATH: &str = "/search-topic-space";

/// Returns the full topic space when `tags` is empty, otherwise the part of it
/// matching the tags. A response without a graph gives an empty graph.
pub async fn topic_space_graph(backend: &ResearchBackend, tags: &TopicTags) -> anyhow::Result<Graph> {
    let raw: RawGraphResponse = if tags.is_empty() {
        backend.post_empty(TOPIC_SPACE_DEFAULT_PATH).await?
    } else {
        backend.post_json(TOPIC_SPACE_SEARCH_PATH, &TopicRequest::from_tags(tags)).await?
    };
    let graph = raw.graph.unwrap_or_default();
    tracing::info!("topic space: {} nodes, {} edges", graph.nodes.len(), graph.edges.len());
    Ok(graph)
}
