//! Unified search result record and the graph / map payloads it carries.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{
    search_filters::PivotField,
    search_variant::{SearchPlan, SearchVariant},
};

/// A single record wide enough to hold the result of any search variant.
///
/// Only the fields of the variant in `search` are filled in; the rest keep
/// their empty defaults. Views switch on `search` to decide what to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResearchRecord {
    pub cited_count: String,
    pub works_count: String,
    pub institution_name: String,
    pub ror_link: String,
    pub author_count: String,
    pub institution_url: String,
    pub open_alex_link: String,
    pub graph: Option<Graph>,
    pub is_hbcu: bool,
    pub topics: Vec<NamedCount>,
    pub coordinates: Vec<Coordinate>,
    pub works: Vec<NamedCount>,
    pub organizations: Vec<NamedCount>,
    pub authors: Vec<NamedCount>,
    pub topic_name: String,
    pub topic_clusters: Vec<String>,
    pub researcher_name: String,
    pub orcid_link: String,
    pub researcher_open_alex_link: String,
    pub topic_open_alex_link: String,
    pub search: Option<SearchVariant>,
    pub has_multiple_institutions: bool,
    pub all_institution_metadata: BTreeMap<String, ResearchRecord>,
}

impl ResearchRecord {
    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    /// Last path segment of the ROR link, e.g. `01zkghx44`.
    pub fn ror_id(&self) -> &str {
        self.ror_link.rsplit('/').next().unwrap_or("")
    }

    /// Star graph of the searched topic and its clusters.
    pub fn topic_cluster_graph(&self) -> Graph {
        let topic_id = GraphValue::Text(format!("topic_{}", self.topic_name));
        let mut graph = Graph::default();
        graph.nodes.push(GraphNode {
            id: topic_id.clone(),
            label: GraphValue::Text(self.topic_name.clone()),
            node_type: "TOPIC".to_string(),
            ..Default::default()
        });
        for (index, cluster) in self.topic_clusters.iter().enumerate() {
            let cluster_id = GraphValue::Text(format!("subfield_{}", index));
            graph.nodes.push(GraphNode {
                id: cluster_id.clone(),
                label: GraphValue::Text(cluster.clone()),
                node_type: "SUBFIELD".to_string(),
                ..Default::default()
            });
            graph.edges.push(GraphEdge {
                id: GraphValue::Int(index as i64),
                start: cluster_id,
                end: topic_id.clone(),
                ..Default::default()
            });
        }
        graph
    }
}

/// A `[name, count]` row of a result list: topics, works, organizations or authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NamedCount {
    pub name: String,
    pub count: String,
}

impl NamedCount {
    pub fn new(name: impl Into<String>, count: impl Into<String>) -> Self {
        Self { name: name.into(), count: count.into() }
    }

    pub fn count_as_number(&self) -> Option<u64> {
        self.count.trim().replace(',', "").parse::<u64>().ok()
    }
}

/// A located organization for the map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinate {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Node ids and labels arrive as numbers or strings.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for GraphValue {
    fn default() -> Self {
        GraphValue::Text(String::new())
    }
}

impl Display for GraphValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphValue::Int(i) => write!(f, "{}", i),
            GraphValue::Float(x) => write!(f, "{}", x),
            GraphValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GraphNode {
    pub id: GraphValue,
    #[serde(default)]
    pub label: GraphValue,
    #[serde(rename = "type", default)]
    pub node_type: String,
    // topic-space nodes only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia_url: Option<String>,
}

impl GraphNode {
    /// The filter a click on this node should set, if any.
    pub fn pivot(&self) -> Option<(PivotField, String)> {
        let field = match self.node_type.to_ascii_uppercase().as_str() {
            "INSTITUTION" => PivotField::Institution,
            "TOPIC" => PivotField::Topic,
            "AUTHOR" | "RESEARCHER" => PivotField::Researcher,
            _ => return None,
        };
        let label = self.label.to_string();
        if label.trim().is_empty() {
            return None;
        }
        Some((field, label))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GraphEdge {
    #[serde(default)]
    pub id: GraphValue,
    pub start: GraphValue,
    pub end: GraphValue,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub start_type: String,
    #[serde(default)]
    pub end_type: String,
}

/// Page position of a paginated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1, total_pages: 1 }
    }
}

impl Pagination {
    pub fn can_go_to(&self, page: u32) -> bool {
        page > 0 && page <= self.total_pages
    }

    pub fn previous(&self) -> Option<u32> {
        let page = self.current_page.checked_sub(1)?;
        self.can_go_to(page).then_some(page)
    }

    pub fn next(&self) -> Option<u32> {
        let page = self.current_page.checked_add(1)?;
        self.can_go_to(page).then_some(page)
    }
}

/// A normalized search result as handed from the backend crate to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub plan: SearchPlan,
    pub record: ResearchRecord,
    pub pagination: Pagination,
}

/// Why a search produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFailure {
    /// The research backend could not be reached or the call did not complete.
    Unreachable(String),
    /// The research backend answered with an error status or an unusable body.
    Backend(String),
}

impl Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchFailure::Unreachable(message) => write!(f, "Research backend unreachable: {}", message),
            SearchFailure::Backend(message) => write!(f, "Research backend error: {}", message),
        }
    }
}
