//! Search, autofill and topic-space calls against a fake research backend.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use backend::{
    api::{
        autofill::{autofill_institutions, autofill_topics},
        search::search_research,
        topic_space::topic_space_graph,
    },
    backend_utils::research_backend::{ResearchBackend, is_unreachable},
};
use common::{
    search_filters::SearchFilters,
    search_request::{OrgList, SearchParams},
    search_variant::{SearchPlan, SearchVariant},
    topic_tags::TopicTags,
};
use serde_json::{Value, json};

#[derive(Clone)]
struct FakeBackend {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    status: StatusCode,
    search_body: Value,
}

impl FakeBackend {
    fn new(status: StatusCode, search_body: Value) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), status, search_body }
    }

    fn record(&self, path: &str, body: &str) {
        let body = serde_json::from_str(body).unwrap_or(Value::Null);
        self.calls.lock().unwrap().push((path.to_string(), body));
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

fn small_graph() -> Value {
    json!({
        "nodes": [
            {"id": "I1", "label": "Georgia Institute of Technology", "type": "INSTITUTION"},
            {"id": "T1", "label": "Optics", "type": "TOPIC"}
        ],
        "edges": [{"id": "I1-T1", "start": "I1", "end": "T1", "label": "researches"}]
    })
}

async fn initial_search(State(fake): State<FakeBackend>, body: String) -> (StatusCode, Json<Value>) {
    fake.record("/initial-search", &body);
    (fake.status, Json(fake.search_body.clone()))
}

async fn default_graph(State(fake): State<FakeBackend>, body: String) -> (StatusCode, Json<Value>) {
    fake.record("/get-default-graph", &body);
    (fake.status, Json(json!({"graph": small_graph()})))
}

async fn autofill_institutions_route(State(fake): State<FakeBackend>, body: String) -> (StatusCode, Json<Value>) {
    fake.record("/autofill-institutions", &body);
    (fake.status, Json(json!({"possible_searches": ["Georgia Institute of Technology", "Georgia State University"]})))
}

async fn autofill_topics_route(State(fake): State<FakeBackend>, body: String) -> (StatusCode, Json<Value>) {
    fake.record("/autofill-topics", &body);
    (fake.status, Json(json!({"possible_searches": ["optics", "optical engineering"]})))
}

async fn topic_space_default(State(fake): State<FakeBackend>, body: String) -> (StatusCode, Json<Value>) {
    fake.record("/get-topic-space-default-graph", &body);
    (fake.status, Json(json!({"graph": small_graph()})))
}

async fn topic_space_search(State(fake): State<FakeBackend>, body: String) -> (StatusCode, Json<Value>) {
    fake.record("/search-topic-space", &body);
    (fake.status, Json(json!({"graph": {"nodes": [{"id": "T1", "label": "Optics", "type": "TOPIC"}], "edges": []}})))
}

async fn serve(fake: FakeBackend) -> ResearchBackend {
    let router = Router::new()
        .route("/initial-search", post(initial_search))
        .route("/get-default-graph", post(default_graph))
        .route("/autofill-institutions", post(autofill_institutions_route))
        .route("/autofill-topics", post(autofill_topics_route))
        .route("/get-topic-space-default-graph", post(topic_space_default))
        .route("/search-topic-space", post(topic_space_search))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ResearchBackend::new(format!("http://{}/", addr), Duration::from_secs(5)).unwrap()
}

fn institution_body() -> Value {
    json!({
        "metadata": {
            "name": "Georgia Institute of Technology",
            "hbcu": false,
            "cited_count": 1200000,
            "author_count": 8000,
            "works_count": 95000,
            "homepage": "https://www.gatech.edu",
            "oa_link": "https://openalex.org/I130701444",
            "ror": "https://ror.org/01zkghx44"
        },
        "list": [["Optics", 42]],
        "graph": small_graph(),
        "metadata_pagination": {"current_page": 1, "total_pages": 3}
    })
}

#[tokio::test]
async fn type_only_filters_load_the_default_graph() {
    let fake = FakeBackend::new(StatusCode::OK, json!({}));
    let backend = serve(fake.clone()).await;
    let filters = SearchFilters { institution_type: "HBCU".to_string(), ..Default::default() };

    let response = search_research(&backend, SearchParams::new(filters, 1)).await.unwrap();

    assert_eq!(response.plan, SearchPlan::NoFilter);
    assert_eq!(response.record.search, None);
    assert_eq!(response.record.graph.unwrap().nodes.len(), 2);
    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/get-default-graph");
}

#[tokio::test]
async fn institution_search_sends_the_contract_body() {
    let fake = FakeBackend::new(StatusCode::OK, institution_body());
    let backend = serve(fake.clone()).await;
    let filters = SearchFilters {
        institution: "Georgia Institute of Technology".to_string(),
        institution_type: "Carnegie R1".to_string(),
        ..Default::default()
    };

    let response = search_research(&backend, SearchParams::new(filters, 1)).await.unwrap();

    assert_eq!(response.plan, SearchPlan::Combination(SearchVariant::Institution));
    assert_eq!(response.record.search, Some(SearchVariant::Institution));
    assert_eq!(response.record.institution_name, "Georgia Institute of Technology");
    assert_eq!(response.record.cited_count, "1200000");
    assert_eq!(response.record.topics[0].name, "Optics");
    assert_eq!(response.pagination.total_pages, 3);

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/initial-search");
    assert_eq!(
        calls[0].1,
        json!({
            "organization": "Georgia Institute of Technology",
            "type": "Carnegie R1",
            "topic": "",
            "researcher": "",
            "page": 1,
            "per_page": 25,
            "extra_institutions": []
        })
    );
}

#[tokio::test]
async fn uploaded_org_list_runs_an_institution_search() {
    let fake = FakeBackend::new(StatusCode::OK, institution_body());
    let backend = serve(fake.clone()).await;
    let org_list = OrgList::from_upload("orgs.csv", "Emory University\nSpelman College\n").unwrap();
    let params = SearchParams::new(SearchFilters::default(), 1).with_org_list(Some(org_list));

    let response = search_research(&backend, params).await.unwrap();

    assert_eq!(response.plan, SearchPlan::Combination(SearchVariant::Institution));
    assert!(response.record.has_multiple_institutions);
    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/initial-search");
    assert_eq!(calls[0].1["organization"], "");
    assert_eq!(calls[0].1["extra_institutions"], "Emory University\nSpelman College\n");
}

#[tokio::test]
async fn topic_and_researcher_resolve_to_topic_researcher() {
    let fake = FakeBackend::new(
        StatusCode::OK,
        json!({
            "metadata": {"topic_name": "optics", "researcher_name": "Jane Doe", "current_institution": "Emory University"},
            "list": [["Lens design", 4]],
            "graph": small_graph()
        }),
    );
    let backend = serve(fake.clone()).await;
    let filters = SearchFilters {
        topics: TopicTags::from_joined("Optics"),
        researcher: "Jane Doe".to_string(),
        ..Default::default()
    };

    let response = search_research(&backend, SearchParams::new(filters, 2)).await.unwrap();

    assert_eq!(response.record.search, Some(SearchVariant::TopicResearcher));
    assert_eq!(response.record.institution_name, "Emory University");
    assert_eq!(response.record.works.len(), 1);
    assert_eq!(response.pagination.current_page, 1);
    let calls = fake.calls();
    assert_eq!(calls[0].1["topic"], "optics");
    assert_eq!(calls[0].1["page"], 2);
}

#[tokio::test]
async fn error_status_is_a_failure() {
    let fake = FakeBackend::new(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"}));
    let backend = serve(fake).await;
    let filters = SearchFilters { researcher: "Jane Doe".to_string(), ..Default::default() };

    let err = search_research(&backend, SearchParams::new(filters, 1)).await.unwrap_err();
    assert!(format!("{:#}", err).contains("500"));
    assert!(!is_unreachable(&err));
}

#[tokio::test]
async fn malformed_graph_is_a_failure() {
    let fake = FakeBackend::new(StatusCode::OK, json!({"metadata": {}, "graph": "not a graph"}));
    let backend = serve(fake).await;
    let filters = SearchFilters { institution: "Emory University".to_string(), ..Default::default() };

    assert!(search_research(&backend, SearchParams::new(filters, 1)).await.is_err());
}

#[tokio::test]
async fn unreachable_backend_is_a_failure() {
    let backend = ResearchBackend::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let filters = SearchFilters { institution: "Emory University".to_string(), ..Default::default() };

    let err = search_research(&backend, SearchParams::new(filters, 1)).await.unwrap_err();
    assert!(is_unreachable(&err));
}

#[tokio::test]
async fn autofill_returns_suggestions_or_nothing() {
    let fake = FakeBackend::new(StatusCode::OK, json!({}));
    let backend = serve(fake.clone()).await;

    let institutions = autofill_institutions(&backend, "Georgia").await;
    assert_eq!(institutions, vec!["Georgia Institute of Technology", "Georgia State University"]);
    let topics = autofill_topics(&backend, " OPT ").await;
    assert_eq!(topics, vec!["optics", "optical engineering"]);
    assert!(autofill_institutions(&backend, "   ").await.is_empty());

    let calls = fake.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, json!({"institution": "Georgia"}));
    assert_eq!(calls[1].1, json!({"topic": "opt"}));

    let failing = serve(FakeBackend::new(StatusCode::BAD_GATEWAY, json!({}))).await;
    assert!(autofill_institutions(&failing, "Georgia").await.is_empty());
    assert!(autofill_topics(&failing, "optics").await.is_empty());
}

#[tokio::test]
async fn topic_space_switches_endpoint_on_tags() {
    let fake = FakeBackend::new(StatusCode::OK, json!({}));
    let backend = serve(fake.clone()).await;

    let full = topic_space_graph(&backend, &TopicTags::new()).await.unwrap();
    assert_eq!(full.nodes.len(), 2);
    let narrowed = topic_space_graph(&backend, &TopicTags::from_joined("Optics,Lasers")).await.unwrap();
    assert_eq!(narrowed.nodes.len(), 1);

    let calls = fake.calls();
    assert_eq!(calls[0].0, "/get-topic-space-default-graph");
    assert_eq!(calls[1].0, "/search-topic-space");
    assert_eq!(calls[1].1, json!({"topic": "optics,lasers"}));
}
