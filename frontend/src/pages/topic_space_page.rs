//! Explorer for the taxonomy of research fields.

use dioxus::prelude::*;

use common::{
    search_filters::SearchFilters,
    search_result::GraphNode,
    topic_tags::TopicTags,
};
use crate::{
    api::search_api::topic_space_graph,
    components::{
        error_boundary::ComponentErrorDisplay,
        result_views::graph_view::GraphView,
        search_components::topic_tags_input::TopicTagsInput,
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};

#[component]
pub fn TopicSpacePage() -> Element {
    // every tag change re-queries the graph
    let mut tags = use_signal(TopicTags::new);
    let selected = use_signal(|| None::<GraphNode>);

    rsx! {
        Title { "Research Atlas - Topic Space" }
        div {
            id: "x-topic-space-root",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            div {
                class: "research-form",
                label {
                    class: "research-field research-field-wide",
                    span { "Topics" }
                    TopicTagsInput {
                        tags: tags(),
                        onchange: move |next| tags.set(next),
                        onsubmit: move |_| {},
                        list_suffix: "-space".to_string(),
                    }
                }
                button {
                    class: "research-button",
                    onclick: move |_| tags.set(TopicTags::new()),
                    "Show everything"
                }
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0;
                ",
                div {
                    style: "flex-grow: 1; overflow: auto;",
                    SuspendWrapper { TopicSpaceGraph { tags: tags(), selected } }
                }
                div {
                    style: "width: 320px; flex-shrink: 0; overflow: auto; border-left: 1px solid rgba(0,0,0,0.1);",
                    TopicDetails { selected }
                }
            }
        }
    }
}

#[component]
fn TopicSpaceGraph(tags: ReadSignal<TopicTags>, mut selected: Signal<Option<GraphNode>>) -> Element {
    let graph = use_resource(move || {
        let tags = tags.read().clone();
        topic_space_graph(tags)
    })
    .suspend()?
    .cloned();
    let graph = match graph {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(g) => g,
    };
    rsx! {
        GraphView {
            graph,
            on_node_click: move |node: GraphNode| selected.set(Some(node)),
        }
    }
}

#[component]
fn TopicDetails(selected: ReadSignal<Option<GraphNode>>) -> Element {
    let Some(node) = selected.read().clone() else {
        return rsx! { p { class: "research-empty", "Click a node to see its details." } };
    };
    let label = node.label.to_string();
    let summary = node.summary.clone().unwrap_or_default();
    let keywords = node.keywords.clone().unwrap_or_default();
    let wikipedia_url = node.wikipedia_url.clone().unwrap_or_default();
    let search_route = Route::search_page_from_filters(SearchFilters { topics: TopicTags::from_joined(&label), ..Default::default() });
    rsx! {
        div {
            class: "research-card",
            h2 { "{label}" }
            p { class: "research-stat", "{node.node_type}" }
            if !summary.is_empty() {
                p { "{summary}" }
            }
            if !keywords.is_empty() {
                p { class: "research-stat", "Keywords: {keywords}" }
            }
            if !wikipedia_url.is_empty() {
                a { target: "_blank", rel: "noreferrer", href: "{wikipedia_url}", "Wikipedia" }
            }
            Link { to: search_route, "Find researchers on this topic" }
        }
    }
}
