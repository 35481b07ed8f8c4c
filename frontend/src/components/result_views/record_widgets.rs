//! Small building blocks shared by the list views.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};

use common::{
    search_filters::PivotField,
    search_result::{GraphNode, NamedCount, ResearchRecord},
};
use crate::components::result_views::graph_view::GraphView;

#[component]
pub fn StatLine(#[props(into)] label: String, value: String) -> Element {
    if value.trim().is_empty() {
        return rsx! {};
    }
    rsx! {
        p { class: "research-stat", "Total {value} {label}" }
    }
}

/// External link that renders nothing when `href` is empty.
#[component]
pub fn ExternalLink(#[props(into)] label: String, href: String) -> Element {
    if href.trim().is_empty() {
        return rsx! {};
    }
    rsx! {
        a {
            class: "research-external-link",
            target: "_blank",
            rel: "noreferrer",
            href: "{href}",
            "{label}"
            Icon { icon: MdOpenInNew, style: "width: 14px; height: 14px; margin-left: 4px;" }
        }
    }
}

/// Two-column table of `[name, count]` rows. With a `pivot` field set, the
/// names become links that re-run the search on that field.
#[component]
pub fn NamedCountTable(
    #[props(into)] name_header: String,
    #[props(into)] count_header: String,
    rows: Vec<NamedCount>,
    pivot: Option<PivotField>,
    on_pivot: Callback<(PivotField, String)>,
) -> Element {
    if rows.is_empty() {
        return rsx! { p { class: "research-empty", "Nothing to list." } };
    }
    rsx! {
        table {
            class: "research-table",
            thead {
                tr { th { "{name_header}" } th { "{count_header}" } }
            }
            tbody {
                for (i, row) in rows.iter().cloned().enumerate() {
                    tr {
                        key: "{i}",
                        td {
                            if pivot.is_some() {
                                span {
                                    class: "research-pivot",
                                    onclick: {
                                        let name = row.name.clone();
                                        move |_| {
                                            if let Some(field) = pivot {
                                                on_pivot((field, name.clone()));
                                            }
                                        }
                                    },
                                    "{row.name}"
                                }
                            } else {
                                "{row.name}"
                            }
                        }
                        td { "{row.count}" }
                    }
                }
            }
        }
    }
}

/// Star graph of the topic and its clusters. Clicking a cluster searches it
/// as a topic.
#[component]
pub fn TopicClusterPanel(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    if record.read().topic_clusters.is_empty() {
        return rsx! {};
    }
    let graph = record.read().topic_cluster_graph();
    rsx! {
        div {
            class: "research-card",
            h3 { "Topic clusters" }
            GraphView {
                graph,
                height: 360.0,
                on_node_click: move |node: GraphNode| {
                    let label = node.label.to_string();
                    if !label.trim().is_empty() {
                        on_pivot((PivotField::Topic, label));
                    }
                },
            }
        }
    }
}
