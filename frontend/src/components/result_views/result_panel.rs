//! Picks and renders the presentation of the current search result.

use dioxus::prelude::*;

use common::{
    result_view::{ListView, ResultView, select_result_view},
    search_filters::PivotField,
    search_result::{GraphNode, ResearchRecord},
};
use crate::{
    components::{
        result_views::{
            graph_view::GraphView,
            list_views::{
                AllThreeListView, InstitutionListView, MultiInstitutionListView, ResearcherInstitutionListView, ResearcherListView,
                TopicInstitutionListView, TopicListView, TopicResearcherListView,
            },
            map_view::MapView,
        },
        suspend_boundary::LoadingIndicator,
    },
    pages::search_page::SearchPageState,
};

#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<SearchPageState>();
    let session = state.session;
    let on_pivot = state.pivot;
    let record = use_memo(move || session.read().record.clone());
    let view = use_memo(move || {
        let session = session.read();
        select_result_view(&session.record, session.display_mode)
    });
    let is_loading = use_memo(move || session.read().is_loading);

    rsx! {
        div {
            class: "research-result-panel",
            if is_loading() {
                div {
                    class: "research-loading-overlay",
                    LoadingIndicator { label: "Searching..." }
                }
            }
            ResultViewBody { view: view(), record: record(), on_pivot }
        }
    }
}

#[component]
fn ResultViewBody(view: ResultView, record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let graph = use_memo(move || record.read().graph.clone().unwrap_or_default());
    let on_node_click = move |node: GraphNode| {
        if let Some(pivot) = node.pivot() {
            on_pivot(pivot);
        }
    };
    match view {
        ResultView::NoResult => rsx! { NoticeText { "No result" } },
        ResultView::MapNotAvailable => rsx! { NoticeText { "Map is only available for topic searches." } },
        ResultView::ListNotAvailable => rsx! { NoticeText { "List is not available for this search. Try the graph view." } },
        ResultView::Graph => rsx! { GraphView { graph: graph(), on_node_click } },
        ResultView::Map => rsx! { MapView { record, on_pivot } },
        ResultView::List(list) => match list {
            ListView::Institution => rsx! { InstitutionListView { record, on_pivot } },
            ListView::MultiInstitution => rsx! { MultiInstitutionListView { record, on_pivot } },
            ListView::Topic => rsx! { TopicListView { record, on_pivot } },
            ListView::Researcher => rsx! { ResearcherListView { record, on_pivot } },
            ListView::ResearcherInstitution => rsx! { ResearcherInstitutionListView { record, on_pivot } },
            ListView::TopicResearcher => rsx! { TopicResearcherListView { record, on_pivot } },
            ListView::TopicInstitution => rsx! { TopicInstitutionListView { record, on_pivot } },
            ListView::AllThree => rsx! { AllThreeListView { record, on_pivot } },
        },
    }
}

#[component]
fn NoticeText(children: Element) -> Element {
    rsx! {
        div {
            class: "research-notice",
            {children}
        }
    }
}
