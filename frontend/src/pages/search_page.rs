use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::{
    search_filters::{PivotField, SearchFilters},
    search_request::{OrgList, SearchParams},
    search_session::SearchSession,
};
use crate::{
    api::search_api::{search_failure, search_research},
    components::{
        result_views::result_panel::ResultPanel,
        search_components::{result_controls::ResultControls, search_form_panel::SearchFormPanel},
    },
    data_definitions::search_url_query::SearchUrlQuery,
    routes::Route,
};

/// Shared by every component under the search page.
#[derive(Clone, Copy)]
pub struct SearchPageState {
    pub session: Signal<SearchSession>,
    /// Form values, not yet committed to the URL.
    pub draft: Signal<SearchFilters>,
    /// Second institution to compare against. Not part of the URL.
    pub extra_institution: Signal<String>,
    /// Uploaded organization list. Not part of the URL.
    pub org_list: Signal<Option<OrgList>>,
    pub committed: ReadSignal<SearchFilters>,
    pub commit: Callback<SearchFilters>,
    pub go_to_page: Callback<u32>,
    pub pivot: Callback<(PivotField, String)>,
}

#[component]
pub fn SearchPage(query: SearchUrlQuery) -> Element {
    rsx! {
        Title { "Research Search: {query.title()}" }
        SearchPageRootComponent { filters: query.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(filters: ReadSignal<SearchFilters>) -> Element {
    let mut session = use_signal(SearchSession::new);
    let mut draft = use_signal(|| filters.peek().clone());
    let extra_institution = use_signal(String::new);
    let org_list = use_signal(|| None::<OrgList>);

    let run_search = use_callback(move |page: u32| {
        let params = SearchParams::new(filters.peek().clone(), page)
            .with_extra_institution(&extra_institution.peek())
            .with_org_list(org_list.peek().clone());
        let ticket = session.write().begin();
        tracing::info!("search #{} plan={:?} page={}", ticket.sequence(), params.plan(), params.page);
        spawn(async move {
            let outcome = search_research(params).await.map_err(search_failure);
            if let Err(failure) = &outcome {
                tracing::warn!("search #{} failed: {}", ticket.sequence(), failure);
            }
            if !session.write().complete(ticket, outcome) {
                tracing::debug!("search #{} superseded, response dropped", ticket.sequence());
            }
        });
    });

    // the route is not remounted on navigation, so follow the URL here
    use_effect(move || {
        let current = filters.read().clone();
        draft.set(current);
        run_search(1);
    });

    let commit = use_callback(move |next: SearchFilters| {
        let next = next.normalized();
        if next == *filters.peek() {
            run_search(1);
        } else {
            navigator().push(Route::search_page_from_filters(next));
        }
    });
    let go_to_page = use_callback(move |page: u32| {
        if session.peek().pagination.can_go_to(page) {
            run_search(page);
        }
    });
    let pivot = use_callback(move |(field, value): (PivotField, String)| {
        let next = filters.peek().pivot(field, &value);
        commit(next);
    });

    use_context_provider(move || SearchPageState {
        session,
        draft,
        extra_institution,
        org_list,
        committed: filters,
        commit,
        go_to_page,
        pivot,
    });

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-form-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    width: 100%;
                ",
                SearchFormPanel {}
            }
            div {
                id: "x-search-result-controls",
                style: "
                    background-color: #ECEEF2;
                    flex-shrink: 0;
                    border-bottom: 1px solid rgba(0,0,0,0.1);
                ",
                ResultControls {}
            }
            div {
                id: "x-search-results-space",
                style: r#"
                    width: 100%;
                    flex-grow: 1;
                    overflow: auto;
                    min-height: 0;
                "#,
                ResultPanel {}
            }
        }
    }
}
