//! One list presentation per search variant.

use dioxus::prelude::*;

use common::{search_filters::PivotField, search_result::ResearchRecord};
use crate::components::result_views::record_widgets::{ExternalLink, NamedCountTable, StatLine, TopicClusterPanel};

fn ror_label(record: &ResearchRecord) -> String {
    format!("RORID - {}", record.ror_id())
}

#[component]
pub fn InstitutionListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 {
                    "{r.institution_name}"
                    if r.is_hbcu { " - HBCU" }
                }
                ExternalLink { label: r.institution_url.clone(), href: r.institution_url.clone() }
                StatLine { label: "authors", value: r.author_count.clone() }
                StatLine { label: "works", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "View on OpenAlex", href: r.open_alex_link.clone() }
                ExternalLink { label: ror_label(&r), href: r.ror_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Topic",
                    count_header: "No. of people",
                    rows: r.topics.clone(),
                    pivot: Some(PivotField::Topic),
                    on_pivot,
                }
            }
        }
    }
}

/// Side-by-side comparison of the searched institution and the extra ones.
#[component]
pub fn MultiInstitutionListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    let mut columns = vec![r.clone()];
    columns.extend(r.all_institution_metadata.values().cloned());
    rsx! {
        div {
            class: "research-list-view",
            for (i, column) in columns.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "research-card research-column",
                    h2 {
                        "{column.institution_name}"
                        if column.is_hbcu { " - HBCU" }
                    }
                    ExternalLink { label: column.institution_url.clone(), href: column.institution_url.clone() }
                    StatLine { label: "authors", value: column.author_count.clone() }
                    StatLine { label: "works", value: column.works_count.clone() }
                    StatLine { label: "citations", value: column.cited_count.clone() }
                    ExternalLink { label: "View on OpenAlex", href: column.open_alex_link.clone() }
                    ExternalLink { label: ror_label(&column), href: column.ror_link.clone() }
                    if !column.topics.is_empty() {
                        NamedCountTable {
                            name_header: "Topic",
                            count_header: "No. of people",
                            rows: column.topics.clone(),
                            pivot: Some(PivotField::Topic),
                            on_pivot,
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TopicListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 { "{r.topic_name}" }
                StatLine { label: "authors", value: r.author_count.clone() }
                StatLine { label: "works", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "View on OpenAlex", href: r.open_alex_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Organization",
                    count_header: "No. of people",
                    rows: r.organizations.clone(),
                    pivot: Some(PivotField::Institution),
                    on_pivot,
                }
            }
        }
        TopicClusterPanel { record, on_pivot }
    }
}

#[component]
pub fn ResearcherListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 { "{r.researcher_name}" }
                if !r.institution_name.is_empty() {
                    p {
                        class: "research-pivot",
                        onclick: {
                            let name = r.institution_name.clone();
                            move |_| on_pivot((PivotField::Institution, name.clone()))
                        },
                        "{r.institution_name}"
                    }
                }
                ExternalLink { label: "Institution", href: r.institution_url.clone() }
                StatLine { label: "works", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "ORCID", href: r.orcid_link.clone() }
                ExternalLink { label: "View on OpenAlex", href: r.open_alex_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Topic",
                    count_header: "No. of works",
                    rows: r.topics.clone(),
                    pivot: Some(PivotField::Topic),
                    on_pivot,
                }
            }
        }
    }
}

#[component]
pub fn ResearcherInstitutionListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 { "{r.researcher_name}" }
                h3 { "{r.institution_name}" }
                ExternalLink { label: r.institution_url.clone(), href: r.institution_url.clone() }
                StatLine { label: "works", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "ORCID", href: r.orcid_link.clone() }
                ExternalLink { label: "Researcher on OpenAlex", href: r.researcher_open_alex_link.clone() }
                ExternalLink { label: "Institution on OpenAlex", href: r.open_alex_link.clone() }
                ExternalLink { label: ror_label(&r), href: r.ror_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Topic",
                    count_header: "No. of works",
                    rows: r.topics.clone(),
                    pivot: Some(PivotField::Topic),
                    on_pivot,
                }
            }
        }
    }
}

#[component]
pub fn TopicResearcherListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 { "{r.researcher_name}" }
                h3 { "{r.topic_name}" }
                if !r.institution_name.is_empty() {
                    p {
                        class: "research-pivot",
                        onclick: {
                            let name = r.institution_name.clone();
                            move |_| on_pivot((PivotField::Institution, name.clone()))
                        },
                        "{r.institution_name}"
                    }
                }
                StatLine { label: "works on this topic", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "ORCID", href: r.orcid_link.clone() }
                ExternalLink { label: "Topic on OpenAlex", href: r.open_alex_link.clone() }
                ExternalLink { label: "Researcher on OpenAlex", href: r.researcher_open_alex_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Work",
                    count_header: "No. of citations",
                    rows: r.works.clone(),
                    pivot: None,
                    on_pivot,
                }
            }
        }
        TopicClusterPanel { record, on_pivot }
    }
}

#[component]
pub fn TopicInstitutionListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 { "{r.institution_name}" }
                h3 { "{r.topic_name}" }
                ExternalLink { label: r.institution_url.clone(), href: r.institution_url.clone() }
                StatLine { label: "people", value: r.author_count.clone() }
                StatLine { label: "works", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "Institution on OpenAlex", href: r.open_alex_link.clone() }
                ExternalLink { label: "Topic on OpenAlex", href: r.topic_open_alex_link.clone() }
                ExternalLink { label: ror_label(&r), href: r.ror_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Person",
                    count_header: "No. of works",
                    rows: r.authors.clone(),
                    pivot: Some(PivotField::Researcher),
                    on_pivot,
                }
            }
        }
        TopicClusterPanel { record, on_pivot }
    }
}

#[component]
pub fn AllThreeListView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let r = record.read().clone();
    rsx! {
        div {
            class: "research-list-view",
            div {
                class: "research-card research-side",
                h2 { "{r.researcher_name}" }
                h3 { "{r.institution_name}" }
                h3 { "{r.topic_name}" }
                ExternalLink { label: r.institution_url.clone(), href: r.institution_url.clone() }
                StatLine { label: "works", value: r.works_count.clone() }
                StatLine { label: "citations", value: r.cited_count.clone() }
                ExternalLink { label: "ORCID", href: r.orcid_link.clone() }
                ExternalLink { label: "Researcher on OpenAlex", href: r.researcher_open_alex_link.clone() }
                ExternalLink { label: "Institution on OpenAlex", href: r.open_alex_link.clone() }
                ExternalLink { label: "Topic on OpenAlex", href: r.topic_open_alex_link.clone() }
                ExternalLink { label: ror_label(&r), href: r.ror_link.clone() }
            }
            div {
                class: "research-card research-main",
                NamedCountTable {
                    name_header: "Work",
                    count_header: "No. of citations",
                    rows: r.works.clone(),
                    pivot: None,
                    on_pivot,
                }
            }
        }
        TopicClusterPanel { record, on_pivot }
    }
}
