use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExplore, MdSearch};
use dioxus_free_icons::Icon;

use common::search_filters::SearchFilters;
use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Research Atlas - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                CollaboratorSearchCard {}
                TopicSpaceCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            img {
                src: asset!("/assets/favicon.svg"),
                alt: "Research Atlas Logo",
                style: "width: 46px; height: 46px;",
            },
            span { "Find your next" }
            span { style: "color:#4F46E5;", "collaborator" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 720px;
                font-weight: 500;
            ",
            "Search institutions, research topics and researchers, alone or combined, and follow the connections between them."
        }
    }
}

#[component]
fn CollaboratorSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-collaborator-search",
            class: "research-home-card",
            style: "background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);",

            div { style: "font-size: 30px; font-weight: 500;", "Collaborator Search" }
            div {
                style: "font-size: 18px; line-height: 1.5; color: rgba(255,255,255,0.92);",
                "Type an institution to see its research topics, or combine an institution, topics and a researcher to narrow down."
            }
            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }
            div { style: "font-size: 16px; color: rgba(255,255,255,0.9);", "*Type an institution below and hit Enter to start." }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut institution = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "e.g. Georgia Institute of Technology",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *institution.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let filters = SearchFilters { institution: institution.read().clone(), ..Default::default() }.normalized();
                        n2.push(Route::search_page_from_filters(filters));
                    }
                },
            }
        }
    }
}

#[component]
fn TopicSpaceCard() -> Element {
    rsx! {
        Link {
            to: Route::TopicSpacePage {},
            div {
                id: "x-card-topic-space",
                class: "research-home-card",
                style: "background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);",

                div {
                    style: "display:flex; align-items:center; gap: 10px; font-size: 26px; font-weight: 500;",
                    Icon { icon: MdExplore, style: "width: 28px; height: 28px;" }
                    "Topic Space"
                }
                div {
                    style: "font-size: 18px; line-height: 1.6; color: rgba(255,255,255,0.96);",
                    "Browse the map of research fields and subfields, and jump from a topic straight into a collaborator search."
                }
            }
        }
    }
}
