//! Side navigation bar wrapping every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExplore, MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::search_filters::SearchFilters;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    box-sizing: border-box;
                ",

                NavbarTopLogo {},
                NavbarIconLinks {},
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            img { src: asset!("/assets/favicon.svg"), style: "width: 38px; height: 38px;" }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::search_page_from_filters(SearchFilters::default()), icon: MdSearch, label: "Search" }
            IconLink { to: Route::TopicSpacePage {}, icon: MdExplore, label: "Topic Space" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                class: "research-nav-icon",
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
