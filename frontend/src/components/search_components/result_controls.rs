//! Display mode toggle, pagination and link sharing for the current result.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::MdList,
        md_communication_icons::MdLocationOn,
        md_editor_icons::{MdBubbleChart, MdInsertLink},
        md_navigation_icons::{MdArrowBack, MdArrowForward},
    },
};

use common::search_session::DisplayMode;
use crate::pages::search_page::SearchPageState;

#[component]
pub fn ResultControls() -> Element {
    rsx! {
        div {
            id: "x-result-controls-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 8px 16px;
                height: 56px;
                box-sizing: border-box;
            ",
            DisplayModeToggle {}
            SearchStatusText {}
            // empty space
            div { style: "flex-grow: 1;" }
            PaginationControls {}
            CopySearchLinkButton {}
        }
    }
}

#[component]
fn DisplayModeToggle() -> Element {
    let state = use_context::<SearchPageState>();
    let mut session = state.session;
    let current = use_memo(move || session.read().display_mode);

    rsx! {
        div {
            class: "research-toggle",
            for mode in DisplayMode::ALL {
                button {
                    key: "{mode.label()}",
                    class: if current() == mode { "research-toggle-button active" } else { "research-toggle-button" },
                    title: "{mode.label()}",
                    onclick: move |_| session.write().set_display_mode(mode),
                    {display_mode_icon(mode)}
                    span { "{mode.label()}" }
                }
            }
        }
    }
}

fn display_mode_icon(mode: DisplayMode) -> Element {
    match mode {
        DisplayMode::List => rsx! { Icon { icon: MdList, style: "width: 20px; height: 20px;" } },
        DisplayMode::Graph => rsx! { Icon { icon: MdBubbleChart, style: "width: 20px; height: 20px;" } },
        DisplayMode::Map => rsx! { Icon { icon: MdLocationOn, style: "width: 20px; height: 20px;" } },
    }
}

#[component]
fn SearchStatusText() -> Element {
    let state = use_context::<SearchPageState>();
    let session = state.session;
    let session = session.read();
    if session.is_loading {
        return rsx! { span { class: "research-status", "Searching..." } };
    }
    match &session.last_failure {
        Some(failure) => rsx! { span { class: "research-status research-status-error", title: "{failure}", "Search failed" } },
        None => rsx! {},
    }
}

#[component]
fn PaginationControls() -> Element {
    let state = use_context::<SearchPageState>();
    let session = state.session;
    let go_to_page = state.go_to_page;
    let pagination = use_memo(move || session.read().pagination);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: pagination().previous().is_none(),
                onclick: move |_| {
                    if let Some(page) = pagination().previous() {
                        go_to_page(page);
                    }
                }
            }
            div {
                class: "research-page-counter",
                "{pagination().current_page}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{pagination().total_pages}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: pagination().next().is_none(),
                onclick: move |_| {
                    if let Some(page) = pagination().next() {
                        go_to_page(page);
                    }
                }
            }
        }
    }
}

#[component]
fn CopySearchLinkButton() -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        let Ok(url) = window.location().href() else { return };
        let _r = window.navigator().clipboard().write_text(&url);
        tracing::info!("Search link copied to clipboard: {}", url);

        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            "Link copied to clipboard.".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .description("Anyone with the link sees the same search.")
                .duration(std::time::Duration::from_secs(10))
                .permanent(false),
        );
    });
    rsx! {
        NavigationButton {
            icon: MdInsertLink,
            label: "Copy search link",
            disabled: false,
            onclick: move |_| do_copy_link(()),
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 3px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}
