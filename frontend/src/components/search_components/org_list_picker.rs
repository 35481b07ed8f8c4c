//! Upload of a `.csv` organization list, searched when no filter is filled in.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};
use dioxus_primitives::toast::{ToastOptions, consume_toast};

use common::search_request::OrgList;
use crate::pages::search_page::SearchPageState;

#[component]
pub fn OrgListPicker() -> Element {
    let state = use_context::<SearchPageState>();
    let mut org_list = state.org_list;

    let on_file = move |event: Event<FormData>| async move {
        let Some(file) = event.files().into_iter().next() else { return };
        let file_name = file.name();
        let contents = match file.read_string().await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("could not read {}: {}", file_name, e);
                return;
            }
        };
        match OrgList::from_upload(&file_name, &contents) {
            Ok(list) => {
                tracing::info!("organization list {} loaded with {} rows", list.file_name, list.row_count());
                org_list.set(Some(list));
            }
            Err(e) => {
                let toast_api = consume_toast();
                toast_api.error(
                    "Please select a valid CSV file.".to_string(),
                    ToastOptions::new().description(e.to_string()).duration(std::time::Duration::from_secs(10)).permanent(false),
                );
            }
        }
    };

    let has_list = org_list.read().is_some();
    let list_label = org_list.read().as_ref().map(|l| format!("{} ({})", l.file_name, l.row_count())).unwrap_or_default();
    rsx! {
        label {
            class: "research-field",
            title: "Searched when institution, topics and researcher are all empty",
            span { "Organization list" }
            if has_list {
                span {
                    class: "research-tag",
                    "{list_label}"
                    button {
                        class: "research-tag-remove",
                        title: "Remove organization list",
                        onclick: move |_| org_list.set(None),
                        Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                    }
                }
            } else {
                input {
                    class: "research-input",
                    r#type: "file",
                    accept: ".csv",
                    onchange: on_file,
                }
            }
        }
    }
}
