//! The four filter inputs, the comparison institution, the organization list
//! and the search button.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::search_const::INSTITUTION_TYPES;
use crate::{
    components::search_components::{
        autofill_input::{AutofillInput, AutofillKind},
        org_list_picker::OrgListPicker,
        topic_tags_input::TopicTagsInput,
    },
    pages::search_page::SearchPageState,
};

#[component]
pub fn SearchFormPanel() -> Element {
    let state = use_context::<SearchPageState>();
    let mut draft = state.draft;
    let mut extra_institution = state.extra_institution;
    let committed = state.committed;
    let commit = state.commit;

    let draft_has_changed = use_memo(move || draft.read().clone().normalized() != *committed.read());
    let search_button_color = use_memo(move || if draft_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = use_callback(move |_: ()| {
        commit(draft.peek().clone());
    });
    let on_enter = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };

    rsx! {
        div {
            class: "research-form",
            label {
                class: "research-field",
                span { "Institution" }
                AutofillInput {
                    kind: AutofillKind::Institution,
                    value: draft.read().institution.clone(),
                    oninput: move |text: String| draft.write().institution = text,
                    onkeydown: on_enter,
                    placeholder: "e.g. Georgia Institute of Technology",
                }
            }
            label {
                class: "research-field",
                span { "Institution type" }
                select {
                    class: "research-input",
                    value: "{draft.read().institution_type}",
                    onchange: move |event: Event<FormData>| draft.write().institution_type = event.value(),
                    option { value: "", "Any type" }
                    for institution_type in INSTITUTION_TYPES {
                        option {
                            key: "{institution_type}",
                            value: "{institution_type}",
                            selected: draft.read().institution_type == institution_type,
                            "{institution_type}"
                        }
                    }
                }
            }
            label {
                class: "research-field research-field-wide",
                span { "Topics" }
                TopicTagsInput {
                    tags: draft.read().topics.clone(),
                    onchange: move |tags| draft.write().topics = tags,
                    onsubmit: trigger_search,
                }
            }
            label {
                class: "research-field",
                span { "Researcher" }
                input {
                    class: "research-input",
                    r#type: "text",
                    placeholder: "e.g. Jane Doe",
                    value: "{draft.read().researcher}",
                    oninput: move |event: Event<FormData>| draft.write().researcher = event.value(),
                    onkeydown: on_enter,
                }
            }
            label {
                class: "research-field",
                title: "Only used for institution searches",
                span { "Compare with" }
                AutofillInput {
                    kind: AutofillKind::Institution,
                    value: extra_institution(),
                    oninput: move |text: String| extra_institution.set(text),
                    onkeydown: on_enter,
                    placeholder: "Second institution",
                    list_suffix: "-extra".to_string(),
                }
            }
            OrgListPicker {}
            button {
                class: "research-search-button",
                title: "Search",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 24px; height: 24px; color:{search_button_color()};" }
            }
        }
    }
}
