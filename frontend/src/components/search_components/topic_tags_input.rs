//! Chip-style input for up to six topic keywords.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::topic_tags::TopicTags;
use crate::components::search_components::autofill_input::{AutofillInput, AutofillKind};

/// Enter or comma turns the typed text into a tag; Backspace on an empty
/// input removes the last tag. A second Enter on an empty input submits.
#[component]
pub fn TopicTagsInput(
    tags: ReadSignal<TopicTags>,
    onchange: Callback<TopicTags>,
    onsubmit: Callback<()>,
    #[props(default)] list_suffix: String,
) -> Element {
    let mut typed = use_signal(String::new);
    let placeholder = use_memo(move || {
        let tags = tags.read();
        if tags.is_full() {
            "Topic limit reached".to_string()
        } else if tags.is_empty() {
            "Add topics (Enter to add)".to_string()
        } else {
            format!("{} more", tags.remaining())
        }
    });

    // true when at least one tag was added
    let mut add_typed = move || {
        let text = typed.peek().clone();
        let mut next = tags.peek().clone();
        let mut added = false;
        for piece in text.split(',') {
            added |= next.push(piece);
        }
        if added {
            onchange(next);
        }
        if added || text.trim().is_empty() {
            typed.set(String::new());
        }
        added
    };

    let on_keydown = move |event: Event<KeyboardData>| match event.key() {
        Key::Enter => {
            event.prevent_default();
            if !add_typed() && typed.peek().trim().is_empty() {
                onsubmit(());
            }
        }
        Key::Backspace if typed.peek().is_empty() => {
            let mut next = tags.peek().clone();
            if next.pop().is_some() {
                onchange(next);
            }
        }
        _ => {}
    };

    let on_input = move |text: String| {
        let ends_with_comma = text.ends_with(',');
        typed.set(text);
        if ends_with_comma {
            add_typed();
        }
    };

    rsx! {
        div {
            class: "research-tags",
            for tag in tags.read().iter().cloned() {
                span {
                    key: "{tag}",
                    class: "research-tag",
                    "{tag}"
                    button {
                        class: "research-tag-remove",
                        title: "Remove {tag}",
                        onclick: {
                            let tag = tag.clone();
                            move |_| {
                                let mut next = tags.peek().clone();
                                if next.remove(&tag) {
                                    onchange(next);
                                }
                            }
                        },
                        Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                    }
                }
            }
            AutofillInput {
                kind: AutofillKind::Topic,
                value: typed(),
                oninput: on_input,
                onkeydown: on_keydown,
                placeholder: placeholder(),
                list_suffix,
                disabled: tags.read().is_full(),
            }
        }
    }
}
