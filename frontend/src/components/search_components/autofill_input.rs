//! Text input with server-side suggestions in a `<datalist>`.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::search_api::{autofill_institutions, autofill_topics};

const AUTOFILL_DEBOUNCE_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutofillKind {
    Institution,
    Topic,
}

impl AutofillKind {
    fn list_id(&self) -> &'static str {
        match self {
            AutofillKind::Institution => "x-autofill-institutions",
            AutofillKind::Topic => "x-autofill-topics",
        }
    }
}

async fn fetch_suggestions(kind: AutofillKind, prefix: String) -> Vec<String> {
    let result = match kind {
        AutofillKind::Institution => autofill_institutions(prefix).await,
        AutofillKind::Topic => autofill_topics(prefix).await,
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("autofill {:?} failed: {}", kind, e);
        vec![]
    })
}

/// Controlled input: `value` comes from the caller and every keystroke goes
/// back through `oninput`. Suggestions are fetched after a short pause in
/// typing, and only the answer to the latest keystroke is kept.
#[component]
pub fn AutofillInput(
    kind: AutofillKind,
    value: ReadSignal<String>,
    oninput: Callback<String>,
    onkeydown: Callback<Event<KeyboardData>>,
    #[props(into)] placeholder: String,
    #[props(default)] list_suffix: String,
    #[props(default)] disabled: bool,
) -> Element {
    let mut suggestions = use_signal(Vec::<String>::new);
    let mut debounce_gen = use_signal(|| 0u64);
    let list_id = format!("{}{}", kind.list_id(), list_suffix);

    let on_input = move |event: Event<FormData>| {
        let text = event.value();
        oninput(text.clone());

        let generation = *debounce_gen.peek() + 1;
        debounce_gen.set(generation);
        if text.trim().is_empty() {
            suggestions.set(vec![]);
            return;
        }
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(AUTOFILL_DEBOUNCE_MS).await;
            if *debounce_gen.peek() != generation {
                return;
            }
            let found = fetch_suggestions(kind, text).await;
            if *debounce_gen.peek() == generation {
                suggestions.set(found);
            }
        });
    };

    rsx! {
        input {
            class: "research-input",
            r#type: "text",
            list: "{list_id}",
            placeholder: "{placeholder}",
            disabled: disabled,
            value: "{value}",
            oninput: on_input,
            onkeydown: move |event: Event<KeyboardData>| onkeydown(event),
        }
        datalist {
            id: "{list_id}",
            for suggestion in suggestions.read().iter() {
                option { key: "{suggestion}", value: "{suggestion}" }
            }
        }
    }
}
