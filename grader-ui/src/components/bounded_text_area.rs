//! Character-capped text input with a live counter

use dioxus::prelude::*;
use grader_common::CounterStyle;

/// Labelled text input capped at `max_chars`.
///
/// The raw input text is handed to `on_input`; the caller truncates it and
/// passes the stored value back through `value`, so the counter always
/// reflects what will be submitted.
#[component]
pub fn BoundedTextArea(
    id: String,
    label: String,
    value: String,
    max_chars: usize,
    counter_style: CounterStyle,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default = true)] multiline: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let used = value.chars().count();
    let counter = counter_style.format(used, max_chars);
    let counter_class = if used >= max_chars {
        "text-xs text-amber-400 mt-1"
    } else {
        "text-xs text-gray-500 mt-1"
    };

    let input_class = "w-full bg-gray-900 text-gray-200 text-sm px-3 py-2 rounded-lg border border-gray-600 focus:outline-none focus:border-blue-500 placeholder-gray-500 disabled:opacity-50";

    rsx! {
        div {
            label {
                class: "block text-sm font-medium text-gray-300 mb-2",
                r#for: "{id}",
                "{label}"
            }
            if multiline {
                textarea {
                    id: "{id}",
                    class: "{input_class} h-24 resize-none",
                    value: "{value}",
                    placeholder: placeholder.as_deref(),
                    disabled,
                    oninput: move |e| on_input.call(e.value()),
                }
            } else {
                input {
                    r#type: "text",
                    id: "{id}",
                    class: "{input_class}",
                    value: "{value}",
                    placeholder: placeholder.as_deref(),
                    disabled,
                    oninput: move |e| on_input.call(e.value()),
                }
            }
            p { class: "{counter_class}", "{counter}" }
        }
    }
}
