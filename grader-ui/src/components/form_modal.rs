//! Bounded-input form modal view
//!
//! Pure, props-based. The owning page keeps the form state and performs the
//! submit; this view only renders it and reports user intent.

use crate::components::{BoundedTextArea, Button, ButtonVariant, FormErrorNotice, Modal};
use crate::display_types::FieldView;
use dioxus::prelude::*;
use grader_common::CounterStyle;

#[component]
pub fn FormModalView(
    is_open: ReadSignal<bool>,
    title: String,
    submit_label: String,
    fields: Vec<FieldView>,
    counter_style: CounterStyle,
    /// A submit is in flight: inputs and the submit button are disabled
    is_pending: bool,
    error: Option<String>,
    /// Called with (field id, raw text) on every edit
    on_field_change: EventHandler<(String, String)>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { is_open, title, on_close: move |_| on_close.call(()),
            for field in fields {
                BoundedTextArea {
                    key: "{field.id}",
                    id: field.id.clone(),
                    label: field.label,
                    value: field.value,
                    max_chars: field.max_chars,
                    counter_style,
                    placeholder: field.placeholder,
                    multiline: field.multiline,
                    disabled: is_pending,
                    on_input: {
                        let id = field.id.clone();
                        move |text: String| on_field_change.call((id.clone(), text))
                    },
                }
            }

            if let Some(detail) = error {
                FormErrorNotice { heading: "Could not save".to_string(), detail }
            }

            div { class: "flex gap-3 justify-end pt-2",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    pending: is_pending,
                    onclick: move |_| on_submit.call(()),
                    if is_pending { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}
