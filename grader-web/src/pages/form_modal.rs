use dioxus::prelude::*;
use grader_common::{ModalConfig, ModalFormState, SubmitContext, CREATE_TAG_MODAL_ID};
use grader_core::FormClient;
use grader_ui::{
    field_views, Button, ButtonVariant, FormModalView, PencilIcon, ReadyGate, SuccessToast, TagIcon,
};
use tracing::warn;

/// Stateful bounded-input modal: trigger button, overlay form, success toast.
///
/// Owns the [`ModalFormState`]; everything rendered is derived from it. The
/// submit request runs as a task on this component's scope, so if the
/// component unmounts mid-request the task is dropped and the response never
/// reaches the discarded state.
#[component]
pub fn BoundedFormModal(
    config: ModalConfig,
    /// Host identifiers for the endpoint and payload extras
    context: SubmitContext,
    /// Nothing is rendered or accepted until this is true
    is_ready: ReadSignal<bool>,
) -> Element {
    let client: FormClient = use_context();
    let mut form = use_signal({
        let config = config.clone();
        move || ModalFormState::from_config(&config)
    });

    use_effect(move || {
        let ready = is_ready();
        form.write().set_ready(ready);
    });

    let is_open_memo = use_memo(move || form.read().is_open());
    let is_open: ReadSignal<bool> = is_open_memo.into();

    let state = form.read();
    let fields = field_views(&config, &state);
    let is_pending = state.is_pending();
    let error = state.error().map(str::to_string);
    let success_text = state
        .submit_success()
        .then(|| config.success_text.clone())
        .flatten();
    drop(state);

    let endpoint = config.endpoint.clone();
    let trigger_label = config.trigger_label.clone();
    let is_tag = config.id == CREATE_TAG_MODAL_ID;

    rsx! {
        ReadyGate { is_ready: is_ready(),
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| form.write().open(),
                if is_tag {
                    TagIcon {}
                } else {
                    PencilIcon {}
                }
                "{trigger_label}"
            }

            FormModalView {
                is_open,
                title: config.title.clone(),
                submit_label: config.submit_label.clone(),
                fields,
                counter_style: config.counter_style,
                is_pending,
                error,
                on_field_change: move |(id, text): (String, String)| {
                    if let Err(e) = form.write().change_field(&id, &text) {
                        warn!("Ignoring edit: {e}");
                    }
                },
                on_submit: move |_| {
                    let Some(request) = form.write().begin_submit(&endpoint, &context) else {
                        return;
                    };
                    let client = client.clone();
                    spawn(async move {
                        let result = client.submit(&request).await;
                        form.write().finish_submit(result);
                    });
                },
                on_close: move |_| form.write().close(),
            }

            if let Some(message) = success_text {
                SuccessToast {
                    message,
                    on_dismiss: move |_| form.write().dismiss_success(),
                }
            }
        }
    }
}
