use super::form_modal::BoundedFormModal;
use dioxus::prelude::*;
use grader_common::{SubmitContext, UPDATE_TEXT_MODAL_ID};
use grader_core::Config;
use grader_ui::use_document_ready;
use tracing::warn;

/// Assignment page hosting the description editor
#[component]
pub fn AssignmentDetail(course_id: String, assignment_id: String) -> Element {
    let config: Config = use_context();
    let is_ready = use_document_ready();

    let Some(modal) = config.modal(UPDATE_TEXT_MODAL_ID).cloned() else {
        warn!("No `{UPDATE_TEXT_MODAL_ID}` modal configured");
        return rsx! {};
    };

    let context = SubmitContext::new()
        .with("course_id", &course_id)
        .with("assignment_id", &assignment_id);

    rsx! {
        div { class: "max-w-2xl",
            h2 { class: "text-xl font-semibold text-white mb-6", "Assignment {assignment_id}" }
            BoundedFormModal { config: modal, context, is_ready }
        }
    }
}
