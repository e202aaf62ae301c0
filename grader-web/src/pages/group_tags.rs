use super::form_modal::BoundedFormModal;
use dioxus::prelude::*;
use grader_common::{SubmitContext, CREATE_TAG_MODAL_ID};
use grader_core::Config;
use grader_ui::use_document_ready;
use tracing::warn;

/// Group submission page hosting the create-tag modal
#[component]
pub fn GroupTags(
    course_id: String,
    assignment_id: String,
    group_id: String,
    role_id: Option<String>,
) -> Element {
    let config: Config = use_context();
    let is_ready = use_document_ready();

    let Some(modal) = config.modal(CREATE_TAG_MODAL_ID).cloned() else {
        warn!("No `{CREATE_TAG_MODAL_ID}` modal configured");
        return rsx! {};
    };

    let mut context = SubmitContext::new()
        .with("course_id", &course_id)
        .with("assignment_id", &assignment_id)
        .with("assessment_id", &assignment_id)
        .with("group_id", &group_id);
    if let Some(role_id) = role_id {
        context.insert("role_id", role_id);
    }

    rsx! {
        div { class: "max-w-2xl",
            h2 { class: "text-xl font-semibold text-white mb-2", "Group {group_id}" }
            p { class: "text-sm text-gray-400 mb-6",
                "Tags help graders sort and filter submissions for this assignment."
            }
            BoundedFormModal { config: modal, context, is_ready }
        }
    }
}
