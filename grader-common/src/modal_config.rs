use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::{EndpointError, EndpointTemplate, FieldSpec};

pub const CREATE_TAG_MODAL_ID: &str = "create_tag";
pub const UPDATE_TEXT_MODAL_ID: &str = "update_text";

fn default_true() -> bool {
    true
}

fn default_submit_label() -> String {
    "Save".to_string()
}

/// How the per-field character counter is worded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterStyle {
    /// "Characters remaining: 18"
    #[default]
    Remaining,
    /// "12/30"
    Used,
}

impl CounterStyle {
    pub fn format(self, used: usize, max_chars: usize) -> String {
        match self {
            CounterStyle::Remaining => {
                format!("Characters remaining: {}", max_chars.saturating_sub(used))
            }
            CounterStyle::Used => format!("{used}/{max_chars}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalConfigError {
    #[error("modal `{0}` has no fields")]
    NoFields(String),
    #[error("modal `{modal}` declares field `{field}` more than once")]
    DuplicateField { modal: String, field: String },
    #[error("field `{field}` of modal `{modal}` has a zero character cap")]
    ZeroCap { modal: String, field: String },
    #[error("modal `{modal}`: {source}")]
    Endpoint {
        modal: String,
        #[source]
        source: EndpointError,
    },
}

/// Everything needed to instantiate one bounded-input modal form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalConfig {
    pub id: String,
    pub title: String,
    /// Label of the button that opens the modal
    pub trigger_label: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    pub fields: Vec<FieldSpec>,
    pub endpoint: EndpointTemplate,
    /// Context keys copied into the request body next to the field values
    #[serde(default)]
    pub payload_extras: Vec<String>,
    #[serde(default)]
    pub success_text: Option<String>,
    /// Clear field values after a successful submit
    #[serde(default = "default_true")]
    pub reset_on_success: bool,
    #[serde(default)]
    pub counter_style: CounterStyle,
}

impl ModalConfig {
    /// Tag creation for a group's submission: short name plus description.
    pub fn create_tag() -> Self {
        Self {
            id: CREATE_TAG_MODAL_ID.to_string(),
            title: "Create Tag".to_string(),
            trigger_label: "Create Tag".to_string(),
            submit_label: "Create".to_string(),
            fields: vec![
                FieldSpec::new("name", "Tag name", 30)
                    .with_placeholder("some text")
                    .single_line(),
                FieldSpec::new("description", "Description", 120).with_placeholder("some text"),
            ],
            endpoint: EndpointTemplate::new(
                "/api/courses/{course_id}/assignments/{assignment_id}/groups/{group_id}/add_tag",
            ),
            payload_extras: vec!["role_id".to_string(), "assessment_id".to_string()],
            success_text: Some("Tag created successfully".to_string()),
            reset_on_success: true,
            counter_style: CounterStyle::Remaining,
        }
    }

    /// Single description field with a used/max counter.
    pub fn update_text() -> Self {
        Self {
            id: UPDATE_TEXT_MODAL_ID.to_string(),
            title: "Edit Description".to_string(),
            trigger_label: "Edit Description".to_string(),
            submit_label: default_submit_label(),
            fields: vec![FieldSpec::new("description", "Description", 120)],
            endpoint: EndpointTemplate::new(
                "/api/courses/{course_id}/assignments/{assignment_id}/update_description",
            ),
            payload_extras: vec![],
            success_text: Some("Description updated".to_string()),
            reset_on_success: false,
            counter_style: CounterStyle::Used,
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::create_tag(), Self::update_text()]
    }

    pub fn validate(&self) -> Result<(), ModalConfigError> {
        if self.fields.is_empty() {
            return Err(ModalConfigError::NoFields(self.id.clone()));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(ModalConfigError::DuplicateField {
                    modal: self.id.clone(),
                    field: field.id.clone(),
                });
            }
            if field.max_chars == 0 {
                return Err(ModalConfigError::ZeroCap {
                    modal: self.id.clone(),
                    field: field.id.clone(),
                });
            }
        }

        self.endpoint
            .params()
            .map_err(|source| ModalConfigError::Endpoint {
                modal: self.id.clone(),
                source,
            })?;

        Ok(())
    }
}
