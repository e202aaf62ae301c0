//! View models handed to the form components

use grader_common::{ModalConfig, ModalFormState};

/// One field as the view renders it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub id: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub value: String,
    pub max_chars: usize,
    pub multiline: bool,
}

/// Pair each configured field with its current value.
pub fn field_views(config: &ModalConfig, state: &ModalFormState) -> Vec<FieldView> {
    config
        .fields
        .iter()
        .map(|spec| FieldView {
            id: spec.id.clone(),
            label: spec.label.clone(),
            placeholder: spec.placeholder.clone(),
            value: state.value(&spec.id).unwrap_or_default().to_string(),
            max_chars: spec.max_chars,
            multiline: spec.multiline,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_views_follow_config_order() {
        let config = ModalConfig::create_tag();
        let mut state = ModalFormState::from_config(&config);
        state.set_ready(true);
        state.change_field("description", "Missing tests").unwrap();

        let views = field_views(&config, &state);

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "name");
        assert_eq!(views[0].value, "");
        assert!(!views[0].multiline);
        assert_eq!(views[1].id, "description");
        assert_eq!(views[1].value, "Missing tests");
        assert_eq!(views[1].max_chars, 120);
    }
}
