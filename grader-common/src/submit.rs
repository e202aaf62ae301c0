use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifiers supplied by the host page (course, assignment, group, role...).
///
/// Used to render the submit endpoint and, for keys listed as payload extras,
/// copied into the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitContext(BTreeMap<String, String>);

impl SubmitContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// A fully built form submission: where to POST and what to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    pub endpoint: String,
    /// JSON object body: field values keyed by field id, plus payload extras
    pub body: BTreeMap<String, String>,
}

/// Outcome of one submit round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Success,
    Failure { message: String },
}

impl SubmitResult {
    pub fn failure(message: impl Into<String>) -> Self {
        SubmitResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitResult::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_stringifies_ids() {
        let context = SubmitContext::new().with("course_id", 1).with("group_id", 7u64);
        assert_eq!(context.get("course_id"), Some("1"));
        assert_eq!(context.get("group_id"), Some("7"));
        assert_eq!(context.get("role_id"), None);
    }

    #[test]
    fn test_request_serializes_body_as_object() {
        let mut body = BTreeMap::new();
        body.insert("name".to_string(), "late".to_string());
        body.insert("description".to_string(), "Submitted after deadline".to_string());
        let request = SubmitRequest {
            endpoint: "/api/tags".to_string(),
            body,
        };

        let json = serde_json::to_value(&request.body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": "Submitted after deadline", "name": "late"})
        );
    }
}
