//! Endpoint templates for form submission
//!
//! A template is a URL path with `{name}` placeholders, for example
//! `/api/courses/{course_id}/assignments/{assignment_id}/groups/{group_id}/add_tag`.
//! Placeholders are filled from the host-supplied [`SubmitContext`] and each
//! value is percent-encoded as a single path segment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SubmitContext;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("missing value for endpoint parameter `{0}`")]
    MissingParam(String),
    #[error("unclosed placeholder in endpoint template `{0}`")]
    UnclosedPlaceholder(String),
}

/// Builds the URL a form submits to.
///
/// Implemented by [`EndpointTemplate`] and by any
/// `Fn(&SubmitContext) -> Result<String, EndpointError>` closure, so hosts can
/// inject their own routing when a template is not enough.
pub trait EndpointBuilder {
    fn build(&self, context: &SubmitContext) -> Result<String, EndpointError>;
}

impl<F> EndpointBuilder for F
where
    F: Fn(&SubmitContext) -> Result<String, EndpointError>,
{
    fn build(&self, context: &SubmitContext) -> Result<String, EndpointError> {
        self(context)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointTemplate(String);

impl EndpointTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Names of all placeholders, in order of appearance.
    pub fn params(&self) -> Result<Vec<&str>, EndpointError> {
        let mut params = Vec::new();
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let end = after
                .find('}')
                .ok_or_else(|| EndpointError::UnclosedPlaceholder(self.0.clone()))?;
            params.push(&after[..end]);
            rest = &after[end + 1..];
        }
        Ok(params)
    }

    pub fn render(&self, context: &SubmitContext) -> Result<String, EndpointError> {
        let mut url = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after
                .find('}')
                .ok_or_else(|| EndpointError::UnclosedPlaceholder(self.0.clone()))?;
            let name = &after[..end];
            let value = context
                .get(name)
                .ok_or_else(|| EndpointError::MissingParam(name.to_string()))?;
            url.push_str(&urlencoding::encode(value));
            rest = &after[end + 1..];
        }
        url.push_str(rest);
        Ok(url)
    }
}

impl EndpointBuilder for EndpointTemplate {
    fn build(&self, context: &SubmitContext) -> Result<String, EndpointError> {
        self.render(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_context() -> SubmitContext {
        SubmitContext::new()
            .with("course_id", "1")
            .with("assignment_id", "42")
            .with("group_id", "7")
    }

    #[test]
    fn test_render_fills_all_placeholders() {
        let template = EndpointTemplate::new(
            "/api/courses/{course_id}/assignments/{assignment_id}/groups/{group_id}/add_tag",
        );
        assert_eq!(
            template.render(&group_context()).unwrap(),
            "/api/courses/1/assignments/42/groups/7/add_tag"
        );
    }

    #[test]
    fn test_render_without_placeholders() {
        let template = EndpointTemplate::new("/api/tags");
        assert_eq!(template.render(&SubmitContext::new()).unwrap(), "/api/tags");
    }

    #[test]
    fn test_render_missing_param() {
        let template = EndpointTemplate::new("/api/courses/{course_id}/groups/{group_id}");
        let context = SubmitContext::new().with("course_id", "1");
        assert_eq!(
            template.render(&context),
            Err(EndpointError::MissingParam("group_id".to_string()))
        );
    }

    #[test]
    fn test_render_unclosed_placeholder() {
        let template = EndpointTemplate::new("/api/courses/{course_id");
        assert!(matches!(
            template.render(&group_context()),
            Err(EndpointError::UnclosedPlaceholder(_))
        ));
    }

    #[test]
    fn test_render_encodes_values() {
        let template = EndpointTemplate::new("/api/groups/{group_id}");
        let context = SubmitContext::new().with("group_id", "a b/c");
        assert_eq!(template.render(&context).unwrap(), "/api/groups/a%20b%2Fc");
    }

    #[test]
    fn test_params_in_order() {
        let template = EndpointTemplate::new("/c/{course_id}/a/{assignment_id}");
        assert_eq!(template.params().unwrap(), vec!["course_id", "assignment_id"]);
    }

    #[test]
    fn test_closure_builder() {
        let builder = |ctx: &SubmitContext| -> Result<String, EndpointError> {
            let id = ctx
                .get("group_id")
                .ok_or_else(|| EndpointError::MissingParam("group_id".into()))?;
            Ok(format!("/groups/{id}/tags"))
        };
        assert_eq!(builder.build(&group_context()).unwrap(), "/groups/7/tags");
    }
}
