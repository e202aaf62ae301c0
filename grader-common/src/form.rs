use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    EndpointBuilder, FieldSpec, FieldState, ModalConfig, SubmitContext, SubmitRequest,
    SubmitResult,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// State of one bounded-input modal form.
///
/// Pure data: no I/O happens here. A submit is split into
/// [`begin_submit`](Self::begin_submit), which produces the request, and
/// [`finish_submit`](Self::finish_submit), which applies the outcome. The
/// caller performs the network call in between.
///
/// Every user-action transition is a no-op until the host marks the form
/// ready via [`set_ready`](Self::set_ready).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFormState {
    is_ready: bool,
    is_open: bool,
    /// Ordered as declared in the config
    fields: Vec<(String, FieldState)>,
    submit_success: bool,
    pending: bool,
    error: Option<String>,
    reset_on_success: bool,
    payload_extras: Vec<String>,
}

impl ModalFormState {
    pub fn new(fields: &[FieldSpec], reset_on_success: bool) -> Self {
        Self {
            is_ready: false,
            is_open: false,
            fields: fields
                .iter()
                .map(|spec| (spec.id.clone(), FieldState::new(spec.max_chars)))
                .collect(),
            submit_success: false,
            pending: false,
            error: None,
            reset_on_success,
            payload_extras: Vec::new(),
        }
    }

    pub fn from_config(config: &ModalConfig) -> Self {
        let mut state = Self::new(&config.fields, config.reset_on_success);
        state.payload_extras = config.payload_extras.clone();
        state
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn submit_success(&self) -> bool {
        self.submit_success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.fields.iter().find(|(fid, _)| fid == id).map(|(_, f)| f)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.field(id).map(FieldState::value)
    }

    pub fn remaining(&self, id: &str) -> Option<usize> {
        self.field(id).map(FieldState::remaining)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(id, f)| (id.as_str(), f))
    }

    /// Mirror the host's readiness signal.
    pub fn set_ready(&mut self, ready: bool) {
        self.is_ready = ready;
    }

    pub fn open(&mut self) {
        if !self.is_ready {
            return;
        }
        self.is_open = true;
    }

    /// Hide the modal. Field values are kept for the next open.
    pub fn close(&mut self) {
        if !self.is_ready {
            return;
        }
        self.is_open = false;
        self.error = None;
    }

    /// Store `raw` into the field, truncated to its character cap.
    pub fn change_field(&mut self, id: &str, raw: &str) -> Result<(), FormError> {
        if !self.is_ready {
            return Ok(());
        }
        let field = self
            .fields
            .iter_mut()
            .find(|(fid, _)| fid == id)
            .map(|(_, f)| f)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))?;
        field.set(raw);
        Ok(())
    }

    /// Acknowledge the success message.
    pub fn dismiss_success(&mut self) {
        self.submit_success = false;
    }

    pub fn can_submit(&self) -> bool {
        self.is_ready && self.is_open && !self.pending
    }

    /// Start a submit.
    ///
    /// Returns `None` when the form is not ready, not open, or already has a
    /// request in flight. An endpoint that cannot be built is reported through
    /// [`error`](Self::error) and also yields `None`.
    pub fn begin_submit(
        &mut self,
        endpoint: &impl EndpointBuilder,
        context: &SubmitContext,
    ) -> Option<SubmitRequest> {
        if !self.can_submit() {
            debug!(
                "Submit ignored (ready={}, open={}, pending={})",
                self.is_ready, self.is_open, self.pending
            );
            return None;
        }

        let endpoint = match endpoint.build(context) {
            Ok(url) => url,
            Err(e) => {
                warn!("Cannot build submit endpoint: {e}");
                self.error = Some(format!("Could not submit: {e}"));
                return None;
            }
        };

        let mut body: BTreeMap<String, String> = self
            .fields
            .iter()
            .map(|(id, f)| (id.clone(), f.value().to_string()))
            .collect();
        for key in &self.payload_extras {
            if let Some(value) = context.get(key) {
                body.entry(key.clone()).or_insert_with(|| value.to_string());
            }
        }

        self.pending = true;
        self.error = None;
        Some(SubmitRequest { endpoint, body })
    }

    /// Apply the outcome of the request produced by `begin_submit`.
    ///
    /// A failure arriving after the modal was closed is logged and dropped,
    /// so the next open starts without an error.
    pub fn finish_submit(&mut self, result: SubmitResult) {
        self.pending = false;
        match result {
            SubmitResult::Success => {
                self.is_open = false;
                self.submit_success = true;
                self.error = None;
                if self.reset_on_success {
                    for (_, field) in &mut self.fields {
                        field.clear();
                    }
                }
            }
            SubmitResult::Failure { message } if self.is_open => {
                self.error = Some(message);
            }
            SubmitResult::Failure { message } => {
                warn!("Submit failed after the modal was closed: {message}");
            }
        }
    }
}
