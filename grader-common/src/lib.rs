//! grader-common - Modal form state and submission types
//!
//! Pure data structures shared by the core client and the UI crates. Nothing
//! here performs I/O.

mod endpoint;
mod field;
mod form;
mod modal_config;
mod submit;

pub use endpoint::{EndpointBuilder, EndpointError, EndpointTemplate};
pub use field::{clamp_chars, FieldSpec, FieldState};
pub use form::{FormError, ModalFormState};
pub use modal_config::{
    CounterStyle, ModalConfig, ModalConfigError, CREATE_TAG_MODAL_ID, UPDATE_TEXT_MODAL_ID,
};
pub use submit::{SubmitContext, SubmitRequest, SubmitResult};
