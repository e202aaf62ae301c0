//! Shared UI components

pub mod bounded_text_area;
pub mod button;
pub mod form_error;
pub mod form_modal;
pub mod icons;
pub mod modal;
pub mod ready_gate;
pub mod success_toast;

pub use bounded_text_area::BoundedTextArea;
pub use button::{Button, ButtonVariant, ChromelessButton};
pub use form_error::FormErrorNotice;
pub use form_modal::FormModalView;
pub use icons::{AlertTriangleIcon, CheckIcon, LoaderIcon, PencilIcon, TagIcon, XIcon};
pub use modal::Modal;
pub use ready_gate::ReadyGate;
pub use success_toast::SuccessToast;
