//! grader-ui - Components for the grading client's modal forms
//!
//! Pure view components and hooks. Pages in the web app own the state and
//! side effects and pass everything else down as props.

pub mod components;
pub mod display_types;
pub mod hooks;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
pub use hooks::*;
