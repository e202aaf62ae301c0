//! grader-core - Configuration, logging and the HTTP client behind the modal forms

pub mod client;
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use client::{ClientError, FormClient};
pub use config::{Config, ConfigError};
