//! Shared hooks

mod document_ready;

pub use document_ready::use_document_ready;
