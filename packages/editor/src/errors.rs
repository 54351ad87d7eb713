//! Error types for the editor

use thiserror::Error;

/// Errors surfaced by the editor's I/O edges (import, export, config).
///
/// Editing commands never return these; see [`crate::MutationError`] for how
/// command failures are absorbed by the store.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Schema error: {0}")]
    Schema(#[from] sitebuilder_schema::SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
