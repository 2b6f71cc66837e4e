// File: crates/month-graph-core/src/error.rs
// Summary: Error type shared by resource resolution and rendering backends.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// The resolver has no dimension registered under this identifier.
    #[error("unknown dimension resource '{id}'")]
    UnknownResource { id: String },

    #[error("dimension resource '{id}' is invalid: {reason}")]
    InvalidDimension { id: String, reason: String },

    /// Backend could not allocate or access its drawing surface.
    #[error("drawing surface error: {0}")]
    Surface(String),

    #[error("image encoding failed: {0}")]
    Encode(String),
}
