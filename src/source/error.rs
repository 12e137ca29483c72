//! Error types for the Order Source seam.

use thiserror::Error;

/// Errors that can occur while decoding an Order Source payload.
///
/// This is the fragment's single failure class: the engine catches it,
/// logs it, and proceeds with an empty order list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The stored payload could not be decoded as an order list.
    #[error("malformed order payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
