//! Error types for the text transform registry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// No transform is registered under this key
    #[error("unknown transform '{0}'")]
    UnknownTransform(String),

    /// A user pipeline expression could not be compiled
    #[error("invalid pipeline: {reason}")]
    InvalidPipeline { reason: String },
}
