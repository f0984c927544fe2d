use thiserror::Error;

/// Errors raised by the float-label field and its persistence layer.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The widget was built without a host context and has no children.
    #[error("field has no host context")]
    MissingContext,

    /// A parcel was handed to a widget that did not produce it.
    #[error("saved state mismatch: expected `{expected}`, found `{found}`")]
    StateMismatch { expected: String, found: String },

    /// Parcel bytes could not be decoded.
    #[error("failed to decode saved state: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;
