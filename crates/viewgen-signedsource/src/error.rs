//! Signing error types.

/// Errors that can occur while signing or verifying a file.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// The data contains neither a signing token nor a signature to replace.
    #[error("signing token not found")]
    TokenNotFound,

    /// The data carries no signature to verify.
    #[error("file is not signed")]
    NotSigned,
}

/// Result type alias for signing operations.
pub type Result<T> = std::result::Result<T, SignError>;
