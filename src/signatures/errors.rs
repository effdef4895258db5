/// Errors from the signature pipeline.
use thiserror::Error;

use crate::api::ApiError;

/// Terminal failures of a run. Page-level problems are not errors; they are
/// reported and skipped.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// `--list_id` missing, empty, zero, or not an integer.
    #[error("You must specify a numeric Petition List ID. Exiting.")]
    Usage,

    /// The base endpoint gave no usable signature count.
    #[error("No signatures detected on this petition. Exiting.")]
    NoSignatures,

    /// The HTTP client could not be set up.
    #[error("{0}")]
    Client(#[from] ApiError),

    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl SignatureError {
    /// Return the CLI exit code for this error.
    ///
    /// Every terminal condition shares one non-zero code; callers tell them
    /// apart by the message.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage | Self::NoSignatures | Self::Client(_) | Self::Io(_) => 1,
        }
    }
}
