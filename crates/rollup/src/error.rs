use derive_more::Display;
use rollup_core::{
    codec::CodecError,
    submit::{SubmitError, TransitionError},
};
use rollup_schema::{error::StructuralError, validate::ValidationReport};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// Whether retrying the same request could succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout | ErrorKind::Collaborator(_))
    }
}

impl From<StructuralError> for Error {
    fn from(err: StructuralError) -> Self {
        Self::new(
            ErrorKind::Invalid(InvalidErrorKind::Structure),
            ErrorOrigin::Request,
            err.to_string(),
        )
    }
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Self::new(
            ErrorKind::Invalid(InvalidErrorKind::Mapping),
            ErrorOrigin::Validate,
            report.to_string(),
        )
    }
}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Structural(err) => err.into(),

            CodecError::UnsupportedVersion { .. } => Self::new(
                ErrorKind::Codec(CodecErrorKind::UnsupportedVersion),
                ErrorOrigin::Codec,
                err.to_string(),
            ),

            CodecError::Encode(_) | CodecError::Decode(_) | CodecError::TooLarge { .. } => {
                Self::new(
                    ErrorKind::Codec(CodecErrorKind::Malformed),
                    ErrorOrigin::Codec,
                    err.to_string(),
                )
            }
        }
    }
}

impl From<SubmitError> for Error {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Structural(err) => err.into(),
            SubmitError::Rejected(report) => report.into(),
            SubmitError::Transition(err) => err.into(),

            SubmitError::TimedOut { .. } => {
                Self::new(ErrorKind::Timeout, ErrorOrigin::Submit, err.to_string())
            }

            SubmitError::FieldCaps(_) => Self::new(
                ErrorKind::Collaborator(CollaboratorErrorKind::FieldCaps),
                ErrorOrigin::Submit,
                err.to_string(),
            ),

            SubmitError::Store(_) => Self::new(
                ErrorKind::Collaborator(CollaboratorErrorKind::Store),
                ErrorOrigin::Submit,
                err.to_string(),
            ),
        }
    }
}

impl From<TransitionError> for Error {
    fn from(err: TransitionError) -> Self {
        Self::new(ErrorKind::Internal, ErrorOrigin::Submit, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Invalid(InvalidErrorKind),
    Codec(CodecErrorKind),
    Collaborator(CollaboratorErrorKind),

    /// No acknowledgement within the request's ack timeout.
    Timeout,

    /// The caller cannot remediate this.
    Internal,
}

///
/// InvalidErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum InvalidErrorKind {
    /// Request shape is wrong regardless of any index.
    Structure,

    /// Job fields disagree with the indices matching the pattern.
    Mapping,
}

///
/// CodecErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CodecErrorKind {
    Malformed,
    UnsupportedVersion,
}

///
/// CollaboratorErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CollaboratorErrorKind {
    FieldCaps,
    Store,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Codec,
    Request,
    Submit,
    Validate,
}
