//! Job config codec.
//!
//! Two independent forms:
//! - binary: version-tagged CBOR, strict (unknown fields, trailing bytes,
//!   unknown versions and missing members all fail)
//! - document: JSON request/response bodies, tolerant of unknown fields
//!
//! Both binary forms share the CBOR framing and payload ceiling in
//! `cbor`.

mod cbor;
mod document;
mod version;
mod wire;

#[cfg(test)]
mod tests;

pub use document::{parse_document, to_document, to_document_value};
pub use version::WireVersion;
pub(crate) use cbor::{from_bytes, to_bytes};
pub(crate) use wire::JobConfigWire;

use rollup_schema::{error::StructuralError, node::JobConfig};
use std::fmt;
use thiserror::Error as ThisError;

///
/// CodecError
/// Job config encode/decode failures. Always fatal to the one operation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CodecError {
    #[error("failed to encode job config: {0}")]
    Encode(String),

    #[error("failed to decode job config: {0}")]
    Decode(String),

    #[error("job config payload of {len} bytes exceeds size limit {max_bytes}")]
    TooLarge { len: usize, max_bytes: usize },

    #[error("unsupported job config wire version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error(transparent)]
    Structural(#[from] StructuralError),
}

///
/// CodecErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodecErrorKind {
    Encode,
    Decode,
    TooLarge,
    UnsupportedVersion,
    Structural,
}

impl CodecErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
            Self::TooLarge => "too_large",
            Self::UnsupportedVersion => "unsupported_version",
            Self::Structural => "structural",
        }
    }
}

impl fmt::Display for CodecErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CodecError {
    #[must_use]
    pub const fn kind(&self) -> CodecErrorKind {
        match self {
            Self::Encode(_) => CodecErrorKind::Encode,
            Self::Decode(_) => CodecErrorKind::Decode,
            Self::TooLarge { .. } => CodecErrorKind::TooLarge,
            Self::UnsupportedVersion { .. } => CodecErrorKind::UnsupportedVersion,
            Self::Structural(_) => CodecErrorKind::Structural,
        }
    }

    pub(crate) fn encode(reason: impl fmt::Display) -> Self {
        Self::Encode(reason.to_string())
    }

    pub(crate) fn decode(reason: impl fmt::Display) -> Self {
        Self::Decode(reason.to_string())
    }

    pub(crate) const fn unsupported_version(version: u8) -> Self {
        Self::UnsupportedVersion { version }
    }
}

/// Encode a job config at the current wire version.
pub fn encode(config: &JobConfig) -> Result<Vec<u8>, CodecError> {
    let wire = JobConfigWire::from_config(WireVersion::CURRENT, config);

    to_bytes(&wire)
}

/// Decode a job config produced by [`encode`].
///
/// Either a fully populated config comes back or an error does; there is
/// no partial result.
pub fn decode(bytes: &[u8]) -> Result<JobConfig, CodecError> {
    let wire: JobConfigWire = from_bytes(bytes)?;

    wire.into_config()
}
