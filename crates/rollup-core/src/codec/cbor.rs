//! CBOR framing shared by every binary job form (bare config and request
//! envelope). The payload ceiling is applied before any byte is parsed.

use crate::{MAX_JOB_CONFIG_BYTES, codec::CodecError};
use serde::{Serialize, de::DeserializeOwned};
use std::panic::{AssertUnwindSafe, catch_unwind};

pub(crate) fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    serde_cbor::to_vec(value).map_err(CodecError::encode)
}

/// Decode one complete payload.
///
/// - Payloads over [`MAX_JOB_CONFIG_BYTES`] fail with `TooLarge`.
/// - Trailing bytes after the top-level value are an error.
/// - A panic inside the decoder is reported as a decode failure.
pub(crate) fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    check_size(bytes.len())?;

    match catch_unwind(AssertUnwindSafe(|| serde_cbor::from_slice(bytes))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(CodecError::decode(err)),
        Err(_) => Err(CodecError::decode("panic during CBOR decode")),
    }
}

pub(crate) const fn check_size(len: usize) -> Result<(), CodecError> {
    if len > MAX_JOB_CONFIG_BYTES {
        return Err(CodecError::TooLarge {
            len,
            max_bytes: MAX_JOB_CONFIG_BYTES,
        });
    }

    Ok(())
}
