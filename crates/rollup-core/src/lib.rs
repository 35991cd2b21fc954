//! Rollup job transport: the versioned wire codec, the put-job request
//! envelope, and the submission driver that walks one request from
//! receipt to acknowledgement.
#![warn(unreachable_pub)]

pub mod action;
pub mod codec;
pub mod obs;
pub mod submit;

pub use rollup_schema as schema;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Upper bound on one encoded job config or request payload.
pub const MAX_JOB_CONFIG_BYTES: usize = 64 * 1024;

/// Default acknowledgement and master-node timeout, in seconds.
pub const DEFAULT_ACK_TIMEOUT_SECS: u64 = 30;

///
/// Prelude
///
/// Domain vocabulary only; errors and drivers are imported by path.
///

pub mod prelude {
    pub use crate::action::{AckOptions, IndicesOptions, PUT_JOB_ACTION_NAME, PutJobRequest};
    pub use rollup_schema::prelude::*;
}
