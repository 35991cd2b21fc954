//! ## Crate layout
//! - `core`: wire codec, the put-job request envelope, and the submission
//!   driver.
//! - `error`: public error type with a stable kind + origin taxonomy.
//! - `schema`: job configuration nodes, field capabilities, and validation.
//!
//! The `prelude` module carries the vocabulary needed to build, validate,
//! and submit a rollup job.

pub use rollup_core as core;
pub use rollup_schema as schema;

pub mod error;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        core::{
            prelude::*,
            submit::{AcknowledgedResponse, FieldCapsSource, JobStore, Submission, submit},
        },
        error::{ErrorKind, ErrorOrigin},
    };
}
