//! Rollup job schema: the job configuration nodes, the field-capability
//! snapshot they are checked against, and the validation passes that
//! reconcile the two.

pub mod error;
pub mod node;
pub mod snapshot;
pub mod types;
pub mod validate;

/// Maximum length for job identifiers.
pub const MAX_JOB_ID_LEN: usize = 255;

/// Default time zone applied to date histogram groups.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Default search timeout for a rollup job, in seconds.
pub const DEFAULT_JOB_TIMEOUT_SECS: u64 = 20;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::StructuralError,
        node::*,
        snapshot::{FieldCapability, FieldCapsSnapshot},
        types::{FieldType, MetricKind, TimeUnit, TimeValue},
        validate::{ValidateNode, ValidationReport},
    };
    pub use serde::{Deserialize, Serialize};
}
