//! Put-job administrative action: the request envelope and its addressing.

mod options;


pub use options::{AckOptions, ExpandWildcards, IndicesOptions};

use crate::codec::{self, CodecError, JobConfigWire, WireVersion};
use rollup_schema::{
    error::StructuralError,
    node::JobConfig,
    snapshot::FieldCapsSnapshot,
    types::TimeValue,
    validate::{ValidationReport, validate_mappings},
};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Routing identifier for the put-job action.
pub const PUT_JOB_ACTION_NAME: &str = "cluster:admin/xpack/rollup/put";

///
/// PutJobRequest
///
/// Addressed, acknowledgeable request to create one rollup job.
///
/// Equality and hashing look only at the wrapped config, so two requests
/// for the same job are interchangeable for deduplication regardless of
/// their acknowledgement settings.
///

#[derive(Clone, Debug)]
pub struct PutJobRequest {
    config: JobConfig,
    ack: AckOptions,
}

impl PutJobRequest {
    #[must_use]
    pub fn new(config: JobConfig) -> Self {
        Self {
            config,
            ack: AckOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_ack_options(mut self, ack: AckOptions) -> Self {
        self.ack = ack;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &JobConfig {
        &self.config
    }

    #[must_use]
    pub fn into_config(self) -> JobConfig {
        self.config
    }

    #[must_use]
    pub const fn ack_options(&self) -> AckOptions {
        self.ack
    }

    /// Indices addressed by this request: exactly the job's index pattern.
    #[must_use]
    pub fn indices(&self) -> [&str; 1] {
        [self.config.index_pattern()]
    }

    #[must_use]
    pub const fn indices_options(&self) -> IndicesOptions {
        IndicesOptions::PUT_JOB
    }

    /// Structural check on the request shape. Never consults index mappings;
    /// see [`Self::validate_mappings`] for that.
    #[must_use]
    pub fn validate(&self) -> Option<StructuralError> {
        self.config.validate_structure().err()
    }

    /// Reconcile the job against discovered field capabilities.
    #[must_use]
    pub fn validate_mappings(&self, snapshot: &FieldCapsSnapshot) -> ValidationReport {
        validate_mappings(&self.config, snapshot)
    }

    /// Parse a JSON request body; `path_id` is the id from the request path.
    pub fn from_document(bytes: &[u8], path_id: Option<&str>) -> Result<Self, CodecError> {
        codec::parse_document(bytes, path_id).map(Self::new)
    }

    /// JSON request body. Acknowledgement settings are transport-level and
    /// do not appear in the body.
    pub fn to_document(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_document(&self.config)
    }

    /// Binary transport form: acknowledgement settings, then the config
    /// under its own version tag.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let wire = PutJobRequestWire {
            version: WireVersion::CURRENT.encode(),
            ack_timeout: self.ack.ack_timeout,
            master_node_timeout: self.ack.master_node_timeout,
            config: JobConfigWire::from_config(WireVersion::CURRENT, &self.config),
        };

        codec::to_bytes(&wire)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let wire: PutJobRequestWire = codec::from_bytes(bytes)?;
        WireVersion::decode(wire.version)
            .ok_or_else(|| CodecError::unsupported_version(wire.version))?;

        let ack = AckOptions {
            ack_timeout: wire.ack_timeout,
            master_node_timeout: wire.master_node_timeout,
        };

        Ok(Self::new(wire.config.into_config()?).with_ack_options(ack))
    }
}

impl PartialEq for PutJobRequest {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Eq for PutJobRequest {}

impl Hash for PutJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config.hash(state);
    }
}

///
/// PutJobRequestWire
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct PutJobRequestWire {
    version: u8,
    ack_timeout: TimeValue,
    master_node_timeout: TimeValue,
    config: JobConfigWire,
}
