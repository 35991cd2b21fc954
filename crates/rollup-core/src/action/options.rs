use crate::DEFAULT_ACK_TIMEOUT_SECS;
use derive_more::Display;
use rollup_schema::types::TimeValue;
use serde::{Deserialize, Serialize};

///
/// ExpandWildcards
///
/// Which index states a wildcard expression may expand to.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandWildcards {
    #[display("none")]
    None,
    #[display("open")]
    Open,
    #[display("closed")]
    Closed,
    #[display("all")]
    All,
}

///
/// IndicesOptions
///
/// Index-resolution policy used when the request's index pattern is
/// expanded for field-capabilities discovery.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IndicesOptions {
    pub ignore_unavailable: bool,
    pub allow_no_indices: bool,
    pub expand_wildcards: ExpandWildcards,
    pub forbid_closed_indices: bool,
}

impl IndicesOptions {
    /// Fixed policy for put-job requests: a missing or unmatched index is an
    /// error, wildcards expand to open indices only.
    pub const PUT_JOB: Self = Self {
        ignore_unavailable: false,
        allow_no_indices: false,
        expand_wildcards: ExpandWildcards::Open,
        forbid_closed_indices: false,
    };

    /// Render as request parameters for a field-capabilities query.
    #[must_use]
    pub fn as_params(&self) -> [(&'static str, String); 4] {
        [
            ("ignore_unavailable", self.ignore_unavailable.to_string()),
            ("allow_no_indices", self.allow_no_indices.to_string()),
            ("expand_wildcards", self.expand_wildcards.to_string()),
            ("forbid_closed_indices", self.forbid_closed_indices.to_string()),
        ]
    }
}

///
/// AckOptions
///
/// Acknowledgement settings carried by the request envelope. These travel
/// on the wire but take no part in request equality.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AckOptions {
    /// How long to wait for the accepted job to be acknowledged.
    pub ack_timeout: TimeValue,

    /// How long to wait for a reachable master before giving up.
    pub master_node_timeout: TimeValue,
}

impl Default for AckOptions {
    fn default() -> Self {
        Self {
            ack_timeout: TimeValue::seconds(DEFAULT_ACK_TIMEOUT_SECS),
            master_node_timeout: TimeValue::seconds(DEFAULT_ACK_TIMEOUT_SECS),
        }
    }
}

impl AckOptions {
    #[must_use]
    pub const fn with_ack_timeout(mut self, ack_timeout: TimeValue) -> Self {
        self.ack_timeout = ack_timeout;
        self
    }

    #[must_use]
    pub const fn with_master_node_timeout(mut self, master_node_timeout: TimeValue) -> Self {
        self.master_node_timeout = master_node_timeout;
        self
    }
}
