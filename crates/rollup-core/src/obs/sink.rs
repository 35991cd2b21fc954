use derive_more::Display;
use std::time::Duration;
use tracing::{debug, info, warn};

///
/// RejectReason
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum RejectReason {
    #[display("structural")]
    Structural,
    #[display("mapping")]
    Mapping,
    #[display("field_caps")]
    FieldCaps,
    #[display("store")]
    Store,
}

///
/// SubmissionEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionEvent<'a> {
    Received {
        job_id: &'a str,
    },
    StructurallyValidated {
        job_id: &'a str,
    },
    MappingValidated {
        job_id: &'a str,
        fields: usize,
    },
    Rejected {
        job_id: &'a str,
        reason: RejectReason,
        errors: usize,
    },
    Acknowledged {
        job_id: &'a str,
        acknowledged: bool,
        elapsed: Duration,
    },
    TimedOut {
        job_id: &'a str,
        after: Duration,
    },
}

///
/// SubmissionSink
///

pub trait SubmissionSink: Send + Sync {
    fn record(&self, event: SubmissionEvent<'_>);
}

///
/// TracingSink
/// Default sink that forwards every event to `tracing`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&self, event: SubmissionEvent<'_>) {
        match event {
            SubmissionEvent::Received { job_id } => {
                debug!(job_id, "put job request received");
            }
            SubmissionEvent::StructurallyValidated { job_id } => {
                debug!(job_id, "put job request is well formed");
            }
            SubmissionEvent::MappingValidated { job_id, fields } => {
                debug!(job_id, fields, "job mappings validated");
            }
            SubmissionEvent::Rejected {
                job_id,
                reason,
                errors,
            } => {
                warn!(job_id, %reason, errors, "put job request rejected");
            }
            SubmissionEvent::Acknowledged {
                job_id,
                acknowledged,
                elapsed,
            } => {
                info!(
                    job_id,
                    acknowledged,
                    elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    "rollup job stored"
                );
            }
            SubmissionEvent::TimedOut { job_id, after } => {
                warn!(job_id, after = ?after, "put job request timed out");
            }
        }
    }
}
