//! Submission driver.
//!
//! Walks one [`PutJobRequest`] through its lifecycle against injected
//! collaborators: the field-capabilities query and the job store. Nothing
//! is written anywhere until the store accepts a fully validated job, so
//! dropping the future at any point leaves no partial state behind.
//!
//! The driver uses `tokio::time` for its deadline and must be polled from
//! within a Tokio runtime with the time driver enabled.

mod state;


pub use state::{SubmissionState, TransitionError};

use crate::{
    action::{IndicesOptions, PutJobRequest},
    obs::{RejectReason, SubmissionEvent, SubmissionSink, TracingSink},
};
use async_trait::async_trait;
use rollup_schema::{
    error::StructuralError, node::JobConfig, snapshot::FieldCapsSnapshot,
    validate::ValidationReport,
};
use std::{sync::Arc, time::Duration};
use thiserror::Error as ThisError;
use tokio::time::{Instant, timeout};

///
/// FieldCapsSource
///
/// External field-capabilities discovery for the request's indices.
///

#[async_trait]
pub trait FieldCapsSource: Send + Sync {
    async fn field_caps(
        &self,
        indices: &[&str],
        options: IndicesOptions,
    ) -> Result<FieldCapsSnapshot, CollaboratorError>;
}

///
/// JobStore
///
/// External persistence for accepted jobs. Returns whether the write was
/// acknowledged. Not idempotent: retries must be deduplicated by job id
/// upstream.
///

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn put_job(&self, config: &JobConfig) -> Result<bool, CollaboratorError>;
}

///
/// CollaboratorError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{0}")]
pub struct CollaboratorError(pub String);

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

///
/// AcknowledgedResponse
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

///
/// SubmitError
///

#[derive(Debug, ThisError)]
pub enum SubmitError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Rejected(ValidationReport),

    #[error("acknowledgement not received within {after:?}")]
    TimedOut { after: Duration },

    #[error("field capabilities query failed: {0}")]
    FieldCaps(CollaboratorError),

    #[error("job store failed: {0}")]
    Store(CollaboratorError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

///
/// Submission
///
/// One in-flight put-job request and the state it has reached.
///

pub struct Submission {
    request: PutJobRequest,
    state: SubmissionState,
    sink: Arc<dyn SubmissionSink>,
}

impl Submission {
    #[must_use]
    pub fn new(request: PutJobRequest) -> Self {
        Self {
            request,
            state: SubmissionState::Received,
            sink: Arc::new(TracingSink),
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn SubmissionSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub const fn request(&self) -> &PutJobRequest {
        &self.request
    }

    /// Drive the request to a terminal state within its acknowledgement
    /// timeout.
    pub async fn run<C, S>(
        &mut self,
        caps: &C,
        store: &S,
    ) -> Result<AcknowledgedResponse, SubmitError>
    where
        C: FieldCapsSource + ?Sized,
        S: JobStore + ?Sized,
    {
        let after = self.request.ack_options().ack_timeout.as_duration();

        if let Ok(result) = timeout(after, self.drive(caps, store)).await {
            return result;
        }

        self.state = self.state.transition(SubmissionState::TimedOut)?;
        self.sink.record(SubmissionEvent::TimedOut {
            job_id: self.request.config().id(),
            after,
        });

        Err(SubmitError::TimedOut { after })
    }

    async fn drive<C, S>(
        &mut self,
        caps: &C,
        store: &S,
    ) -> Result<AcknowledgedResponse, SubmitError>
    where
        C: FieldCapsSource + ?Sized,
        S: JobStore + ?Sized,
    {
        let started = Instant::now();
        let request = &self.request;
        let job_id = request.config().id();

        // a submission runs once
        if self.state != SubmissionState::Received {
            return Err(TransitionError {
                from: self.state,
                to: SubmissionState::StructurallyValidated,
            }
            .into());
        }
        self.sink.record(SubmissionEvent::Received { job_id });

        // structure first; no collaborator is touched for a malformed request
        if let Some(err) = request.validate() {
            self.state = self.state.transition(SubmissionState::Rejected)?;
            self.sink.record(SubmissionEvent::Rejected {
                job_id,
                reason: RejectReason::Structural,
                errors: err.messages().len(),
            });
            return Err(err.into());
        }
        self.state = self.state.transition(SubmissionState::StructurallyValidated)?;
        self.sink.record(SubmissionEvent::StructurallyValidated { job_id });

        let snapshot = match caps
            .field_caps(&request.indices(), request.indices_options())
            .await
        {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.state = self.state.transition(SubmissionState::Rejected)?;
                self.sink.record(SubmissionEvent::Rejected {
                    job_id,
                    reason: RejectReason::FieldCaps,
                    errors: 1,
                });
                return Err(SubmitError::FieldCaps(err));
            }
        };

        if let Err(report) = request.validate_mappings(&snapshot).result() {
            self.state = self.state.transition(SubmissionState::Rejected)?;
            self.sink.record(SubmissionEvent::Rejected {
                job_id,
                reason: RejectReason::Mapping,
                errors: report.len(),
            });
            return Err(SubmitError::Rejected(report));
        }
        self.state = self.state.transition(SubmissionState::MappingValidated)?;
        self.sink.record(SubmissionEvent::MappingValidated {
            job_id,
            fields: snapshot.len(),
        });

        match store.put_job(request.config()).await {
            Ok(acknowledged) => {
                self.state = self.state.transition(SubmissionState::Acknowledged)?;
                self.sink.record(SubmissionEvent::Acknowledged {
                    job_id,
                    acknowledged,
                    elapsed: started.elapsed(),
                });

                Ok(AcknowledgedResponse { acknowledged })
            }
            Err(err) => {
                self.state = self.state.transition(SubmissionState::Rejected)?;
                self.sink.record(SubmissionEvent::Rejected {
                    job_id,
                    reason: RejectReason::Store,
                    errors: 1,
                });

                Err(SubmitError::Store(err))
            }
        }
    }
}

/// Submit `request` with the default tracing sink.
pub async fn submit<C, S>(
    request: PutJobRequest,
    caps: &C,
    store: &S,
) -> Result<AcknowledgedResponse, SubmitError>
where
    C: FieldCapsSource + ?Sized,
    S: JobStore + ?Sized,
{
    Submission::new(request).run(caps, store).await
}
