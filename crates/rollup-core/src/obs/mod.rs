//! Observability: submission events and the sinks that receive them.
//!
//! Submission logic never calls `tracing` directly. All instrumentation
//! flows through `SubmissionEvent` and `SubmissionSink`; `TracingSink` is
//! the default bridge to structured logs. No subscriber is installed here.

mod sink;

pub use sink::{RejectReason, SubmissionEvent, SubmissionSink, TracingSink};
