use derive_more::Display;
use thiserror::Error as ThisError;

///
/// SubmissionState
///
/// Lifecycle of one submitted put-job request:
///
/// ```text
/// Received → StructurallyValidated → MappingValidated → Acknowledged
///     ↓                ↓                    ↓
///  Rejected         Rejected         Rejected | TimedOut
/// ```
///
/// Any non-terminal state may time out.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum SubmissionState {
    #[default]
    #[display("received")]
    Received,
    #[display("structurally_validated")]
    StructurallyValidated,
    #[display("mapping_validated")]
    MappingValidated,
    #[display("rejected")]
    Rejected,
    #[display("acknowledged")]
    Acknowledged,
    #[display("timed_out")]
    TimedOut,
}

impl SubmissionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Acknowledged | Self::TimedOut)
    }

    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Received, Self::StructurallyValidated)
            | (Self::StructurallyValidated, Self::MappingValidated)
            | (Self::MappingValidated, Self::Acknowledged) => true,
            (from, Self::Rejected | Self::TimedOut) => !from.is_terminal(),
            _ => false,
        }
    }

    /// Move to `next`, refusing transitions the lifecycle does not allow.
    pub const fn transition(self, next: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError { from: self, to: next })
        }
    }
}

///
/// TransitionError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("illegal submission transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: SubmissionState,
    pub to: SubmissionState,
}
