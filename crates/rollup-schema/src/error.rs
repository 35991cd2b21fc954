use thiserror::Error as ThisError;

///
/// StructuralError
///
/// Malformed request shape. Raised before any mapping validation and
/// before any external collaborator is consulted.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StructuralError {
    #[error("missing required field [{0}]")]
    MissingField(&'static str),

    #[error("at least one grouping or metric must be configured")]
    NoGroupsOrMetrics,

    #[error("inconsistent id: path id [{path_id}] does not match body id [{body_id}]")]
    IdMismatch { path_id: String, body_id: String },

    #[error("invalid job configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl StructuralError {
    /// Every individual problem carried by this error, in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Invalid(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
