//! Job validation: structural checks over the config itself and mapping
//! checks against a field-capabilities snapshot.

pub mod pattern;
pub mod structure;


use crate::{node::JobConfig, snapshot::FieldCapsSnapshot};
use derive_more::IntoIterator;
use std::fmt;

/// Sole error reported when discovery found no fields at all.
pub const NO_FIELDS_FOUND: &str =
    "no fields found in the index pattern matching the job configuration";

///
/// err!
/// Append a formatted message to a [`ValidationReport`].
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// ValidationReport
///
/// Ordered messages accumulated by one validation pass. Empty means the
/// job was accepted.
///

#[derive(Clone, Debug, Default, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Convert into a `Result`, `Ok` only when nothing was reported.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: {}", self.errors.join("; "))
    }
}

impl std::error::Error for ValidationReport {}

///
/// ValidateNode
///
/// Implemented by every config node that references source fields.
/// Implementations append at most one message per referenced field and
/// never stop early.
///

pub trait ValidateNode {
    fn validate_mappings(&self, _snapshot: &FieldCapsSnapshot, _errs: &mut ValidationReport) {}
}

/// Reconcile `config` against the discovered field capabilities.
///
/// Every referenced field is checked even after earlier failures so the
/// caller sees all problems at once.
#[must_use]
pub fn validate_mappings(config: &JobConfig, snapshot: &FieldCapsSnapshot) -> ValidationReport {
    let mut errs = ValidationReport::new();

    if snapshot.is_empty() {
        errs.add(NO_FIELDS_FOUND);
        return errs;
    }

    config.validate_mappings(snapshot, &mut errs);

    errs
}
