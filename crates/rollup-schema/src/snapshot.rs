use crate::types::FieldType;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// FieldCapability
///
/// Capability flags for one (field, declared type) pair, merged across
/// every index the discovery query touched.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct FieldCapability {
    pub searchable: bool,
    pub aggregatable: bool,
}

impl FieldCapability {
    /// Searchable and aggregatable.
    #[must_use]
    pub const fn aggregatable() -> Self {
        Self {
            searchable: true,
            aggregatable: true,
        }
    }

    /// Searchable only.
    #[must_use]
    pub const fn searchable() -> Self {
        Self {
            searchable: true,
            aggregatable: false,
        }
    }
}

///
/// FieldCapsSnapshot
///
/// Field name → declared type → capability, as returned by an external
/// field-capabilities query. Read-only from the validator's point of view.
///
/// The serde shape matches a field-caps response body:
/// `{"fields": {"ts": {"date": {"searchable": true, "aggregatable": true}}}}`.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldCapsSnapshot {
    #[serde(default)]
    fields: BTreeMap<String, BTreeMap<FieldType, FieldCapability>>,
}

impl FieldCapsSnapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert used by callers assembling a snapshot by hand.
    #[must_use]
    pub fn with_field(
        mut self,
        field: impl Into<String>,
        ty: impl Into<FieldType>,
        capability: FieldCapability,
    ) -> Self {
        self.insert(field, ty, capability);
        self
    }

    pub fn insert(
        &mut self,
        field: impl Into<String>,
        ty: impl Into<FieldType>,
        capability: FieldCapability,
    ) {
        self.fields
            .entry(field.into())
            .or_default()
            .insert(ty.into(), capability);
    }

    /// Declared types for `field`, or `None` when the field was not found
    /// or was found with no types at all.
    #[must_use]
    pub fn types_of(&self, field: &str) -> Option<&BTreeMap<FieldType, FieldCapability>> {
        self.fields.get(field).filter(|types| !types.is_empty())
    }
}

impl From<BTreeMap<String, BTreeMap<FieldType, FieldCapability>>> for FieldCapsSnapshot {
    fn from(fields: BTreeMap<String, BTreeMap<FieldType, FieldCapability>>) -> Self {
        Self { fields }
    }
}
