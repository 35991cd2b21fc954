mod group;
mod job;
mod metric;

pub use group::{DateHistogramGroup, GroupConfig, HistogramGroup, TermsGroup};
pub use job::{JobConfig, JobConfigBuilder};
pub use metric::MetricConfig;

use crate::{snapshot::FieldCapability, types::FieldType};
use std::collections::BTreeMap;

// render declared types as `[date, keyword]` for error messages
pub(crate) fn type_list(types: &BTreeMap<FieldType, FieldCapability>) -> String {
    let names: Vec<&str> = types.keys().map(FieldType::as_str).collect();

    format!("[{}]", names.join(", "))
}

pub(crate) fn all_aggregatable(types: &BTreeMap<FieldType, FieldCapability>) -> bool {
    types.values().all(|cap| cap.aggregatable)
}

pub(crate) fn not_found_message(expected: &str, field: &str) -> String {
    format!(
        "could not find a {expected} field with name [{field}] in any of the indices matching the index pattern"
    )
}

pub(crate) fn not_aggregatable_message(field: &str) -> String {
    format!("the field [{field}] must be aggregatable across all indices, but is not")
}
