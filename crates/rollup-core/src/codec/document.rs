use crate::codec::{CodecError, cbor::check_size};
use rollup_schema::{
    error::StructuralError,
    node::{GroupConfig, JobConfig, MetricConfig},
    types::TimeValue,
};
use serde::Deserialize;

///
/// JobConfigDocument
///
/// Lenient request-body shape. Every member is optional at the parser
/// level so that absence is reported by the builder with the member's
/// name; unknown members are ignored.
///

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JobConfigDocument {
    id: Option<String>,
    index_pattern: Option<String>,
    rollup_index: Option<String>,
    groups: Option<GroupConfig>,
    metrics: Vec<MetricConfig>,
    #[serde(alias = "cron")]
    schedule: Option<String>,
    page_size: Option<u32>,
    timeout: Option<TimeValue>,
}

/// Parse a JSON job body.
///
/// `path_id` is the identifier supplied out of band (for example in the
/// request path). It fills in a missing body `id`; when both are present
/// they must agree.
pub fn parse_document(bytes: &[u8], path_id: Option<&str>) -> Result<JobConfig, CodecError> {
    check_size(bytes.len())?;

    let doc: JobConfigDocument = serde_json::from_slice(bytes).map_err(CodecError::decode)?;
    let id = reconcile_id(path_id, doc.id)?;

    let mut builder = JobConfig::builder()
        .maybe_groups(doc.groups)
        .metrics(doc.metrics)
        .maybe_timeout(doc.timeout);

    if let Some(id) = id {
        builder = builder.id(id);
    }
    if let Some(index_pattern) = doc.index_pattern {
        builder = builder.index_pattern(index_pattern);
    }
    if let Some(rollup_index) = doc.rollup_index {
        builder = builder.rollup_index(rollup_index);
    }
    if let Some(schedule) = doc.schedule {
        builder = builder.schedule(schedule);
    }
    if let Some(page_size) = doc.page_size {
        builder = builder.page_size(page_size);
    }

    Ok(builder.build()?)
}

fn reconcile_id(
    path_id: Option<&str>,
    body_id: Option<String>,
) -> Result<Option<String>, StructuralError> {
    match (path_id, body_id) {
        (Some(path_id), Some(body_id)) if path_id != body_id => Err(StructuralError::IdMismatch {
            path_id: path_id.to_string(),
            body_id,
        }),
        (_, Some(body_id)) => Ok(Some(body_id)),
        (Some(path_id), None) => Ok(Some(path_id.to_string())),
        (None, None) => Ok(None),
    }
}

/// Render a job config as a JSON body.
pub fn to_document(config: &JobConfig) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(config).map_err(CodecError::encode)
}

/// Render a job config as a JSON value, for embedding in larger bodies.
pub fn to_document_value(config: &JobConfig) -> Result<serde_json::Value, CodecError> {
    serde_json::to_value(config).map_err(CodecError::encode)
}
