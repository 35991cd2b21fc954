use crate::{
    MAX_JOB_ID_LEN,
    error::StructuralError,
    node::{GroupConfig, JobConfig, MetricConfig},
    validate::pattern,
};
use std::collections::BTreeSet;

/// Check the config's own shape. Never consults index metadata.
pub(crate) fn validate_job(config: &JobConfig) -> Result<(), StructuralError> {
    let mut errs = Vec::new();

    validate_id(config.id(), &mut errs);
    validate_indices(config.index_pattern(), config.rollup_index(), &mut errs);

    if config.schedule().trim().is_empty() {
        errs.push("schedule must be a non-empty cron expression".to_string());
    }
    if config.page_size() == 0 {
        errs.push("page size must be greater than zero".to_string());
    }
    if config.groups().is_none() && config.metrics().is_empty() {
        errs.push(StructuralError::NoGroupsOrMetrics.to_string());
    }

    if let Some(groups) = config.groups() {
        validate_groups(groups, &mut errs);
    }
    for metric in config.metrics() {
        validate_metric(metric, &mut errs);
    }

    if errs.is_empty() {
        Ok(())
    } else {
        Err(StructuralError::Invalid(errs))
    }
}

fn validate_id(id: &str, errs: &mut Vec<String>) {
    if id.trim().is_empty() {
        errs.push("id must be a non-empty string".to_string());
    } else if id.len() > MAX_JOB_ID_LEN {
        errs.push(format!("id exceeds max length {MAX_JOB_ID_LEN}"));
    }
}

fn validate_indices(index_pattern: &str, rollup_index: &str, errs: &mut Vec<String>) {
    let pattern_empty = index_pattern.trim().is_empty();
    let rollup_empty = rollup_index.trim().is_empty();
    let match_all = pattern::matches_everything(index_pattern);

    if pattern_empty {
        errs.push("index pattern must be a non-empty string".to_string());
    } else if match_all {
        errs.push(
            "index pattern must not match all indices, as it would match its own rollup index"
                .to_string(),
        );
    }

    if rollup_empty {
        errs.push("rollup index must be a non-empty string".to_string());
    } else if rollup_index.contains('*') {
        errs.push(format!(
            "rollup index [{rollup_index}] must not contain wildcards"
        ));
    }

    if !pattern_empty && !match_all && !rollup_empty && pattern::matches(index_pattern, rollup_index)
    {
        errs.push(format!(
            "index pattern [{index_pattern}] would match the rollup index [{rollup_index}]"
        ));
    }
}

fn validate_groups(groups: &GroupConfig, errs: &mut Vec<String>) {
    if groups.fields().any(|f| f.trim().is_empty()) {
        errs.push("group fields must be non-empty strings".to_string());
    }
    if groups.date_histogram.interval.is_zero() {
        errs.push("date_histogram interval must be greater than zero".to_string());
    }
    if groups.date_histogram.time_zone.trim().is_empty() {
        errs.push("date_histogram time zone must be a non-empty string".to_string());
    }

    if let Some(histogram) = &groups.histogram {
        if histogram.fields.is_empty() {
            errs.push("histogram group must list at least one field".to_string());
        }
        if histogram.interval == 0 {
            errs.push("histogram interval must be greater than zero".to_string());
        }
    }

    if let Some(terms) = &groups.terms
        && terms.fields.is_empty()
    {
        errs.push("terms group must list at least one field".to_string());
    }
}

fn validate_metric(metric: &MetricConfig, errs: &mut Vec<String>) {
    let field = &metric.field;

    if field.trim().is_empty() {
        errs.push("metric field must be a non-empty string".to_string());
        return;
    }
    if metric.metrics.is_empty() {
        errs.push(format!(
            "metric [{field}] must specify at least one aggregation"
        ));
    }

    let mut seen = BTreeSet::new();
    for kind in &metric.metrics {
        if !seen.insert(kind) {
            errs.push(format!(
                "metric [{field}] lists aggregation [{kind}] more than once"
            ));
        }
    }
}
