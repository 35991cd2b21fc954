use crate::{DEFAULT_JOB_TIMEOUT_SECS, prelude::*, validate::structure};

///
/// JobConfig
///
/// Immutable description of one rollup job. Built through
/// [`JobConfigBuilder`]; equality and hashing are structural over every
/// member.
///
/// Referenced fields are *not* checked against index mappings here: that
/// metadata is external and may change between construction and
/// submission.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct JobConfig {
    id: String,
    index_pattern: String,
    rollup_index: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<GroupConfig>,

    metrics: Vec<MetricConfig>,
    schedule: String,
    page_size: u32,
    timeout: TimeValue,
}

impl JobConfig {
    #[must_use]
    pub fn builder() -> JobConfigBuilder {
        JobConfigBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn index_pattern(&self) -> &str {
        &self.index_pattern
    }

    #[must_use]
    pub fn rollup_index(&self) -> &str {
        &self.rollup_index
    }

    #[must_use]
    pub const fn groups(&self) -> Option<&GroupConfig> {
        self.groups.as_ref()
    }

    #[must_use]
    pub fn metrics(&self) -> &[MetricConfig] {
        &self.metrics
    }

    #[must_use]
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn timeout(&self) -> TimeValue {
        self.timeout
    }

    /// Builder pre-populated with this config, for deriving a variant.
    #[must_use]
    pub fn to_builder(&self) -> JobConfigBuilder {
        JobConfigBuilder {
            id: Some(self.id.clone()),
            index_pattern: Some(self.index_pattern.clone()),
            rollup_index: Some(self.rollup_index.clone()),
            groups: self.groups.clone(),
            metrics: self.metrics.clone(),
            schedule: Some(self.schedule.clone()),
            page_size: Some(self.page_size),
            timeout: Some(self.timeout),
        }
    }

    /// Content checks on the config's own shape (ids, patterns, sizes).
    /// Collects every problem into a single [`StructuralError::Invalid`].
    pub fn validate_structure(&self) -> Result<(), StructuralError> {
        structure::validate_job(self)
    }
}

impl ValidateNode for JobConfig {
    fn validate_mappings(&self, snapshot: &FieldCapsSnapshot, errs: &mut ValidationReport) {
        if let Some(groups) = &self.groups {
            groups.validate_mappings(snapshot, errs);
        }

        for metric in &self.metrics {
            metric.validate_mappings(snapshot, errs);
        }
    }
}

///
/// JobConfigBuilder
///

#[derive(Clone, Debug, Default)]
pub struct JobConfigBuilder {
    id: Option<String>,
    index_pattern: Option<String>,
    rollup_index: Option<String>,
    groups: Option<GroupConfig>,
    metrics: Vec<MetricConfig>,
    schedule: Option<String>,
    page_size: Option<u32>,
    timeout: Option<TimeValue>,
}

impl JobConfigBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn index_pattern(mut self, index_pattern: impl Into<String>) -> Self {
        self.index_pattern = Some(index_pattern.into());
        self
    }

    #[must_use]
    pub fn rollup_index(mut self, rollup_index: impl Into<String>) -> Self {
        self.rollup_index = Some(rollup_index.into());
        self
    }

    #[must_use]
    pub fn groups(mut self, groups: GroupConfig) -> Self {
        self.groups = Some(groups);
        self
    }

    #[must_use]
    pub fn maybe_groups(mut self, groups: Option<GroupConfig>) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub fn metric(mut self, metric: MetricConfig) -> Self {
        self.metrics.push(metric);
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: impl IntoIterator<Item = MetricConfig>) -> Self {
        self.metrics = metrics.into_iter().collect();
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: TimeValue) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn maybe_timeout(mut self, timeout: Option<TimeValue>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Assemble the config. Fails only on missing members; content checks
    /// live in [`JobConfig::validate_structure`].
    pub fn build(self) -> Result<JobConfig, StructuralError> {
        let id = self.id.ok_or(StructuralError::MissingField("id"))?;
        let index_pattern = self
            .index_pattern
            .ok_or(StructuralError::MissingField("index_pattern"))?;
        let rollup_index = self
            .rollup_index
            .ok_or(StructuralError::MissingField("rollup_index"))?;
        let schedule = self
            .schedule
            .ok_or(StructuralError::MissingField("schedule"))?;
        let page_size = self
            .page_size
            .ok_or(StructuralError::MissingField("page_size"))?;

        if self.groups.is_none() && self.metrics.is_empty() {
            return Err(StructuralError::NoGroupsOrMetrics);
        }

        Ok(JobConfig {
            id,
            index_pattern,
            rollup_index,
            groups: self.groups,
            metrics: self.metrics,
            schedule,
            page_size,
            timeout: self
                .timeout
                .unwrap_or(TimeValue::seconds(DEFAULT_JOB_TIMEOUT_SECS)),
        })
    }
}
