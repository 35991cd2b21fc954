use crate::codec::{CodecError, WireVersion};
use rollup_schema::{
    node::{
        DateHistogramGroup, GroupConfig, HistogramGroup, JobConfig, MetricConfig, TermsGroup,
    },
    types::{MetricKind, TimeValue},
};
use serde::{Deserialize, Deserializer, Serialize};

// Every key is required: an absent optional member must be written as null.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

///
/// JobConfigWire
///
/// Binary payload for one job config. Unknown members are rejected as
/// corruption at every nesting level, and no member falls back to a
/// default; the binary form only changes through a new [`WireVersion`].
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct JobConfigWire {
    pub(crate) version: u8,
    pub(crate) id: String,
    pub(crate) index_pattern: String,
    pub(crate) rollup_index: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) groups: Option<GroupConfigWire>,
    pub(crate) metrics: Vec<MetricConfigWire>,
    pub(crate) schedule: String,
    pub(crate) page_size: u32,
    pub(crate) timeout: TimeValue,
}

impl JobConfigWire {
    pub(crate) fn from_config(version: WireVersion, config: &JobConfig) -> Self {
        Self {
            version: version.encode(),
            id: config.id().to_string(),
            index_pattern: config.index_pattern().to_string(),
            rollup_index: config.rollup_index().to_string(),
            groups: config.groups().map(GroupConfigWire::from),
            metrics: config.metrics().iter().map(MetricConfigWire::from).collect(),
            schedule: config.schedule().to_string(),
            page_size: config.page_size(),
            timeout: config.timeout(),
        }
    }

    pub(crate) fn into_config(self) -> Result<JobConfig, CodecError> {
        // Decode the version first so compatibility behavior remains centralized.
        // V1 is the only version; later versions map their members here.
        WireVersion::decode(self.version)
            .ok_or_else(|| CodecError::unsupported_version(self.version))?;

        let config = JobConfig::builder()
            .id(self.id)
            .index_pattern(self.index_pattern)
            .rollup_index(self.rollup_index)
            .maybe_groups(self.groups.map(GroupConfig::from))
            .metrics(self.metrics.into_iter().map(MetricConfig::from))
            .schedule(self.schedule)
            .page_size(self.page_size)
            .timeout(self.timeout)
            .build()?;

        Ok(config)
    }
}

///
/// GroupConfigWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GroupConfigWire {
    date_histogram: DateHistogramWire,
    #[serde(deserialize_with = "nullable")]
    histogram: Option<HistogramWire>,
    #[serde(deserialize_with = "nullable")]
    terms: Option<TermsWire>,
}

impl From<&GroupConfig> for GroupConfigWire {
    fn from(group: &GroupConfig) -> Self {
        let date = &group.date_histogram;

        Self {
            date_histogram: DateHistogramWire {
                field: date.field.clone(),
                interval: date.interval,
                delay: date.delay,
                time_zone: date.time_zone.clone(),
            },
            histogram: group.histogram.as_ref().map(|h| HistogramWire {
                fields: h.fields.clone(),
                interval: h.interval,
            }),
            terms: group.terms.as_ref().map(|t| TermsWire {
                fields: t.fields.clone(),
            }),
        }
    }
}

impl From<GroupConfigWire> for GroupConfig {
    fn from(wire: GroupConfigWire) -> Self {
        let date = wire.date_histogram;
        let mut date_histogram =
            DateHistogramGroup::new(date.field, date.interval).with_time_zone(date.time_zone);
        date_histogram.delay = date.delay;

        Self {
            date_histogram,
            histogram: wire
                .histogram
                .map(|h| HistogramGroup::new(h.fields, h.interval)),
            terms: wire.terms.map(|t| TermsGroup::new(t.fields)),
        }
    }
}

///
/// DateHistogramWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
struct DateHistogramWire {
    field: String,
    interval: TimeValue,
    #[serde(deserialize_with = "nullable")]
    delay: Option<TimeValue>,
    time_zone: String,
}

///
/// HistogramWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
struct HistogramWire {
    fields: Vec<String>,
    interval: u64,
}

///
/// TermsWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
struct TermsWire {
    fields: Vec<String>,
}

///
/// MetricConfigWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MetricConfigWire {
    field: String,
    metrics: Vec<MetricKind>,
}

impl From<&MetricConfig> for MetricConfigWire {
    fn from(metric: &MetricConfig) -> Self {
        Self {
            field: metric.field.clone(),
            metrics: metric.metrics.clone(),
        }
    }
}

impl From<MetricConfigWire> for MetricConfig {
    fn from(wire: MetricConfigWire) -> Self {
        Self::new(wire.field, wire.metrics)
    }
}
