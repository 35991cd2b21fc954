//! Shared fixtures and proptest strategies for crate tests.

use proptest::prelude::*;
use rollup_schema::prelude::*;

pub(crate) fn hour() -> TimeValue {
    TimeValue::new(1, TimeUnit::Hours)
}

/// `job1` over `logs-*`: hourly date histogram on `ts`, avg/max of `latency`.
pub(crate) fn example_config() -> JobConfig {
    JobConfig::builder()
        .id("job1")
        .index_pattern("logs-*")
        .rollup_index("logs_rollup")
        .schedule("*/30 * * * * ?")
        .page_size(1000)
        .groups(GroupConfig::new(DateHistogramGroup::new("ts", hour())))
        .metric(MetricConfig::new("latency", [MetricKind::Avg, MetricKind::Max]))
        .build()
        .expect("example config builds")
}

pub(crate) fn example_snapshot() -> FieldCapsSnapshot {
    FieldCapsSnapshot::new()
        .with_field("ts", "date", FieldCapability::aggregatable())
        .with_field("latency", "double", FieldCapability::aggregatable())
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn arb_time_value() -> impl Strategy<Value = TimeValue> {
    (
        1u64..10_000,
        prop_oneof![
            Just(TimeUnit::Millis),
            Just(TimeUnit::Seconds),
            Just(TimeUnit::Minutes),
            Just(TimeUnit::Hours),
            Just(TimeUnit::Days),
        ],
    )
        .prop_map(|(amount, unit)| TimeValue::new(amount, unit))
}

fn arb_metric_kind() -> impl Strategy<Value = MetricKind> {
    prop_oneof![
        Just(MetricKind::Avg),
        Just(MetricKind::Max),
        Just(MetricKind::Min),
        Just(MetricKind::Sum),
        Just(MetricKind::ValueCount),
    ]
}

fn arb_group_config() -> impl Strategy<Value = GroupConfig> {
    (
        arb_name(),
        arb_time_value(),
        prop::option::of(arb_time_value()),
        prop_oneof![Just("UTC"), Just("Europe/Berlin")],
        prop::option::of((prop::collection::vec(arb_name(), 1..3), 1u64..1_000)),
        prop::option::of(prop::collection::vec(arb_name(), 1..3)),
    )
        .prop_map(|(field, interval, delay, tz, histogram, terms)| {
            let mut date = DateHistogramGroup::new(field, interval).with_time_zone(tz);
            if let Some(delay) = delay {
                date = date.with_delay(delay);
            }

            let mut group = GroupConfig::new(date);
            if let Some((fields, interval)) = histogram {
                group = group.with_histogram(HistogramGroup::new(fields, interval));
            }
            if let Some(fields) = terms {
                group = group.with_terms(TermsGroup::new(fields));
            }

            group
        })
}

fn arb_metric_config() -> impl Strategy<Value = MetricConfig> {
    (arb_name(), prop::collection::vec(arb_metric_kind(), 1..5))
        .prop_map(|(field, kinds)| MetricConfig::new(field, kinds))
}

/// Any config the builder accepts.
pub(crate) fn arb_job_config() -> impl Strategy<Value = JobConfig> {
    (
        arb_name(),
        "[a-z]{1,8}-\\*",
        arb_name(),
        prop::option::of(arb_group_config()),
        prop::collection::vec(arb_metric_config(), 0..4),
        prop_oneof![Just("*/30 * * * * ?"), Just("0 0 * * * ?")],
        1u32..10_000,
        arb_time_value(),
    )
        .prop_filter_map(
            "a job needs groups or metrics",
            |(id, pattern, rollup, groups, metrics, schedule, page_size, timeout)| {
                JobConfig::builder()
                    .id(id)
                    .index_pattern(pattern)
                    .rollup_index(rollup)
                    .maybe_groups(groups)
                    .metrics(metrics)
                    .schedule(schedule)
                    .page_size(page_size)
                    .timeout(timeout)
                    .build()
                    .ok()
            },
        )
}
