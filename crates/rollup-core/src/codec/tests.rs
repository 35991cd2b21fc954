use crate::{
    codec::{
        CodecError, CodecErrorKind, JobConfigWire, WireVersion, decode, encode, parse_document,
        to_bytes, to_document, to_document_value,
    },
    test_support::{arb_job_config, example_config},
};
use proptest::prelude::*;
use rollup_schema::{error::StructuralError, prelude::*};
use serde_cbor::Value as CborValue;
use std::collections::BTreeMap;

// Decode a valid payload into a raw CBOR map so tests can tamper with it.
fn encoded_map(config: &JobConfig) -> BTreeMap<CborValue, CborValue> {
    let bytes = encode(config).expect("config encodes");
    match serde_cbor::from_slice(&bytes).expect("payload is CBOR") {
        CborValue::Map(map) => map,
        other => panic!("expected a CBOR map, got {other:?}"),
    }
}

fn key(name: &str) -> CborValue {
    CborValue::Text(name.to_string())
}

fn reencode(map: BTreeMap<CborValue, CborValue>) -> Vec<u8> {
    to_bytes(&CborValue::Map(map)).expect("map serializes")
}

fn as_map<'a>(value: Option<&'a mut CborValue>) -> &'a mut BTreeMap<CborValue, CborValue> {
    match value {
        Some(CborValue::Map(map)) => map,
        other => panic!("expected a nested CBOR map, got {other:?}"),
    }
}

fn date_histogram_of(
    map: &mut BTreeMap<CborValue, CborValue>,
) -> &mut BTreeMap<CborValue, CborValue> {
    let groups = as_map(map.get_mut(&key("groups")));

    as_map(groups.get_mut(&key("date_histogram")))
}

fn first_metric_of(
    map: &mut BTreeMap<CborValue, CborValue>,
) -> &mut BTreeMap<CborValue, CborValue> {
    match map.get_mut(&key("metrics")) {
        Some(CborValue::Array(metrics)) => as_map(metrics.first_mut()),
        other => panic!("expected a metrics array, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn binary_round_trip(config in arb_job_config()) {
        let bytes = encode(&config).expect("config encodes");
        let decoded = decode(&bytes).expect("payload decodes");

        prop_assert_eq!(decoded, config);
    }

    #[test]
    fn document_round_trip(config in arb_job_config()) {
        let body = to_document(&config).expect("config renders");
        let parsed = parse_document(&body, None).expect("body parses");

        prop_assert_eq!(parsed, config);
    }
}

#[test]
fn every_truncation_fails_to_decode() {
    let bytes = encode(&example_config()).expect("config encodes");

    for len in 0..bytes.len() {
        let err = decode(&bytes[..len]).expect_err("truncated payload must fail");
        assert_eq!(err.kind(), CodecErrorKind::Decode, "len {len}: {err:?}");
    }
}

#[test]
fn trailing_bytes_fail_to_decode() {
    let mut bytes = encode(&example_config()).expect("config encodes");
    bytes.extend_from_slice(&[0x00, 0x01]);

    let err = decode(&bytes).expect_err("trailing data must fail");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn unknown_version_is_rejected() {
    let mut map = encoded_map(&example_config());
    map.insert(key("version"), CborValue::Integer(9));

    let err = decode(&reencode(map)).expect_err("version 9 is unknown");

    assert_eq!(err, CodecError::UnsupportedVersion { version: 9 });
}

#[test]
fn current_version_is_written() {
    let map = encoded_map(&example_config());

    assert_eq!(
        map.get(&key("version")),
        Some(&CborValue::Integer(i128::from(WireVersion::CURRENT.encode())))
    );
}

#[test]
fn type_mismatch_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    map.insert(key("page_size"), CborValue::Text("lots".to_string()));

    let err = decode(&reencode(map)).expect_err("page_size must be an integer");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn missing_member_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    map.remove(&key("schedule"));

    let err = decode(&reencode(map)).expect_err("schedule is required");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
    assert!(err.to_string().contains("schedule"), "unexpected error: {err}");
}

#[test]
fn unknown_member_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    map.insert(key("owner"), CborValue::Text("ops".to_string()));

    let err = decode(&reencode(map)).expect_err("binary form is strict");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn unknown_nested_group_member_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    date_histogram_of(&mut map).insert(key("calendar"), CborValue::Bool(true));

    let err = decode(&reencode(map)).expect_err("nested members are strict too");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn missing_time_zone_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    date_histogram_of(&mut map).remove(&key("time_zone"));

    let err = decode(&reencode(map)).expect_err("time_zone has no binary default");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
    assert!(err.to_string().contains("time_zone"), "unexpected error: {err}");
}

#[test]
fn missing_delay_key_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    date_histogram_of(&mut map).remove(&key("delay"));

    let err = decode(&reencode(map)).expect_err("absent delay is written as null");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn unknown_metric_member_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    first_metric_of(&mut map).insert(key("format"), CborValue::Text("0.00".to_string()));

    let err = decode(&reencode(map)).expect_err("metric entries are strict");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn metric_alias_is_not_accepted_in_binary() {
    let mut map = encoded_map(&example_config());
    let metric = first_metric_of(&mut map);
    let kinds = metric.remove(&key("metrics")).expect("metrics present");
    metric.insert(key("aggs"), kinds);

    let err = decode(&reencode(map)).expect_err("only the canonical key is written");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn missing_groups_key_fails_to_decode() {
    let mut map = encoded_map(&example_config());
    map.remove(&key("groups"));

    let err = decode(&reencode(map)).expect_err("groups key is required");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
    assert!(err.to_string().contains("groups"), "unexpected error: {err}");
}

#[test]
fn absent_groups_are_written_as_null() {
    let config = example_config()
        .to_builder()
        .maybe_groups(None)
        .build()
        .expect("metrics alone are enough");

    let map = encoded_map(&config);

    assert_eq!(map.get(&key("groups")), Some(&CborValue::Null));
    assert_eq!(decode(&reencode(map)).expect("null groups decode"), config);
}

#[test]
fn empty_job_is_structural_on_decode() {
    let wire = JobConfigWire {
        groups: None,
        metrics: Vec::new(),
        ..JobConfigWire::from_config(WireVersion::CURRENT, &example_config())
    };
    let bytes = to_bytes(&wire).expect("wire serializes");

    let err = decode(&bytes).expect_err("no groups or metrics");

    assert_eq!(err, CodecError::Structural(StructuralError::NoGroupsOrMetrics));
}

#[test]
fn oversized_payload_is_rejected() {
    let bytes = vec![0u8; crate::MAX_JOB_CONFIG_BYTES + 1];

    let err = decode(&bytes).expect_err("payload exceeds the limit");

    assert_eq!(err.kind(), CodecErrorKind::TooLarge);
    assert!(err.to_string().contains("size limit"), "unexpected error: {err}");
}

#[test]
fn oversized_document_is_rejected() {
    let body = vec![b' '; crate::MAX_JOB_CONFIG_BYTES + 1];

    let err = parse_document(&body, None).expect_err("body exceeds the limit");

    assert_eq!(err.kind(), CodecErrorKind::TooLarge);
}

#[test]
fn error_kind_labels_are_stable() {
    let labels = [
        (CodecErrorKind::Encode, "encode"),
        (CodecErrorKind::Decode, "decode"),
        (CodecErrorKind::TooLarge, "too_large"),
        (CodecErrorKind::UnsupportedVersion, "unsupported_version"),
        (CodecErrorKind::Structural, "structural"),
    ];

    for (kind, label) in labels {
        assert_eq!(kind.as_str(), label);
        assert_eq!(kind.to_string(), label);
    }
}

#[test]
fn document_parses_example_body() {
    let body = br#"{
        "id": "job1",
        "index_pattern": "logs-*",
        "rollup_index": "logs_rollup",
        "cron": "*/30 * * * * ?",
        "page_size": 1000,
        "groups": {"date_histogram": {"field": "ts", "interval": "1h"}},
        "metrics": [{"field": "latency", "aggs": ["avg", "max"]}]
    }"#;

    let config = parse_document(body, None).expect("body parses");

    assert_eq!(config, example_config());
}

#[test]
fn document_ignores_unknown_members() {
    let mut value = to_document_value(&example_config()).expect("config renders");
    value["owner"] = serde_json::json!("ops");
    value["groups"]["date_histogram"]["calendar"] = serde_json::json!(true);
    let body = serde_json::to_vec(&value).expect("value serializes");

    let config = parse_document(&body, None).expect("unknown members are tolerated");

    assert_eq!(config, example_config());
}

#[test]
fn document_takes_id_from_path() {
    let mut value = to_document_value(&example_config()).expect("config renders");
    value
        .as_object_mut()
        .expect("document is an object")
        .remove("id");
    let body = serde_json::to_vec(&value).expect("value serializes");

    let config = parse_document(&body, Some("job1")).expect("path id fills in");

    assert_eq!(config.id(), "job1");
}

#[test]
fn document_rejects_mismatched_id() {
    let body = to_document(&example_config()).expect("config renders");

    let err = parse_document(&body, Some("job2")).expect_err("ids disagree");

    assert_eq!(
        err,
        CodecError::Structural(StructuralError::IdMismatch {
            path_id: "job2".to_string(),
            body_id: "job1".to_string(),
        })
    );
}

#[test]
fn document_reports_missing_member_by_name() {
    let body = br#"{"id": "job1", "index_pattern": "logs-*", "rollup_index": "r"}"#;

    let err = parse_document(body, None).expect_err("schedule is missing");

    assert_eq!(err, CodecError::Structural(StructuralError::MissingField("schedule")));
}

#[test]
fn document_rejects_malformed_json() {
    let err = parse_document(b"{\"id\": ", None).expect_err("truncated body");

    assert_eq!(err.kind(), CodecErrorKind::Decode);
}

#[test]
fn document_uses_canonical_member_names() {
    let value = to_document_value(&example_config()).expect("config renders");

    assert_eq!(value["schedule"], "*/30 * * * * ?");
    assert_eq!(value["timeout"], "20s");
    assert_eq!(value["groups"]["date_histogram"]["interval"], "1h");
    assert_eq!(value["groups"]["date_histogram"]["time_zone"], "UTC");
    assert_eq!(value["metrics"][0]["metrics"], serde_json::json!(["avg", "max"]));
}
