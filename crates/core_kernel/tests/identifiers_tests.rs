//! Unit tests for the Identifiers module

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, CoreError, DisasterId};
use std::collections::BTreeMap;

#[test]
fn test_prefixes() {
    assert_eq!(AgentId::prefix(), "AGT");
    assert_eq!(ClaimHandlerId::prefix(), "CH");
    assert_eq!(ClaimId::prefix(), "CLM");
    assert_eq!(DisasterId::prefix(), "DIS");
}

#[test]
fn test_display_then_parse_returns_same_id() {
    let original = ClaimHandlerId::new(93);
    let parsed: ClaimHandlerId = original.to_string().parse().unwrap();
    assert_eq!(original, parsed);
}

#[test]
fn test_parse_error_is_validation() {
    let err = "abc".parse::<AgentId>().unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn test_ids_order_numerically() {
    let mut ids = vec![AgentId::new(10), AgentId::new(2), AgentId::new(-1)];
    ids.sort();
    assert_eq!(ids, vec![AgentId::new(-1), AgentId::new(2), AgentId::new(10)]);
}

#[test]
fn test_ids_serialize_as_json_map_keys() {
    let mut map = BTreeMap::new();
    map.insert(AgentId::new(3), 1);
    map.insert(AgentId::new(1), 2);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"1":2,"3":1}"#);
}

#[test]
fn test_i64_conversion() {
    let id = DisasterId::from(101);
    let raw: i64 = id.into();
    assert_eq!(raw, 101);
    assert_eq!(id.value(), 101);
}
