//! Record parsing and dataset tests for domain_claims

use rust_decimal_macros::dec;

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, MonthYear};
use domain_claims::{Agent, Claim, ClaimHandler, ClaimStatus, Dataset, Disaster, Record, Region};

const AGENT_JSON: &str = r#"{
    "id": 24,
    "first_name": "Maria",
    "last_name": "Lopez",
    "state": "Texas",
    "region": "South",
    "primary_language": "Spanish",
    "secondary_language": "English",
    "years_active": 7
}"#;

const CLAIM_JSON: &str = r#"{
    "id": 501,
    "disaster_id": 12,
    "status": "Received",
    "total_loss": true,
    "loss_of_life": false,
    "type": "Flood",
    "severity_rating": 6,
    "estimate_cost": 10250.455,
    "agent_assigned_id": 24,
    "claim_handler_assigned_id": 3
}"#;

const DISASTER_JSON: &str = r#"{
    "id": 12,
    "type": "Hurricane",
    "state": "Florida",
    "name": "Coastal Surge",
    "description": "Storm surge along the gulf coast",
    "start_date": "2023-08-28",
    "end_date": "2023-09-02",
    "declared_date": "2023-09-05",
    "lat": 27.99,
    "long": -82.46,
    "radius_miles": 35
}"#;

// ============================================================================
// Record parsing
// ============================================================================

mod parsing {
    use super::*;

    #[test]
    fn test_agent_from_source_row() {
        let agent: Agent = serde_json::from_str(AGENT_JSON).unwrap();
        assert_eq!(agent.id, AgentId::new(24));
        assert_eq!(agent.full_name(), "Maria Lopez");
        assert_eq!(agent.non_english_languages().collect::<Vec<_>>(), vec!["Spanish"]);
        assert!(agent.check().is_ok());
    }

    #[test]
    fn test_agent_optional_fields_may_be_missing() {
        let agent: Agent = serde_json::from_str(
            r#"{"id": 1, "first_name": "A", "last_name": "B", "state": "Ohio",
                "primary_language": "English", "years_active": 0}"#,
        )
        .unwrap();
        assert!(agent.region.is_none());
        assert!(agent.secondary_language.is_none());
    }

    #[test]
    fn test_claim_type_field_is_renamed() {
        let claim: Claim = serde_json::from_str(CLAIM_JSON).unwrap();
        assert_eq!(claim.id, ClaimId::new(501));
        assert_eq!(claim.claim_type, "Flood");
        assert_eq!(claim.status, ClaimStatus::Received);
        assert_eq!(claim.estimate_cost.amount(), dec!(10250.455));
        assert_eq!(claim.claim_handler_assigned_id, ClaimHandlerId::new(3));
        assert!(claim.is_open());

        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["type"], "Flood");
    }

    #[test]
    fn test_negative_cost_fails_check() {
        let mut claim: Claim = serde_json::from_str(CLAIM_JSON).unwrap();
        claim.estimate_cost = dec!(-1).into();
        let err = claim.check().unwrap_err();
        assert!(err.to_string().contains("501"));
    }

    #[test]
    fn test_disaster_from_source_row() {
        let disaster: Disaster = serde_json::from_str(DISASTER_JSON).unwrap();
        assert_eq!(disaster.id, DisasterId::new(12));
        assert_eq!(disaster.disaster_type, "Hurricane");
        assert_eq!(disaster.lng, Some(-82.46));
        assert!(disaster.declared_after_end());
        assert_eq!(disaster.declared_month(), MonthYear::new(2023, 9).unwrap());
        assert!(disaster.check().is_ok());
    }

    #[test]
    fn test_zero_radius_fails_check() {
        let mut disaster: Disaster = serde_json::from_str(DISASTER_JSON).unwrap();
        disaster.radius_miles = dec!(0);
        assert!(disaster.check().is_err());
    }

    #[test]
    fn test_blank_handler_name_fails_check() {
        let handler: ClaimHandler =
            serde_json::from_str(r#"{"id": 3, "first_name": "", "last_name": "Ng"}"#).unwrap();
        assert!(handler.check().is_err());
    }
}

// ============================================================================
// Dataset
// ============================================================================

mod dataset {
    use super::*;

    fn handler(id: i64, first_name: &str) -> ClaimHandler {
        ClaimHandler {
            id: ClaimHandlerId::new(id),
            first_name: first_name.to_string(),
            last_name: "Ng".to_string(),
        }
    }

    #[test]
    fn test_records_sorted_and_deduplicated() {
        let dataset = Dataset::new(
            vec![],
            vec![handler(3, "Third"), handler(1, "First"), handler(3, "Duplicate")],
            vec![],
            vec![],
        );
        let names: Vec<_> = dataset
            .claim_handlers()
            .iter()
            .map(|h| h.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Third"]);
    }

    #[test]
    fn test_lookups() {
        let agent: Agent = serde_json::from_str(AGENT_JSON).unwrap();
        let disaster: Disaster = serde_json::from_str(DISASTER_JSON).unwrap();
        let dataset = Dataset::new(vec![agent], vec![], vec![], vec![disaster]);

        assert!(dataset.contains_agent(AgentId::new(24)));
        assert!(!dataset.contains_agent(AgentId::new(25)));
        assert_eq!(dataset.disaster(DisasterId::new(12)).map(|d| d.state.as_str()), Some("Florida"));
        assert_eq!(dataset.region_of("Florida"), Some(Region::South));
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_missing_region_is_derived_from_state() {
        let mut derived: Agent = serde_json::from_str(AGENT_JSON).unwrap();
        derived.id = AgentId::new(25);
        derived.region = None;
        let given: Agent = serde_json::from_str(AGENT_JSON).unwrap();

        let dataset = Dataset::new(vec![derived, given], vec![], vec![], vec![]);
        assert_eq!(dataset.agent(AgentId::new(24)).and_then(|a| a.region.as_deref()), Some("South"));
        assert_eq!(dataset.agent(AgentId::new(25)).and_then(|a| a.region.as_deref()), Some("south"));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert!(dataset.agent(AgentId::new(1)).is_none());
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dataset_ids_are_sorted_and_unique(ids in prop::collection::vec(-5i64..50i64, 0..40)) {
            let handlers = ids
                .iter()
                .map(|&id| ClaimHandler {
                    id: ClaimHandlerId::new(id),
                    first_name: "H".to_string(),
                    last_name: "N".to_string(),
                })
                .collect();
            let dataset = Dataset::new(vec![], handlers, vec![], vec![]);
            let kept: Vec<i64> = dataset.claim_handlers().iter().map(|h| h.id.value()).collect();

            let mut expected = ids.clone();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(kept, expected);
        }
    }
}
