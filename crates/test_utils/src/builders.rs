//! Test Data Builders
//!
//! Provides builder patterns for constructing records with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, Money};
use domain_claims::{Agent, Claim, ClaimHandler, ClaimStatus, Disaster};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parses a `YYYY-MM-DD` literal, panicking on bad test input
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Builder for agents
pub struct AgentBuilder {
    agent: Agent,
}

impl AgentBuilder {
    /// Creates an English-speaking Texas agent with the given id
    pub fn new(id: i64) -> Self {
        Self {
            agent: Agent {
                id: AgentId::new(id),
                first_name: format!("Agent{}", id),
                last_name: "Tester".to_string(),
                state: "Texas".to_string(),
                region: None,
                primary_language: "English".to_string(),
                secondary_language: None,
                years_active: 1,
            },
        }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.agent.state = state.into();
        self
    }

    pub fn primary_language(mut self, language: impl Into<String>) -> Self {
        self.agent.primary_language = language.into();
        self
    }

    pub fn secondary_language(mut self, language: impl Into<String>) -> Self {
        self.agent.secondary_language = Some(language.into());
        self
    }

    pub fn years_active(mut self, years: u32) -> Self {
        self.agent.years_active = years;
        self
    }

    pub fn build(self) -> Agent {
        self.agent
    }
}

/// Builds a claim handler
pub fn claim_handler(id: i64) -> ClaimHandler {
    ClaimHandler {
        id: ClaimHandlerId::new(id),
        first_name: format!("Handler{}", id),
        last_name: "Tester".to_string(),
    }
}

/// Builder for claims
pub struct ClaimBuilder {
    claim: Claim,
}

impl ClaimBuilder {
    /// Creates an open severity-5 claim costing 100.00, linked to id 1 everywhere
    pub fn new(id: i64) -> Self {
        Self {
            claim: Claim {
                id: ClaimId::new(id),
                disaster_id: DisasterId::new(1),
                status: ClaimStatus::Open,
                total_loss: false,
                loss_of_life: false,
                claim_type: "Fire".to_string(),
                severity_rating: 5,
                estimate_cost: Money::new(dec!(100.00)),
                agent_assigned_id: AgentId::new(1),
                claim_handler_assigned_id: ClaimHandlerId::new(1),
            },
        }
    }

    pub fn disaster(mut self, id: i64) -> Self {
        self.claim.disaster_id = DisasterId::new(id);
        self
    }

    pub fn agent(mut self, id: i64) -> Self {
        self.claim.agent_assigned_id = AgentId::new(id);
        self
    }

    pub fn handler(mut self, id: i64) -> Self {
        self.claim.claim_handler_assigned_id = ClaimHandlerId::new(id);
        self
    }

    pub fn cost(mut self, cost: Decimal) -> Self {
        self.claim.estimate_cost = Money::new(cost);
        self
    }

    pub fn severity(mut self, severity: i32) -> Self {
        self.claim.severity_rating = severity;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.claim.status = ClaimStatus::from(status.to_string());
        self
    }

    pub fn closed(self) -> Self {
        self.status("Closed")
    }

    pub fn build(self) -> Claim {
        self.claim
    }
}

/// Builder for disasters
pub struct DisasterBuilder {
    disaster: Disaster,
}

impl DisasterBuilder {
    /// Creates a Texas disaster of radius 10 declared on its end date
    pub fn new(id: i64) -> Self {
        let day = date("2023-01-15");
        Self {
            disaster: Disaster {
                id: DisasterId::new(id),
                disaster_type: "Flood".to_string(),
                state: "Texas".to_string(),
                name: format!("Disaster {}", id),
                description: String::new(),
                start_date: day,
                end_date: day,
                declared_date: day,
                lat: None,
                lng: None,
                radius_miles: dec!(10),
            },
        }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.disaster.state = state.into();
        self
    }

    /// Sets start and end dates
    pub fn period(mut self, start: &str, end: &str) -> Self {
        self.disaster.start_date = date(start);
        self.disaster.end_date = date(end);
        self
    }

    pub fn declared(mut self, declared: &str) -> Self {
        self.disaster.declared_date = date(declared);
        self
    }

    pub fn radius(mut self, radius: Decimal) -> Self {
        self.disaster.radius_miles = radius;
        self
    }

    pub fn build(self) -> Disaster {
        self.disaster
    }
}
