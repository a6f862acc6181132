//! Density and time-bucketing queries

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use core_kernel::{round_half_up, DisasterId, Money, MonthYear};

use crate::engine::QueryEngine;

/// Decimal places of a claim density
pub const DENSITY_DECIMAL_PLACES: u32 = 3;

impl QueryEngine {
    /// Claims per square mile of a disaster's circular impact area
    ///
    /// Returns `None` when the disaster does not exist; a disaster without
    /// claims has density zero. An impact area too large for a decimal gives
    /// density zero, and one that rounds to zero square miles gives `None`.
    /// Neither case arises for a radius that passed record validation.
    pub fn disaster_claim_density(&self, disaster_id: DisasterId) -> Option<Decimal> {
        let disaster = self.dataset().disaster(disaster_id)?;
        let claims = self
            .dataset()
            .claims()
            .iter()
            .filter(|claim| claim.disaster_id == disaster_id)
            .count();

        let Some(area) = disaster.impact_area() else {
            warn!(%disaster_id, radius = %disaster.radius_miles, "Impact area overflows");
            return Some(round_half_up(Decimal::ZERO, DENSITY_DECIMAL_PLACES));
        };
        match Decimal::from(claims).checked_div(area) {
            Some(density) => Some(round_half_up(density, DENSITY_DECIMAL_PLACES)),
            None => {
                warn!(%disaster_id, radius = %disaster.radius_miles, "Density is undefined for this impact area");
                None
            }
        }
    }

    /// Total claim cost per month of disaster declaration, highest first
    ///
    /// Claims whose disaster does not exist are left out. Equal totals are
    /// ordered chronologically, earlier month first.
    pub fn claim_cost_by_declared_month(&self) -> Vec<(MonthYear, Decimal)> {
        let mut totals: BTreeMap<MonthYear, Money> = BTreeMap::new();
        for claim in self.dataset().claims() {
            if let Some(disaster) = self.dataset().disaster(claim.disaster_id) {
                *totals.entry(disaster.declared_month()).or_default() += claim.estimate_cost;
            }
        }

        let mut ranked: Vec<(MonthYear, Money)> = totals.into_iter().collect();
        // Stable sort keeps chronological order among equal totals
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .map(|(month, total)| (month, total.to_cents()))
            .collect()
    }

    /// Labels of the `n` months with the highest total claim cost
    pub fn top_months_by_claim_cost(&self, n: usize) -> Vec<String> {
        self.claim_cost_by_declared_month()
            .into_iter()
            .take(n)
            .map(|(month, _)| month.label())
            .collect()
    }

    /// Labels such as "April 2023" of the three costliest months, descending
    pub fn top_three_months_by_claim_cost(&self) -> Vec<String> {
        self.top_months_by_claim_cost(3)
    }
}
