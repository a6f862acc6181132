//! Disasters and their impact areas

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::{DisasterId, MonthYear};
use crate::record::Record;

/// Smallest radius a loaded disaster may declare
pub const MIN_RADIUS_MILES: Decimal = Decimal::from_parts(1, 0, 0, false, 3);
/// Largest radius a loaded disaster may declare
pub const MAX_RADIUS_MILES: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// A declared disaster with a circular impact area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Disaster {
    pub id: DisasterId,
    #[serde(rename = "type", default)]
    pub disaster_type: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub declared_date: NaiveDate,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default, rename = "long")]
    pub lng: Option<f64>,
    #[validate(custom(function = "radius_in_range"))]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub radius_miles: Decimal,
}

impl Disaster {
    /// Area of the impact circle in square miles, `None` when it exceeds
    /// the decimal range
    pub fn impact_area(&self) -> Option<Decimal> {
        Decimal::PI
            .checked_mul(self.radius_miles)?
            .checked_mul(self.radius_miles)
    }

    /// True when the declaration came strictly after the disaster ended
    pub fn declared_after_end(&self) -> bool {
        self.declared_date > self.end_date
    }

    /// Month bucket of the declaration date
    pub fn declared_month(&self) -> MonthYear {
        MonthYear::from_date(self.declared_date)
    }
}

impl Record for Disaster {
    type Id = DisasterId;
    const KIND: &'static str = "disaster";

    fn id(&self) -> DisasterId {
        self.id
    }
}

fn radius_in_range(radius: &Decimal) -> Result<(), ValidationError> {
    if *radius <= Decimal::ZERO {
        return Err(ValidationError::new("non_positive_radius"));
    }
    if *radius < MIN_RADIUS_MILES || *radius > MAX_RADIUS_MILES {
        return Err(ValidationError::new("radius_out_of_range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn disaster(end: NaiveDate, declared: NaiveDate) -> Disaster {
        Disaster {
            id: DisasterId::new(1),
            disaster_type: "Flood".to_string(),
            state: "Texas".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            start_date: end,
            end_date: end,
            declared_date: declared,
            lat: None,
            lng: None,
            radius_miles: dec!(10),
        }
    }

    #[test]
    fn test_declared_after_end_is_strict() {
        let day = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let next = NaiveDate::from_ymd_opt(2023, 4, 11).unwrap();
        assert!(disaster(day, next).declared_after_end());
        assert!(!disaster(day, day).declared_after_end());
        assert!(!disaster(next, day).declared_after_end());
    }

    #[test]
    fn test_zero_radius_fails_validation() {
        let day = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let mut d = disaster(day, day);
        d.radius_miles = Decimal::ZERO;
        assert!(d.check().is_err());
    }

    #[test]
    fn test_radius_bounds_are_inclusive() {
        let day = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let mut d = disaster(day, day);
        for radius in [MIN_RADIUS_MILES, MAX_RADIUS_MILES] {
            d.radius_miles = radius;
            assert!(d.check().is_ok(), "radius {radius} should pass");
        }
        for radius in [dec!(0.0009), dec!(100000.01), dec!(1000000000000000)] {
            d.radius_miles = radius;
            assert!(d.check().is_err(), "radius {radius} should fail");
        }
    }

    #[test]
    fn test_impact_area() {
        let day = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let area = disaster(day, day).impact_area().unwrap();
        assert_eq!(area.round_dp(4), dec!(314.1593));
    }

    #[test]
    fn test_impact_area_overflow_is_none() {
        let day = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let mut d = disaster(day, day);
        d.radius_miles = dec!(1000000000000000);
        assert_eq!(d.impact_area(), None);

        d.radius_miles = MAX_RADIUS_MILES;
        assert!(d.impact_area().is_some());
    }

    #[test]
    fn test_deserialize_with_long_field() {
        let json = r#"{
            "id": 15, "type": "Hurricane", "state": "Florida", "name": "Ian",
            "description": "", "start_date": "2022-09-23", "end_date": "2022-09-30",
            "declared_date": "2022-09-29", "lat": 26.6, "long": -82.1, "radius_miles": 96
        }"#;
        let d: Disaster = serde_json::from_str(json).unwrap();
        assert_eq!(d.lng, Some(-82.1));
        assert_eq!(d.radius_miles, dec!(96));
        assert_eq!(d.declared_month().label(), "September 2022");
    }
}
