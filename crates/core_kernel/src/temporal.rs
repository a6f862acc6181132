//! Calendar bucketing types
//!
//! Claims are grouped by the month in which their disaster was declared.
//! `MonthYear` is that bucket: it orders chronologically and displays as
//! "April 2023".

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month number: {0}")]
    InvalidMonth(u32),

    #[error("Invalid month label: {0}")]
    InvalidLabel(String),
}

/// A calendar month within a specific four-digit year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    // Field order gives chronological Ord
    year: i32,
    month: u32,
}

impl MonthYear {
    /// Creates a bucket from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the bucket containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full English month name, e.g. "November"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// The display label, e.g. "November 2022"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:04}", self.month_name(), self.year)
    }
}

impl FromStr for MonthYear {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TemporalError::InvalidLabel(s.to_string());
        let (name, year) = s.trim().rsplit_once(' ').ok_or_else(invalid)?;
        let month = name.parse::<Month>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        Self::new(year, month.number_from_month())
    }
}

impl Serialize for MonthYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for MonthYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MonthYear::from_str(&s).map_err(serde::de::Error::custom)
    }
}
