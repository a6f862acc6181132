//! Core Kernel - Foundational types for disaster claims analytics
//!
//! This crate provides the building blocks shared by every other crate:
//! - Money amounts with exact decimal arithmetic and half-up rounding
//! - Integer identifiers for agents, claim handlers, claims and disasters
//! - Calendar month buckets used for time-based grouping

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError, round_half_up};
pub use temporal::{MonthYear, TemporalError};
pub use identifiers::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
pub use error::CoreError;
