//! Claims Domain
//!
//! Typed records for the four datasets the analytics engine works over,
//! and the immutable [`Dataset`] snapshot that holds them.
//!
//! # Relationships
//!
//! ```text
//! Claim --disaster_id--------------> Disaster
//! Claim --agent_assigned_id--------> Agent
//! Claim --claim_handler_assigned_id-> ClaimHandler
//! ```
//!
//! Every reference may dangle. Nothing in this crate treats a dangling
//! reference as an error.

pub mod agent;
pub mod claim_handler;
pub mod claim;
pub mod disaster;
pub mod region;
pub mod record;
pub mod dataset;
pub mod error;

pub use agent::Agent;
pub use claim_handler::ClaimHandler;
pub use claim::{Claim, ClaimStatus};
pub use disaster::Disaster;
pub use region::Region;
pub use record::Record;
pub use dataset::Dataset;
pub use error::DatasetError;
