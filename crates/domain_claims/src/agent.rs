//! Insurance agents

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::AgentId;
use crate::record::Record;

/// Language excluded from "most spoken language" rankings
pub const ENGLISH: &str = "English";

/// An insurance agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Agent {
    pub id: AgentId,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    /// State or "District of Columbia", spelled as in the disaster data
    #[validate(length(min = 1))]
    pub state: String,
    #[serde(default)]
    pub region: Option<String>,
    #[validate(length(min = 1))]
    pub primary_language: String,
    #[serde(default)]
    pub secondary_language: Option<String>,
    #[serde(default)]
    pub years_active: u32,
}

impl Agent {
    /// Returns "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Iterates the agent's spoken languages that are not English
    ///
    /// Primary and secondary languages are both yielded, even when equal.
    /// Blank entries are skipped.
    pub fn non_english_languages(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_language.as_str())
            .chain(self.secondary_language.as_deref())
            .map(str::trim)
            .filter(|lang| !lang.is_empty() && !lang.eq_ignore_ascii_case(ENGLISH))
    }
}

impl Record for Agent {
    type Id = AgentId;
    const KIND: &'static str = "agent";

    fn id(&self) -> AgentId {
        self.id
    }
}
