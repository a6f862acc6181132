//! US Census regions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A US Census region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    West,
    Midwest,
    South,
    Northeast,
}

const WEST: &[&str] = &[
    "Alaska", "Hawaii", "Washington", "Oregon", "California", "Montana", "Idaho",
    "Wyoming", "Nevada", "Utah", "Colorado", "Arizona", "New Mexico",
];

const MIDWEST: &[&str] = &[
    "North Dakota", "South Dakota", "Minnesota", "Wisconsin", "Michigan", "Nebraska",
    "Iowa", "Illinois", "Indiana", "Ohio", "Missouri", "Kansas",
];

const SOUTH: &[&str] = &[
    "Oklahoma", "Texas", "Arkansas", "Louisiana", "Kentucky", "Tennessee", "Mississippi",
    "Alabama", "West Virginia", "Virginia", "North Carolina", "South Carolina", "Georgia",
    "Florida",
];

const NORTHEAST: &[&str] = &[
    "Maryland", "Delaware", "District of Columbia", "Pennsylvania", "New York",
    "New Jersey", "Connecticut", "Massachusetts", "Vermont", "New Hampshire",
    "Rhode Island", "Maine",
];

impl Region {
    pub const ALL: [Region; 4] = [Region::West, Region::Midwest, Region::South, Region::Northeast];

    /// Looks up the region of a state name (exact match)
    pub fn for_state(state: &str) -> Option<Region> {
        Self::ALL
            .into_iter()
            .find(|region| region.states().contains(&state))
    }

    /// State names belonging to this region
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            Region::West => WEST,
            Region::Midwest => MIDWEST,
            Region::South => SOUTH,
            Region::Northeast => NORTHEAST,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::West => "west",
            Region::Midwest => "midwest",
            Region::South => "south",
            Region::Northeast => "northeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
