//! Data file locations

use std::path::{Path, PathBuf};

/// Default file name of the agents dataset
pub const DEFAULT_AGENTS_FILE: &str = "sfcc_2023_agents.json";
/// Default file name of the claim handlers dataset
pub const DEFAULT_CLAIM_HANDLERS_FILE: &str = "sfcc_2023_claim_handlers.json";
/// Default file name of the claims dataset
pub const DEFAULT_CLAIMS_FILE: &str = "sfcc_2023_claims.json";
/// Default file name of the disasters dataset
pub const DEFAULT_DISASTERS_FILE: &str = "sfcc_2023_disasters.json";

/// Paths of the four data files
///
/// # Example
///
/// ```rust
/// use infra_store::DataFiles;
///
/// let files = DataFiles::in_dir("data").with_claims("data/claims-2024.json");
/// assert!(files.agents.ends_with("sfcc_2023_agents.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub agents: PathBuf,
    pub claim_handlers: PathBuf,
    pub claims: PathBuf,
    pub disasters: PathBuf,
}

impl DataFiles {
    /// Uses the default file names inside `dir`
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing the data files
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            agents: dir.join(DEFAULT_AGENTS_FILE),
            claim_handlers: dir.join(DEFAULT_CLAIM_HANDLERS_FILE),
            claims: dir.join(DEFAULT_CLAIMS_FILE),
            disasters: dir.join(DEFAULT_DISASTERS_FILE),
        }
    }

    /// Overrides the agents file
    pub fn with_agents(mut self, path: impl Into<PathBuf>) -> Self {
        self.agents = path.into();
        self
    }

    /// Overrides the claim handlers file
    pub fn with_claim_handlers(mut self, path: impl Into<PathBuf>) -> Self {
        self.claim_handlers = path.into();
        self
    }

    /// Overrides the claims file
    pub fn with_claims(mut self, path: impl Into<PathBuf>) -> Self {
        self.claims = path.into();
        self
    }

    /// Overrides the disasters file
    pub fn with_disasters(mut self, path: impl Into<PathBuf>) -> Self {
        self.disasters = path.into();
        self
    }
}
