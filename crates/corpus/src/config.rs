//! Snapshot construction configuration.

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// What to do with a book whose genres are missing or blank.
///
/// Books with a blank id or title are excluded under either policy;
/// identity fields have no zero representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Drop the book from the snapshot and report it.
    #[default]
    Exclude,
    /// Keep the book with an empty genre label list, which encodes to
    /// an all-zero genre block.
    ZeroFill,
}

/// Configuration for [`build_snapshot`](crate::build_snapshot).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Configuration schema version; part of the snapshot fingerprint.
    pub version: u32,
    pub malformed_policy: MalformedPolicy,
}

impl CorpusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.malformed_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.version == 0 {
            return Err(CorpusError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            version: 1,
            malformed_policy: MalformedPolicy::default(),
        }
    }
}
