//! Configuration and error types for corpus vectorization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration controlling how a corpus is vectorized.
///
/// The weighting scheme itself is fixed; the config carries a schema
/// version for persisted copies and the parallelism switch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VectorizeConfig {
    /// Configuration schema version. Bump when the weighting scheme or
    /// the meaning of any field changes.
    pub version: u32,
    /// Compute per-document term frequencies on the rayon thread pool.
    /// Output is bit-identical to the sequential path.
    pub use_parallel: bool,
}

impl VectorizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate invariants that the type system cannot express.
    pub fn validate(&self) -> Result<(), VectorizeError> {
        if self.version == 0 {
            return Err(VectorizeError::InvalidConfigVersion {
                version: self.version,
            });
        }
        Ok(())
    }
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            use_parallel: false,
        }
    }
}

/// Errors produced while vectorizing a corpus.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// The config version is outside the supported range.
    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },

    /// The per-field inputs describe different numbers of documents.
    #[error("field lengths differ: {titles} titles, {genres} genre lists, {synopses} synopses")]
    FieldLengthMismatch {
        titles: usize,
        genres: usize,
        synopses: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = VectorizeConfig::default();
        assert_eq!(cfg.version, 1);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(VectorizeConfig::new(), VectorizeConfig::default());
    }

    #[test]
    fn builder_methods_set_fields() {
        let cfg = VectorizeConfig::new().with_version(2).with_parallel(true);
        assert_eq!(cfg.version, 2);
        assert!(cfg.use_parallel);
    }

    #[test]
    fn default_config_validates() {
        assert!(VectorizeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_version_is_rejected() {
        let cfg = VectorizeConfig::new().with_version(0);
        assert_eq!(
            cfg.validate(),
            Err(VectorizeError::InvalidConfigVersion { version: 0 })
        );
    }

    #[test]
    fn config_roundtrips_through_serde() {
        let cfg = VectorizeConfig::new().with_parallel(true);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: VectorizeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = VectorizeError::InvalidConfigVersion { version: 0 };
        assert!(err.to_string().contains("config version 0"));

        let err = VectorizeError::FieldLengthMismatch {
            titles: 2,
            genres: 1,
            synopses: 2,
        };
        assert!(err.to_string().contains("1 genre lists"));
    }
}
