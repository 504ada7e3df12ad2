//! `[bundle]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [bundle]
//! policy = "stale"        # Rebuild policy: always | stale
//! self_exclude = true     # Never read the bundle back as one of its inputs
//! version = "timestamp"   # Cache-busting value: timestamp | content
//! ```

use serde::{Deserialize, Serialize};

/// When an existing bundle gets regenerated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RebuildPolicy {
    /// Regenerate on every invocation.
    Always,
    /// Regenerate only when the bundle is missing or an input is newer (default).
    #[default]
    Stale,
}

/// How the `?v=` value of the reference is computed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VersionStrategy {
    /// Seconds since the Unix epoch at call time (default).
    #[default]
    Timestamp,
    /// Fingerprint of the bundle bytes on disk.
    Content,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleSectionConfig {
    /// Rebuild policy.
    pub policy: RebuildPolicy,

    /// Drop the output file from the resolved inputs.
    pub self_exclude: bool,

    /// Version strategy for the returned reference.
    pub version: VersionStrategy,
}

impl Default for BundleSectionConfig {
    fn default() -> Self {
        Self {
            policy: RebuildPolicy::Stale,
            self_exclude: true,
            version: VersionStrategy::Timestamp,
        }
    }
}
