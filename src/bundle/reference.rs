//! Versioned reference markup for a bundle.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use super::AssetType;
use crate::config::VersionStrategy;
use crate::utils::hash;

/// Seconds since the Unix epoch.
pub fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Compute the `?v=` value for the bundle at `output`.
///
/// `Content` falls back to a timestamp when the bundle can't be read
/// (e.g. it was never written).
pub fn version(strategy: VersionStrategy, output: &Path) -> String {
    match strategy {
        VersionStrategy::Timestamp => timestamp().to_string(),
        VersionStrategy::Content => fs::read(output)
            .map(|content| hash::fingerprint(&content))
            .unwrap_or_else(|_| timestamp().to_string()),
    }
}

/// Get versioned URL for a bundle.
///
/// Returns `url?v=version` format.
pub fn versioned_url(url: &str, version: &str) -> String {
    format!("{url}?v={version}")
}

/// Render the HTML tag referencing a bundle.
pub fn render_tag(kind: AssetType, versioned_url: &str) -> String {
    match kind {
        AssetType::Script => format!(r#"<script src="{versioned_url}"></script>"#),
        AssetType::Style => format!(r#"<link rel="stylesheet" href="{versioned_url}" />"#),
    }
}
