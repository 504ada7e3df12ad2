//! `[site]` section configuration.
//!
//! Where the site lives on disk and where it is served from.
//!
//! # Example
//!
//! ```toml
//! [site]
//! root = "public_html"          # Site root (relative to the config file)
//! url = "https://example.com/"  # Public URL of the site root
//! ```

use crate::config::ConfigDiagnostics;
use crate::utils::path::is_external_link;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site root directory. Every input entry and the output directory are
    /// resolved against it.
    pub root: PathBuf,

    /// Public URL prefix of the site root.
    /// - `/` (default): root-relative URLs
    /// - `https://example.com/`: absolute URLs
    pub url: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            url: "/".into(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `root` must exist and be a directory
    /// - `url` with a scheme must be a valid absolute URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.root.exists() {
            diag.reject(
                "site.root",
                format!("site root not found: {}", self.root.display()),
                None,
            );
        } else if !self.root.is_dir() {
            diag.reject(
                "site.root",
                format!("site root is not a directory: {}", self.root.display()),
                None,
            );
        }

        if is_external_link(&self.url)
            && let Err(err) = url::Url::parse(&self.url)
        {
            diag.reject(
                "site.url",
                format!("invalid url `{}`: {err}", self.url),
                Some("use an absolute url like `https://example.com/` or a path like `/`"),
            );
        }
    }
}
