//! Bundler configuration for `merge-assets.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── bundle     # [bundle]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics
//! └── mod.rs         # BundlerConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[site]`   | Site root path and public URL prefix             |
//! | `[bundle]` | Rebuild policy, self-exclusion, version strategy |
//!
//! The config file is optional. Without one, the site root is the current
//! directory and every other value takes its default.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BundleSectionConfig, RebuildPolicy, SiteSectionConfig, VersionStrategy};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{
    cli::{BundleArgs, Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing merge-assets.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site location (root path, public url)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Bundle behaviour (policy, self-exclusion, version)
    #[serde(default)]
    pub bundle: BundleSectionConfig,
}

impl BundlerConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Relative `[site].root`
    /// values are resolved against the config file's directory; `--root`
    /// is resolved against cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => Self::default(),
        };

        let base = config
            .config_path
            .parent()
            .map_or_else(|| cwd.clone(), Path::to_path_buf);
        config.site.root = base.join(&config.site.root);

        config.apply_cli(cli, &cwd);
        config.finalize();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Normalize the site root to an absolute, canonical path.
    fn finalize(&mut self) {
        self.site.root = normalize_path(&self.site.root);
    }

    /// Get the site root directory path
    pub fn site_root(&self) -> &Path {
        &self.site.root
    }

    /// Get the public URL prefix of the site root
    pub fn site_url(&self) -> &str {
        &self.site.url
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and command-specific CLI overrides.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(root) = &cli.root {
            self.site.root = cwd.join(root);
        }
        Self::update_option(&mut self.site.url, cli.url.as_ref());

        match &cli.command {
            Commands::Bundle { args } | Commands::Resolve { args } => self.apply_bundle_args(args),
        }
    }

    /// Apply bundle policy overrides from CLI.
    fn apply_bundle_args(&mut self, args: &BundleArgs) {
        Self::update_option(&mut self.bundle.policy, args.policy.as_ref());
        Self::update_option(&mut self.bundle.self_exclude, args.self_exclude.as_ref());
        Self::update_option(&mut self.bundle.version, args.version.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::default();
        self.site.validate(&mut diag);
        diag.into_result()?;
        Ok(())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, failing the test on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BundlerConfig {
    let (parsed, ignored) = BundlerConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Config rooted at `root` with the given policy, as the CLI would build it.
#[cfg(test)]
pub fn test_config(root: &Path, policy: RebuildPolicy) -> BundlerConfig {
    let mut config = BundlerConfig::default();
    config.site.root = root.to_path_buf();
    config.site.url = "https://example.com/".into();
    config.bundle.policy = policy;
    config.finalize();
    config
}

// ============================================================================
// tests
// ============================================================================
