//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::bundle::RawParams;
use crate::config::{RebuildPolicy, VersionStrategy};

/// Concatenate css or js sources into one versioned bundle
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: merge-assets.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "merge-assets.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Site root directory (overrides `[site].root`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Public URL of the site root (overrides `[site].url`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the bundle (when needed) and print its tag
    #[command(visible_alias = "b")]
    Bundle {
        #[command(flatten)]
        args: BundleArgs,
    },

    /// Show resolved inputs and the rebuild decision without writing anything
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: BundleArgs,
    },
}

/// Bundle parameters shared by Bundle and Resolve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BundleArgs {
    /// Asset type: `css` or `js` (anything else is treated as css)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Comma-separated files or glob patterns, relative to the site root
    #[arg(short, long)]
    pub files: Option<String>,

    /// Output file name (default: styles.min.css / bundle.min.js)
    #[arg(short = 'n', long)]
    pub filename: Option<String>,

    /// Output directory, relative to the site root (default: assets/templates)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Rebuild policy (overrides `[bundle].policy`)
    #[arg(short = 'P', long, value_enum)]
    pub policy: Option<RebuildPolicy>,

    /// Exclude the output file from its own inputs (overrides `[bundle].self_exclude`)
    #[arg(short = 'x', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub self_exclude: Option<bool>,

    /// Version strategy for `?v=` (overrides `[bundle].version`)
    #[arg(long = "versioning", value_enum)]
    pub version: Option<VersionStrategy>,
}

impl BundleArgs {
    /// Invocation parameters as a template would pass them.
    pub fn raw_params(&self) -> RawParams<'_> {
        RawParams {
            kind: self.kind.as_deref(),
            files: self.files.as_deref(),
            filename: self.filename.as_deref(),
            path: self.path.as_deref(),
        }
    }
}
