//! `bundle` command: build when needed, print the tag.

use anyhow::{Context, Result};
use std::io::{Write, stdout};

use super::BundleArgs;
use crate::bundle::Bundler;
use crate::debug;

/// Run the bundler and print the reference to stdout.
///
/// Prints nothing when no input files were given.
pub fn run_bundle(bundler: &Bundler, args: &BundleArgs) -> Result<()> {
    let Some(outcome) = bundler
        .run(&args.raw_params())
        .context("bundle failed")?
    else {
        return Ok(());
    };

    debug!(
        "bundle";
        "{} ({} inputs, rebuilt: {})",
        outcome.output.display(),
        outcome.inputs,
        outcome.rebuilt
    );

    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", outcome.reference)?;
    stdout.flush()?;
    Ok(())
}
