//! `resolve` command: show what `bundle` would do.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{Write, stdout};

use super::BundleArgs;
use crate::bundle::{Bundler, Plan};
use crate::utils::path::site_relative;

/// Print resolved inputs and the rebuild decision. Writes nothing to disk.
pub fn run_resolve(bundler: &Bundler, args: &BundleArgs) -> Result<()> {
    let Some(plan) = bundler.plan(&args.raw_params()) else {
        return Ok(());
    };

    let mut stdout = stdout().lock();
    write!(stdout, "{}", render_plan(bundler, &plan))?;
    stdout.flush()?;
    Ok(())
}

/// One site-relative input per line, then the decision.
fn render_plan(bundler: &Bundler, plan: &Plan) -> String {
    let root = bundler.config().site_root();
    let mut out = String::new();

    for file in &plan.files {
        out.push_str(&site_relative(root, &file.path));
        out.push('\n');
    }

    let output = site_relative(root, &plan.target.file);
    let decision = if plan.rebuild {
        format!("{} {}", "rebuild".yellow().bold(), output)
    } else {
        format!("{} {}", "fresh".green().bold(), output)
    };
    out.push_str(&decision);
    out.push('\n');
    out
}
