//! Command-line interface module.

mod args;
pub mod bundle;
pub mod resolve;

pub use args::{BundleArgs, Cli, Commands};
