//! Utility modules shared by the bundler.

pub mod hash;
pub mod path;
