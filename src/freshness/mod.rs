//! Freshness detection: mtime watermark of the bundle against its inputs.

pub mod mtime;

pub use mtime::{get_mtime, is_stale};
