//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `site_relative`)
//! - [`route`]: URL utilities (`join_url`, `is_external_link`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, site_relative};
pub use route::{is_external_link, join_url};
