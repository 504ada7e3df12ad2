//! Configuration section definitions.
//!
//! Each module corresponds to a section in `merge-assets.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `site`   | `[site]`     | Site root path and public URL prefix     |
//! | `bundle` | `[bundle]`   | Rebuild policy, self-exclusion, versions |

mod bundle;
mod site;

pub use bundle::{BundleSectionConfig, RebuildPolicy, VersionStrategy};
pub use site::SiteSectionConfig;
