//! Rebuild decision.

use std::path::Path;

use super::FileList;
use crate::config::RebuildPolicy;
use crate::freshness::is_stale;

impl RebuildPolicy {
    /// Decide whether the bundle at `output` must be regenerated.
    ///
    /// | Policy   | Rebuilds when                                          |
    /// |----------|--------------------------------------------------------|
    /// | `Always` | every call, even with no inputs (zero-byte bundle)     |
    /// | `Stale`  | inputs exist and the output is missing or older        |
    ///
    /// With `Stale` and no inputs, the output is left as it is, even if it
    /// was never written.
    pub fn needs_rebuild(self, output: &Path, files: &FileList) -> bool {
        match self {
            Self::Always => true,
            Self::Stale => !files.is_empty() && is_stale(output, files.mtimes()),
        }
    }
}
