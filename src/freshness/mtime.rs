//! Mtime-based freshness detection for bundles.
//!
//! The bundle's own modification time is the only watermark: there is no
//! manifest or hash index next to it.

use std::path::Path;
use std::time::SystemTime;

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
pub fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

/// Check if any input is strictly newer than the output
///
/// Returns `true` if the output is missing or its mtime can't be read.
/// Inputs without a readable mtime are ignored.
///
/// # Arguments
///
/// * `output` - Path to the generated bundle
/// * `inputs` - Modification times of the resolved inputs
pub fn is_stale(output: &Path, inputs: impl IntoIterator<Item = Option<SystemTime>>) -> bool {
    let Some(output_time) = get_mtime(output) else {
        return true;
    };

    inputs
        .into_iter()
        .flatten()
        .any(|input_time| input_time > output_time)
}
