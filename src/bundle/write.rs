//! Concatenation and the locked bundle write.
//!
//! Every input is preceded by a separator line naming its site-relative path:
//!
//! ```text
//!
//! /* --- /css/reset.css --- */
//! <raw bytes of reset.css>
//! /* --- /css/app.css --- */
//! <raw bytes of app.css>
//! ```

use fd_lock::RwLock;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::{BundleError, FileList};
use crate::debug;
use crate::utils::path::site_relative;

/// Separator line preceding each input.
pub fn separator(relative: &str) -> String {
    format!("\n/* --- {relative} --- */\n")
}

/// Concatenate inputs in list order.
///
/// Inputs that vanished since resolution are skipped; other read failures
/// abort the bundle.
pub fn concat(root: &Path, files: &FileList) -> Result<Vec<u8>, BundleError> {
    let mut content = Vec::new();

    for file in files {
        let bytes = match fs::read(&file.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("bundle"; "input disappeared: {}", file.path.display());
                continue;
            }
            Err(err) => return Err(BundleError::Read(file.path.clone(), err)),
        };

        content.extend_from_slice(separator(&site_relative(root, &file.path)).as_bytes());
        content.extend_from_slice(&bytes);
    }

    Ok(content)
}

/// Replace the bundle at `path` with `content`.
///
/// The previous file is removed first, then the new one is written under an
/// exclusive advisory lock so concurrent writers don't interleave. Readers
/// are not synchronized and may briefly see a missing or partial file.
pub fn write_bundle(path: &Path, content: &[u8]) -> Result<(), BundleError> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(BundleError::Remove(path.to_path_buf(), err)),
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|err| BundleError::Write(path.to_path_buf(), err))?;

    let mut lock = RwLock::new(file);
    let mut guard = lock
        .write()
        .map_err(|err| BundleError::Lock(path.to_path_buf(), err))?;

    // Another writer may have filled the file between our open and lock
    let file: &mut File = &mut guard;
    file.set_len(0)
        .and_then(|()| file.write_all(content))
        .and_then(|()| file.flush())
        .map_err(|err| BundleError::Write(path.to_path_buf(), err))
}
