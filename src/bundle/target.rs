//! Output location of a bundle: directory, file and public URL.

use std::fs;
use std::path::{Path, PathBuf};

use super::{BundleError, BundleRequest};
use crate::utils::path::{join_url, normalize_path};

/// Where a bundle lives on disk and where it is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Absolute output directory.
    pub dir: PathBuf,
    /// Absolute output file (`dir/output_name`).
    pub file: PathBuf,
    /// Public URL of the output file, without version.
    pub url: String,
}

impl OutputTarget {
    /// Resolve the request's output against the site root and site URL.
    pub fn new(root: &Path, site_url: &str, request: &BundleRequest) -> Self {
        let dir = if request.output_dir.is_empty() {
            root.to_path_buf()
        } else {
            root.join(&request.output_dir)
        };
        let file = dir.join(&request.output_name);
        let url = join_url(
            site_url,
            &[request.output_dir.as_str(), request.output_name.as_str()],
        );

        Self { dir, file, url }
    }

    /// Create the output directory and its missing ancestors.
    pub fn ensure_dir(&self) -> Result<(), BundleError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|err| BundleError::CreateDir(self.dir.clone(), err))
    }

    /// Canonical form of the output file, for comparing against inputs.
    pub fn canonical_file(&self) -> PathBuf {
        normalize_path(&self.file)
    }
}
