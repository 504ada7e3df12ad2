//! Input resolution: comma-separated specs to an ordered file list.
//!
//! ```text
//! "/css/reset.css, /css/app/*.css, /css/reset.css"
//!        │                │               │
//!        ▼                ▼               ▼
//!   literal (exists?)   glob (sorted)   duplicate → dropped
//! ```
//!
//! Entries that resolve to nothing (missing file, glob without matches,
//! directories) are skipped silently.

use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::freshness::get_mtime;
use crate::utils::path::normalize_path;
use crate::{debug, log};

/// One input file with its modification time at resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub mtime: Option<SystemTime>,
}

impl ResolvedFile {
    fn new(path: PathBuf) -> Self {
        let mtime = get_mtime(&path);
        Self { path, mtime }
    }
}

/// Ordered, de-duplicated input files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList(Vec<ResolvedFile>);

impl FileList {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedFile> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Modification times in list order.
    pub fn mtimes(&self) -> impl Iterator<Item = Option<SystemTime>> + '_ {
        self.0.iter().map(|f| f.mtime)
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a ResolvedFile;
    type IntoIter = std::slice::Iter<'a, ResolvedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check if an entry is a glob pattern.
#[inline]
pub fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?'])
}

/// Resolve input specs against the site root.
///
/// `exclude` is the canonical output path; any input that canonicalizes to
/// it is dropped.
pub fn resolve_inputs(root: &Path, specs: &[String], exclude: Option<&Path>) -> FileList {
    let mut seen = FxHashSet::default();
    let mut files = Vec::new();

    for entry in specs {
        let rel = entry.trim_start_matches('/');
        let matches = if is_glob(entry) {
            expand_glob(root, rel)
        } else {
            resolve_literal(root, rel)
        };

        if matches.is_empty() {
            debug!("resolve"; "nothing matches `{}`", entry);
        }

        for path in matches {
            if !seen.insert(path.clone()) {
                continue;
            }
            files.push(ResolvedFile::new(path));
        }
    }

    if let Some(output) = exclude {
        files.retain(|file| {
            let is_output = normalize_path(&file.path) == output;
            if is_output {
                debug!("resolve"; "excluding bundle from its own inputs: {}", file.path.display());
            }
            !is_output
        });
    }

    FileList(files)
}

/// A literal entry resolves to itself if it is an existing file.
fn resolve_literal(root: &Path, rel: &str) -> Vec<PathBuf> {
    let path = root.join(rel);
    if path.is_file() { vec![path] } else { vec![] }
}

/// `*` and `?` never match a leading dot, so hidden files stay out of bundles.
const GLOB_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Escaped site root as a glob prefix. `None` when the root is not valid
/// UTF-8, since a lossy pattern could never match anything under it.
fn pattern_root(root: &Path) -> Option<String> {
    let Some(root) = root.to_str() else {
        log!("warning"; "site root {} is not valid utf-8, glob entries are skipped", root.display());
        return None;
    };
    Some(glob::Pattern::escape(root.trim_end_matches('/')))
}

/// Expand a glob entry. Matches come back in lexical order; only regular
/// files are kept.
fn expand_glob(root: &Path, rel: &str) -> Vec<PathBuf> {
    let Some(root) = pattern_root(root) else {
        return vec![];
    };
    let pattern = format!("{root}/{rel}");

    let paths = match glob::glob_with(&pattern, GLOB_OPTIONS) {
        Ok(paths) => paths,
        Err(err) => {
            log!("warning"; "invalid glob `{}`: {}", rel, err);
            return vec![];
        }
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                debug!("resolve"; "unreadable glob match: {}", err);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect()
}
