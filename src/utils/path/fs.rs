//! Filesystem path normalization.
//!
//! - `normalize_path` - canonicalize with a fallback for paths that don't exist yet
//! - `site_relative` - display form of a path below the site root

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Canonical parent joined with the file name (file not written yet)
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```ignore
/// let abs = normalize_path(Path::new("./assets/templates/styles.min.css"));
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    if let (Some(parent), Some(name)) = (path.parent(), path.file_name())
        && let Ok(parent) = parent.canonicalize()
    {
        return parent.join(name);
    }

    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    }
}

/// Render `path` relative to the site root, with a leading `/`.
///
/// Paths outside the root are returned unchanged. Separators are always `/`
/// so the result is stable across platforms.
///
/// # Example
/// ```text
/// root: /var/www
/// /var/www/assets/css/main.css -> /assets/css/main.css
/// ```
pub fn site_relative(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.display().to_string();
    };

    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect();

    format!("/{}", parts.join("/"))
}
