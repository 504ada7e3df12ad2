//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /var/www/site/assets/templates/  ← cwd
/// /var/www/site/merge-assets.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("assets/templates");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("merge-assets.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("merge-assets.toml"));
        assert_eq!(found, Some(dir.path().join("merge-assets.toml")));
    }

    #[test]
    fn test_find_config_file_absolute_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert_eq!(find_config_file(&missing), None);
    }
}
