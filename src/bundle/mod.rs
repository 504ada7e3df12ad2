//! Bundle pipeline: parameters in, versioned tag out.
//!
//! ```text
//! RawParams ─► BundleRequest ─► OutputTarget ─► FileList ─► rebuild? ─► write ─► tag
//!  (request)     (request)        (target)       (resolve)   (policy)   (write)  (reference)
//! ```
//!
//! Each invocation runs to completion on the calling thread. The only state
//! that survives between calls is the bundle file itself; its mtime is the
//! staleness watermark.

mod error;
mod policy;
mod reference;
mod request;
mod resolve;
mod target;
mod write;

pub use error::BundleError;
pub use request::{AssetType, BundleRequest, RawParams};
pub use resolve::{FileList, resolve_inputs};
pub use target::OutputTarget;

use std::path::PathBuf;

use crate::config::BundlerConfig;
use crate::{debug, log};

/// What one invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOutcome {
    /// HTML tag referencing the bundle.
    pub reference: String,
    /// Whether the bundle file was regenerated.
    pub rebuilt: bool,
    /// Number of resolved inputs.
    pub inputs: usize,
    /// Absolute bundle path.
    pub output: PathBuf,
}

/// Resolution result, before anything touches the filesystem.
#[derive(Debug, Clone)]
pub struct Plan {
    pub request: BundleRequest,
    pub target: OutputTarget,
    pub files: FileList,
    pub rebuild: bool,
}

/// Concatenates inputs into a bundle according to its configuration.
pub struct Bundler {
    config: BundlerConfig,
}

impl Bundler {
    pub fn new(config: BundlerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundlerConfig {
        &self.config
    }

    /// Resolve inputs and decide on a rebuild without side effects.
    ///
    /// Returns `None` when `files` is empty.
    pub fn plan(&self, raw: &RawParams<'_>) -> Option<Plan> {
        let request = BundleRequest::from_params(raw)?;
        let target = OutputTarget::new(self.config.site_root(), self.config.site_url(), &request);
        Some(self.plan_for(request, target))
    }

    fn plan_for(&self, request: BundleRequest, target: OutputTarget) -> Plan {
        let exclude = self
            .config
            .bundle
            .self_exclude
            .then(|| target.canonical_file());

        let files = resolve_inputs(
            self.config.site_root(),
            &request.input_specs,
            exclude.as_deref(),
        );
        let rebuild = self
            .config
            .bundle
            .policy
            .needs_rebuild(&target.file, &files);

        Plan {
            request,
            target,
            files,
            rebuild,
        }
    }

    /// Run one invocation: ensure the output directory, rebuild if needed,
    /// and produce the versioned reference.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `files` is empty.
    pub fn run(&self, raw: &RawParams<'_>) -> Result<Option<BundleOutcome>, BundleError> {
        let Some(request) = BundleRequest::from_params(raw) else {
            debug!("bundle"; "no input files given, nothing to do");
            return Ok(None);
        };

        let target = OutputTarget::new(self.config.site_root(), self.config.site_url(), &request);
        target.ensure_dir()?;

        let plan = self.plan_for(request, target);
        let name = &plan.request.output_name;

        if plan.rebuild {
            let content = write::concat(self.config.site_root(), &plan.files)?;
            write::write_bundle(&plan.target.file, &content)?;
            log!("bundle"; "rebuilt {} from {} file(s)", name, plan.files.len());
        } else {
            log!("fresh"; "{} is up to date", name);
        }

        let version = reference::version(self.config.bundle.version, &plan.target.file);
        let url = reference::versioned_url(&plan.target.url, &version);

        Ok(Some(BundleOutcome {
            reference: reference::render_tag(plan.request.kind, &url),
            rebuilt: plan.rebuild,
            inputs: plan.files.len(),
            output: plan.target.file,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RebuildPolicy, VersionStrategy, test_config};
    use std::fs::{self, File};
    use std::path::Path;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    fn css_params<'a>(files: &'a str) -> RawParams<'a> {
        RawParams {
            kind: Some("css"),
            files: Some(files),
            filename: Some("x.css"),
            path: Some("out"),
        }
    }

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.css"), "a { color: red }").unwrap();
        fs::write(dir.path().join("b.css"), "b { color: blue }").unwrap();
        dir
    }

    fn reference_of(bundler: &Bundler, files: &str) -> String {
        bundler.run(&css_params(files)).unwrap().unwrap().reference
    }

    fn version_of(reference: &str) -> &str {
        let start = reference.find("?v=").unwrap() + 3;
        let end = reference[start..].find('"').unwrap() + start;
        &reference[start..end]
    }

    #[test]
    fn test_empty_files_has_no_side_effects() {
        let dir = TempDir::new().unwrap();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Always));

        let raw = RawParams {
            files: Some("   "),
            ..Default::default()
        };
        assert!(bundler.run(&raw).unwrap().is_none());
        assert!(bundler.run(&RawParams::default()).unwrap().is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_first_build_creates_bundle() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Stale));

        let outcome = bundler.run(&css_params("/a.css,/b.css")).unwrap().unwrap();

        assert!(outcome.rebuilt);
        assert_eq!(outcome.inputs, 2);
        let content = fs::read_to_string(dir.path().join("out/x.css")).unwrap();
        assert_eq!(
            content,
            "\n/* --- /a.css --- */\na { color: red }\n/* --- /b.css --- */\nb { color: blue }"
        );
        assert!(
            outcome
                .reference
                .starts_with(r#"<link rel="stylesheet" href="https://example.com/out/x.css?v="#)
        );
        assert!(outcome.reference.ends_with(r#"" />"#));
        assert!(version_of(&outcome.reference).parse::<u64>().is_ok());
    }

    #[test]
    fn test_stale_check_skips_fresh_bundle() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Stale));
        let output = dir.path().join("out/x.css");

        let old = SystemTime::now() - Duration::from_secs(3600);
        set_mtime(&dir.path().join("a.css"), old);
        set_mtime(&dir.path().join("b.css"), old);

        bundler.run(&css_params("/a.css,/b.css")).unwrap();
        let first = fs::read(&output).unwrap();
        let first_mtime = fs::metadata(&output).unwrap().modified().unwrap();

        let outcome = bundler.run(&css_params("/a.css,/b.css")).unwrap().unwrap();
        assert!(!outcome.rebuilt);
        assert_eq!(fs::read(&output).unwrap(), first);
        assert_eq!(fs::metadata(&output).unwrap().modified().unwrap(), first_mtime);
    }

    #[test]
    fn test_stale_check_rebuilds_after_touch() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Stale));
        let output = dir.path().join("out/x.css");

        bundler.run(&css_params("/a.css,/b.css")).unwrap();
        set_mtime(&output, SystemTime::now() - Duration::from_secs(3600));

        fs::write(dir.path().join("b.css"), "b { color: green }").unwrap();
        set_mtime(&dir.path().join("b.css"), SystemTime::now());

        let outcome = bundler.run(&css_params("/a.css,/b.css")).unwrap().unwrap();
        assert!(outcome.rebuilt);
        assert!(
            fs::read_to_string(&output)
                .unwrap()
                .ends_with("b { color: green }")
        );
    }

    #[test]
    fn test_always_rebuild_is_idempotent() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Always));
        let output = dir.path().join("out/x.css");

        let first = bundler.run(&css_params("/a.css,/b.css")).unwrap().unwrap();
        let content = fs::read(&output).unwrap();
        let second = bundler.run(&css_params("/a.css,/b.css")).unwrap().unwrap();

        assert!(first.rebuilt && second.rebuilt);
        assert_eq!(fs::read(&output).unwrap(), content);
    }

    #[test]
    fn test_always_rebuild_with_no_inputs_writes_empty_bundle() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Always));

        let outcome = bundler.run(&css_params("/missing.css,*.scss")).unwrap().unwrap();
        assert!(outcome.rebuilt);
        assert_eq!(fs::metadata(dir.path().join("out/x.css")).unwrap().len(), 0);
    }

    #[test]
    fn test_stale_with_no_inputs_leaves_output_absent() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Stale));

        let outcome = bundler.run(&css_params("/missing.css")).unwrap().unwrap();
        assert!(!outcome.rebuilt);
        assert!(dir.path().join("out").is_dir());
        assert!(!dir.path().join("out/x.css").exists());
        assert!(outcome.reference.contains("/out/x.css?v="));
    }

    #[test]
    fn test_self_exclusion() {
        let dir = TempDir::new().unwrap();
        let js = dir.path().join("assets/templates/js");
        fs::create_dir_all(&js).unwrap();
        fs::write(js.join("app.js"), "app();").unwrap();
        fs::write(js.join("bundle.min.js"), "previous bundle").unwrap();

        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Always));
        let raw = RawParams {
            kind: Some("js"),
            files: Some("/assets/templates/js/*.js"),
            filename: Some("bundle.min.js"),
            path: Some("assets/templates/js"),
        };

        let outcome = bundler.run(&raw).unwrap().unwrap();
        assert_eq!(outcome.inputs, 1);
        assert_eq!(
            outcome.reference,
            format!(
                r#"<script src="https://example.com/assets/templates/js/bundle.min.js?v={}"></script>"#,
                version_of(&outcome.reference)
            )
        );

        // Repeated runs don't grow the bundle
        bundler.run(&raw).unwrap();
        assert_eq!(
            fs::read_to_string(js.join("bundle.min.js")).unwrap(),
            "\n/* --- /assets/templates/js/app.js --- */\napp();"
        );
    }

    #[test]
    fn test_without_self_exclusion_bundle_reads_itself() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.js"), "app();").unwrap();
        fs::write(dir.path().join("bundle.min.js"), "old").unwrap();

        let mut config = test_config(dir.path(), RebuildPolicy::Always);
        config.bundle.self_exclude = false;
        let bundler = Bundler::new(config);

        let raw = RawParams {
            kind: Some("js"),
            files: Some("*.js"),
            path: Some("/"),
            ..Default::default()
        };
        let outcome = bundler.run(&raw).unwrap().unwrap();
        assert_eq!(outcome.inputs, 2);
        assert!(outcome.reference.contains(r#"src="https://example.com/bundle.min.js?v="#));
    }

    #[test]
    fn test_content_version_is_stable() {
        let dir = site();
        let mut config = test_config(dir.path(), RebuildPolicy::Always);
        config.bundle.version = VersionStrategy::Content;
        let bundler = Bundler::new(config);

        let first = reference_of(&bundler, "/a.css,/b.css");
        let second = reference_of(&bundler, "/a.css,/b.css");
        assert_eq!(first, second);

        fs::write(dir.path().join("a.css"), "a { color: black }").unwrap();
        let third = reference_of(&bundler, "/a.css,/b.css");
        assert_ne!(first, third);
    }

    #[test]
    fn test_plan_has_no_side_effects() {
        let dir = site();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Stale));

        let plan = bundler.plan(&css_params("/b.css,/a.css,/b.css")).unwrap();
        assert!(plan.rebuild);
        assert_eq!(plan.files.len(), 2);
        assert!(!dir.path().join("out").exists());
        assert!(bundler.plan(&RawParams::default()).is_none());
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = site();
        fs::write(dir.path().join("out"), "a file where the directory should be").unwrap();
        let bundler = Bundler::new(test_config(dir.path(), RebuildPolicy::Always));

        let err = bundler.run(&css_params("/a.css")).unwrap_err();
        assert!(matches!(err, BundleError::CreateDir(..)));
    }
}
