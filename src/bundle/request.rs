//! Invocation parameters and their normalized form.
//!
//! Parameters arrive as optional raw strings (from a template tag or the
//! CLI). Normalization never fails: unknown types fall back to css, missing
//! values take their defaults, and an empty `files` list means "nothing to do".

/// Default output directory, relative to the site root.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/templates";

/// Kind of bundle being produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetType {
    /// Stylesheet bundle, referenced with `<link rel="stylesheet">`.
    #[default]
    Style,
    /// Script bundle, referenced with `<script src>`.
    Script,
}

impl AssetType {
    /// Parse a raw `type` parameter. Only `js` selects scripts.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("js") {
            Self::Script
        } else {
            Self::Style
        }
    }

    /// Output file name used when none is given.
    pub const fn default_filename(self) -> &'static str {
        match self {
            Self::Style => "styles.min.css",
            Self::Script => "bundle.min.js",
        }
    }
}

/// Raw invocation parameters, each optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawParams<'a> {
    pub kind: Option<&'a str>,
    pub files: Option<&'a str>,
    pub filename: Option<&'a str>,
    pub path: Option<&'a str>,
}

/// Normalized bundle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequest {
    pub kind: AssetType,
    /// Trimmed, non-empty entries in the order given: literal paths or globs.
    pub input_specs: Vec<String>,
    pub output_name: String,
    /// Output directory relative to the site root, without surrounding `/`.
    pub output_dir: String,
}

impl BundleRequest {
    /// Normalize raw parameters.
    ///
    /// Returns `None` when `files` is absent or blank.
    pub fn from_params(raw: &RawParams<'_>) -> Option<Self> {
        let files = raw.files.map(str::trim).unwrap_or_default();
        if files.is_empty() {
            return None;
        }

        let kind = raw.kind.map(AssetType::parse).unwrap_or_default();

        let input_specs = files
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();

        let output_name = raw
            .filename
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(kind.default_filename())
            .to_string();

        let output_dir = raw
            .path
            .map_or(DEFAULT_OUTPUT_DIR, |path| {
                path.trim().trim_matches(['/', '\\'])
            })
            .to_string();

        Some(Self {
            kind,
            input_specs,
            output_name,
            output_dir,
        })
    }
}
