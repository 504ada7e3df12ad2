//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(ConfigDiagnostics),
}

/// A config value that failed validation.
#[derive(Debug)]
struct Rejected {
    field: &'static str,
    message: String,
    hint: Option<&'static str>,
}

/// Rejected values across all sections, reported in one error.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics(Vec<Rejected>);

impl ConfigDiagnostics {
    pub fn reject(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
        hint: Option<&'static str>,
    ) {
        self.0.push(Rejected {
            field,
            message: message.into(),
            hint,
        });
    }

    /// `Err(ConfigError::Validation)` if anything was rejected.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self))
        }
    }

    #[cfg(test)]
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|r| r.field).collect()
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "invalid configuration:".red().bold())?;
        for rejected in &self.0 {
            write!(f, "\n  {} {}", format!("{}:", rejected.field).cyan(), rejected.message)?;
            if let Some(hint) = rejected.hint {
                write!(f, "\n    {} {hint}", "hint:".yellow())?;
            }
        }
        Ok(())
    }
}
