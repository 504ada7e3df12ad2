//! Configuration utility types.
//!
//! | Module  | Purpose                            |
//! |---------|------------------------------------|
//! | `error` | Configuration errors, diagnostics  |

mod error;

pub use error::{ConfigDiagnostics, ConfigError};
