use std::path::PathBuf;

use thiserror::Error;

/// Error produced while loading and compiling a pattern file.
///
/// Loading is strict: the first invalid pattern aborts the whole batch
/// (patterns whose regex fails to compile are rejected at load, never
/// silently skipped).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Could not read the pattern file from disk.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML, or does not match the pattern file schema.
    #[error("{path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A pattern entry failed schema validation (bad id, missing field, etc).
    #[error("{path}: pattern '{id}': {reason}")]
    Schema {
        path: PathBuf,
        id: String,
        reason: String,
    },

    /// A pattern's `pattern` field did not compile under the regex engine.
    #[error("{path}: pattern '{id}': regex compile failed: {source}")]
    Regex {
        path: PathBuf,
        id: String,
        #[source]
        source: regex::Error,
    },

    /// A pattern named a `verification` entry that is not in the registry.
    #[error("{path}: pattern '{id}': unknown verifier '{verifier}'")]
    UnknownVerifier {
        path: PathBuf,
        id: String,
        verifier: String,
    },

    /// Two patterns (possibly from different files) share an id.
    #[error("duplicate pattern id '{0}'")]
    DuplicateId(String),
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
