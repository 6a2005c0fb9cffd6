//! Error types for irma-ansible
//!
//! Library code returns `IrmaResult`; the binary wraps it in `anyhow` at the
//! command boundary. A failing Ansible subprocess is not an error: its exit
//! code is carried back in `RunOutcome`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for irma-ansible operations
pub type IrmaResult<T> = Result<T, IrmaError>;

/// Main error type for irma-ansible operations
#[derive(Error, Debug)]
pub enum IrmaError {
    /// The profile selector file does not exist or cannot be read
    #[error("Missing configuration file")]
    ProfileFileMissing { path: PathBuf },

    /// The profile selector file names an unknown profile
    #[error("Bad configuration: {value}")]
    InvalidProfile { value: String },

    /// A settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// The deployment description could not be read
    #[error("cannot read {file}: {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deployment description is not valid YAML
    #[error("invalid YAML in {file}: {message}")]
    InvalidYaml { file: PathBuf, message: String },

    /// The deployment description has the wrong shape
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A server entry lacks one of its required keys
    #[error("server #{index} is missing required field '{field}'")]
    MissingServerField { index: usize, field: &'static str },

    /// A server entry carries a value of the wrong type
    #[error("server '{server}': invalid '{field}': {message}")]
    InvalidServerField {
        server: String,
        field: &'static str,
        message: String,
    },

    /// Two servers share a name
    #[error("{name} defined twice")]
    DuplicateServer { name: String },

    /// Inspect-only output needs a name and the file name gives none
    #[error("wrong filename: no deployment name before the first dot")]
    UnnamedDeployment,

    /// A singleton group has no member
    #[error("Missing group {group}")]
    MissingGroup { group: String },

    /// A singleton group has more than one member
    #[error("More than one {group} ({count} servers)")]
    AmbiguousGroup { group: String, count: usize },

    /// The scratch directory could not be created
    #[error("cannot create scratch directory: {0}")]
    ScratchDir(#[source] std::io::Error),

    /// A generated artifact could not be written
    #[error("cannot write {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program could not be started
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}
