use camino::Utf8PathBuf;

use crate::digest::Digest;
use crate::kvlm::KvlmError;

/// Errors from reading or writing objects. A missing object is not an error; reads return
/// `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// The stored bytes do not describe the object they claim to.
    #[error("corrupt object {oid}: {reason}")]
    Corruption { oid: Digest, reason: String },

    /// The header names a type outside blob, commit, tree and tag.
    #[error("unknown type {token:?} for object {oid}")]
    UnknownType { oid: Digest, token: String },

    /// The payload does not follow its type's grammar.
    #[error("malformed {kind} object {oid}")]
    Format {
        oid: Digest,
        kind: crate::object::ObjectKind,
        #[source]
        source: KvlmError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from opening or creating a repository.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not a repository: {0}")]
    NotARepository(Utf8PathBuf),

    #[error("configuration file missing: {0}")]
    MissingConfig(Utf8PathBuf),

    #[error("invalid configuration file {path}")]
    InvalidConfig {
        path: Utf8PathBuf,
        #[source]
        source: ini::ParseError,
    },

    #[error("{path}: {key} is not set")]
    MissingConfigValue {
        path: Utf8PathBuf,
        key: &'static str,
    },

    #[error("{path}: bad value {value:?} for {key}")]
    BadConfigValue {
        path: Utf8PathBuf,
        key: &'static str,
        value: String,
    },

    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedFormatVersion(u32),

    #[error("{0} is not a directory")]
    NotADirectory(Utf8PathBuf),

    #[error("{0} is not empty")]
    NotEmpty(Utf8PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
