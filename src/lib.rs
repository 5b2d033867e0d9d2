//! A loose-object store for a git-compatible version control system, and the key-value-list
//! codec that commit and tag payloads are written in.

#[cfg(test)]
mod test;

pub mod digest;
pub mod error;
pub mod kvlm;
pub mod object;
pub mod repo;
mod util;

pub use digest::Digest;
pub use error::{ObjectError, RepoError};
pub use kvlm::{Kvlm, KvlmError, Value};
pub use object::{Blob, Commit, Object, ObjectKind, Storable, Tag, Tree};
pub use repo::Repo;
