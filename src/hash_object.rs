use camino::Utf8Path;
use color_eyre::eyre::Context;
use tracing::*;

use grit::{Digest, Object, ObjectKind, Repo};

/// Build an object of type `kind` from the contents of `path` and return its id. With a
/// repository, the object is also stored.
pub fn handle(path: &Utf8Path, kind: ObjectKind, repo: Option<&Repo>) -> crate::Result<Digest> {
    let data = std::fs::read(path).wrap_err(format!("Could not read file: '{path}'"))?;

    let object = Object::new(kind, &data)
        .wrap_err(format!("'{path}' is not a valid {kind} object"))?;

    let oid = match repo {
        Some(repo) => repo.database.write(&object, true)?,
        None => object.hash(),
    };

    debug!(%oid, %kind, %path, stored = repo.is_some(), "Hashed object");
    Ok(oid)
}
