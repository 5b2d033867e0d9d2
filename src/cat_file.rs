use std::io::Write;

use color_eyre::eyre::{bail, eyre, Context};

use grit::{Digest, ObjectKind, Repo};

/// Write the payload of `object` to `out`, checking it has type `kind`.
pub fn handle(
    repo: &Repo,
    kind: ObjectKind,
    object: &str,
    out: &mut impl Write,
) -> crate::Result<()> {
    let name = repo.database.resolve(object);
    let oid: Digest = name
        .parse()
        .wrap_err_with(|| format!("Not a valid object name: {name}"))?;

    let loaded = repo
        .database
        .read(&oid)?
        .ok_or_else(|| eyre!("Object does not exist: {oid:x}"))?;

    if loaded.kind() != kind {
        bail!("Object {oid:x} is a {}, not a {kind}", loaded.kind());
    }

    out.write_all(&loaded.serialize())?;
    out.flush()?;
    Ok(())
}
