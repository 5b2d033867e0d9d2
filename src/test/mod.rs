mod store;

use camino::Utf8Path;
use tempdir::TempDir;

use crate::repo::Repo;
use color_eyre::Result;

/// A fresh repository in a temporary directory. The directory is removed when the `TempDir` is
/// dropped, so keep it alive for as long as the repo is used.
pub(crate) fn temp_repo() -> Result<(TempDir, Repo)> {
    let dir = TempDir::new("")?;
    let repo = Repo::init(Utf8Path::from_path(dir.path()).unwrap())?;
    Ok((dir, repo))
}
