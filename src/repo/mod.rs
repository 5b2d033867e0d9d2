pub mod config;
pub mod database;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::*;

use crate::error::RepoError;
use config::Config;
use database::Database;

const DEFAULT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";
const DEFAULT_HEAD: &str = "ref: refs/heads/master\n";

pub struct Repo {
    worktree: Utf8PathBuf,
    git_dir: Utf8PathBuf,
    config: Config,
    pub database: Database,
}

impl Repo {
    /// Open the repository whose working tree is `worktree`. Its `.git/config` must exist and
    /// declare a format version this crate understands.
    pub fn open(worktree: Utf8PathBuf) -> Result<Self, RepoError> {
        let git_dir = worktree.join(".git");
        if !git_dir.is_dir() {
            return Err(RepoError::NotARepository(worktree));
        }

        let config = Config::load(&git_dir.join("config"))?;
        config.validate()?;

        let database = Database::new(&git_dir);
        trace!(path = %worktree, "Opened repo");

        Ok(Self {
            worktree,
            git_dir,
            config,
            database,
        })
    }

    /// Create a new repository at `worktree`, creating the directory if needed.
    ///
    /// Fails if `worktree` is a file, or already has a non-empty `.git`.
    pub fn init(worktree: &Utf8Path) -> Result<Self, RepoError> {
        trace!(path = %worktree, "Initialising repo");
        let git_dir = worktree.join(".git");

        if worktree.exists() {
            if !worktree.is_dir() {
                return Err(RepoError::NotADirectory(worktree.to_owned()));
            }
            if git_dir.exists() && std::fs::read_dir(&git_dir)?.next().is_some() {
                return Err(RepoError::NotEmpty(git_dir));
            }
        } else {
            std::fs::create_dir_all(worktree)?;
        }

        for d in ["branches", "objects", "refs/tags", "refs/heads"] {
            let dir = git_dir.join(d);
            trace!(path = %dir, "Creating directory");
            std::fs::create_dir_all(dir)?;
        }

        std::fs::write(git_dir.join("description"), DEFAULT_DESCRIPTION)?;
        std::fs::write(git_dir.join("HEAD"), DEFAULT_HEAD)?;
        Config::default().write(&git_dir.join("config"))?;

        debug!(path = %git_dir, "Created empty repository");

        Self::open(worktree.to_owned())
    }

    pub fn worktree(&self) -> &Utf8Path {
        &self.worktree
    }

    pub fn git_dir(&self) -> &Utf8Path {
        &self.git_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
