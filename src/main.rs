mod cat_file;
mod hash_object;
mod interface;

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::Context;
pub use color_eyre::Result;
use tracing_subscriber::prelude::*;

use grit::Repo;

use crate::interface::*;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run(Opt::parse())
}

fn run(opt: Opt) -> Result<()> {
    let path = match opt.path {
        Some(ref path) => path
            .canonicalize_utf8()
            .wrap_err(format!("Directory not found: '{path}'"))?,
        None => Utf8PathBuf::try_from(std::env::current_dir()?)?,
    };

    match opt.command {
        Command::Init { directory } => {
            let repo = Repo::init(&path.join(directory))?;
            println!("Initialized empty repository in {}", repo.git_dir());
        }
        Command::CatFile { kind, object } => {
            let repo = Repo::open(path)?;
            cat_file::handle(&repo, kind, &object, &mut std::io::stdout().lock())?;
        }
        Command::HashObject {
            kind,
            write,
            path: file,
        } => {
            let repo = if write {
                Some(Repo::open(path.clone())?)
            } else {
                None
            };
            let oid = hash_object::handle(&path.join(file), kind, repo.as_ref())?;
            println!("{oid:x}");
        }
    }
    Ok(())
}
