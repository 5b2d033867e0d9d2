use camino::Utf8PathBuf;
use clap::Parser;
use clap::Subcommand;

use grit::ObjectKind;

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create an empty repository
    Init {
        /// Where to create the repository
        #[arg(value_name = "directory", default_value = ".")]
        directory: Utf8PathBuf,
    },

    /// Print the contents of an object
    CatFile {
        /// The type the object is expected to have
        #[arg(value_name = "type", value_enum)]
        kind: ObjectKind,

        /// The object to display
        #[arg(value_name = "object")]
        object: String,
    },

    /// Compute the id of a file's contents, and optionally store it
    HashObject {
        /// The type of object to create
        #[arg(short = 't', value_name = "type", value_enum, default_value = "blob")]
        kind: ObjectKind,

        /// Write the object into the database
        #[arg(short, long)]
        write: bool,

        /// Read the object from this file
        #[arg(value_name = "file", env = "GRIT_HASH_OBJECT_PATH")]
        path: Utf8PathBuf,
    },
}

#[derive(Debug, Parser)]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,

    /// Run as if started in this directory
    #[arg(short = 'C', env = "GRIT_WORK_TREE")]
    pub path: Option<Utf8PathBuf>,
}
