pub mod blob;
pub mod commit;
pub mod tag;
pub mod tree;

use std::borrow::Cow;
use std::fmt::Display;

use crate::digest::Digest;
use crate::kvlm::KvlmError;

pub use blob::Blob;
pub use commit::Commit;
pub use tag::Tag;
pub use tree::Tree;

/// The closed set of object types. The lowercase name is the type token written in an object's
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ObjectKind {
    Blob,
    Commit,
    Tree,
    Tag,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Commit => "commit",
            ObjectKind::Tree => "tree",
            ObjectKind::Tag => "tag",
        }
    }

    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"blob" => Some(ObjectKind::Blob),
            b"commit" => Some(ObjectKind::Commit),
            b"tree" => Some(ObjectKind::Tree),
            b"tag" => Some(ObjectKind::Tag),
            _ => None,
        }
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload contract every object type shares. `Default` is the empty object.
pub trait Storable: Default + Sized {
    const KIND: ObjectKind;

    /// The payload bytes, without the `"{type} {len}\0"` header.
    fn serialize(&self) -> Cow<'_, [u8]>;

    fn deserialize(bytes: &[u8]) -> Result<Self, KvlmError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Commit(Commit),
    Tree(Tree),
    Tag(Tag),
}

impl Object {
    /// Build an object of type `kind` from its payload.
    pub fn new(kind: ObjectKind, bytes: &[u8]) -> Result<Self, KvlmError> {
        Ok(match kind {
            ObjectKind::Blob => Object::Blob(Blob::deserialize(bytes)?),
            ObjectKind::Commit => Object::Commit(Commit::deserialize(bytes)?),
            ObjectKind::Tree => Object::Tree(Tree::deserialize(bytes)?),
            ObjectKind::Tag => Object::Tag(Tag::deserialize(bytes)?),
        })
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Blob(_) => Blob::KIND,
            Object::Commit(_) => Commit::KIND,
            Object::Tree(_) => Tree::KIND,
            Object::Tag(_) => Tag::KIND,
        }
    }

    pub fn serialize(&self) -> Cow<'_, [u8]> {
        match self {
            Object::Blob(blob) => blob.serialize(),
            Object::Commit(commit) => commit.serialize(),
            Object::Tree(tree) => tree.serialize(),
            Object::Tag(tag) => tag.serialize(),
        }
    }

    /// Returns the object formatted `"{type} {len}\0{data}"`, which is what gets hashed and
    /// stored.
    ///
    /// e.g. a blob `"hello\n"` becomes `"blob 6\0hello\n"`
    pub fn frame(&self) -> Vec<u8> {
        let data = self.serialize();
        let mut formatted = Vec::with_capacity(data.len() + 16);
        formatted.extend_from_slice(self.kind().as_str().as_bytes());
        formatted.push(b' ');
        formatted.extend_from_slice(data.len().to_string().as_bytes());
        formatted.push(b'\0');
        formatted.extend_from_slice(&data);
        formatted
    }

    /// The id this object would be stored under. Touches nothing on disk.
    pub fn hash(&self) -> Digest {
        Digest::new(&self.frame())
    }

    pub fn into_blob(self) -> Option<Blob> {
        if let Self::Blob(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_commit(self) -> Option<Commit> {
        if let Self::Commit(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        if let Self::Blob(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_commit(&self) -> Option<&Commit> {
        if let Self::Commit(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        if let Self::Tree(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        if let Self::Tag(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl From<Blob> for Object {
    fn from(v: Blob) -> Self {
        Self::Blob(v)
    }
}

impl From<Commit> for Object {
    fn from(v: Commit) -> Self {
        Self::Commit(v)
    }
}

impl From<Tree> for Object {
    fn from(v: Tree) -> Self {
        Self::Tree(v)
    }
}

impl From<Tag> for Object {
    fn from(v: Tag) -> Self {
        Self::Tag(v)
    }
}
