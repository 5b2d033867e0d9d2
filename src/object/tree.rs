use std::borrow::Cow;

use super::{ObjectKind, Storable};
use crate::kvlm::KvlmError;

/// A directory listing. Entries are not decoded; the body is carried byte for byte so that a
/// tree read from the store is written back under the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    body: Vec<u8>,
}

impl Tree {
    pub fn body(&self) -> &[u8] {
        self.body.as_ref()
    }
}

impl Storable for Tree {
    const KIND: ObjectKind = ObjectKind::Tree;

    fn serialize(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.body)
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, KvlmError> {
        Ok(Self {
            body: bytes.to_vec(),
        })
    }
}
