use std::borrow::Cow;

use super::{ObjectKind, Storable};
use crate::kvlm::{Kvlm, KvlmError};

/// An annotated tag. The body is carried byte for byte; [`Tag::kvlm`] decodes it on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    body: Vec<u8>,
}

impl Tag {
    pub fn body(&self) -> &[u8] {
        self.body.as_ref()
    }

    /// Tags share the commit header layout (`object`, `type`, `tag`, `tagger`, then a message).
    pub fn kvlm(&self) -> Result<Kvlm, KvlmError> {
        Kvlm::parse(&self.body)
    }
}

impl Storable for Tag {
    const KIND: ObjectKind = ObjectKind::Tag;

    fn serialize(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.body)
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, KvlmError> {
        Ok(Self {
            body: bytes.to_vec(),
        })
    }
}
