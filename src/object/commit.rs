use std::borrow::Cow;

use bstr::{BStr, ByteSlice};

use super::{ObjectKind, Storable};
use crate::kvlm::{Kvlm, KvlmError};

/// A commit. Its payload is a key-value list; the fields are kept exactly as read so that
/// unrecognised headers survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    kvlm: Kvlm,
}

impl Commit {
    pub fn new(kvlm: Kvlm) -> Self {
        Self { kvlm }
    }

    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    pub fn kvlm_mut(&mut self) -> &mut Kvlm {
        &mut self.kvlm
    }

    pub fn tree(&self) -> Option<&BStr> {
        self.kvlm.get("tree").and_then(|v| v.first())
    }

    pub fn parents(&self) -> impl Iterator<Item = &BStr> {
        self.kvlm.get_all("parent").iter().map(|p| p.as_bstr())
    }

    pub fn message(&self) -> &BStr {
        self.kvlm.message()
    }
}

impl Storable for Commit {
    const KIND: ObjectKind = ObjectKind::Commit;

    fn serialize(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.kvlm.serialize())
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, KvlmError> {
        Ok(Self::new(Kvlm::parse(bytes)?))
    }
}
