use std::borrow::Cow;

use super::{ObjectKind, Storable};
use crate::kvlm::KvlmError;

/// File contents. The payload is stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Storable for Blob {
    const KIND: ObjectKind = ObjectKind::Blob;

    fn serialize(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.data)
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, KvlmError> {
        Ok(Self::new(bytes.to_vec()))
    }
}
