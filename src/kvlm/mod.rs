//! Key-value-list-with-message: the header-lines, blank line, free-text message layout used as
//! the payload of commit and tag objects.
//!
//! ```text
//! tree 090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5
//! parent e6a49274aa0893ce2e2928589100387aee220c5b
//! parent 14a9d8464caef987f3b5c3cf26f56db825459abd
//! author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
//! committer Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
//! gpgsig -----BEGIN PGP SIGNATURE-----
//!
//!  iQEzBAABCAAdFiEEMLv/P6sLuz4ENfg8jo/2biro2XAFAmLX1h0ACgkQjo/2biro
//!  -----END PGP SIGNATURE-----
//!
//! Merge remote-tracking branch 'origin/renovate/clap-3.x' into develop
//! ```

mod parse;
mod write;

use bstr::{BStr, BString, ByteSlice};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KvlmError {
    #[error("malformed key-value list at byte {offset}: {reason}")]
    FormatViolation { offset: usize, reason: &'static str },
}

/// The value of a header field. A field seen once is a `Single`; seeing it again promotes it to a
/// `List` in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(BString),
    List(Vec<BString>),
}

impl Value {
    /// All values of this field, in order. A `Single` is a one-element slice.
    pub fn as_slice(&self) -> &[BString] {
        match self {
            Value::Single(v) => std::slice::from_ref(v),
            Value::List(vs) => vs.as_slice(),
        }
    }

    /// The first value of this field.
    pub fn first(&self) -> Option<&BStr> {
        self.as_slice().first().map(|v| v.as_bstr())
    }

    /// Returns `true` if the value is [`List`].
    ///
    /// [`List`]: Value::List
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    fn push(&mut self, value: BString) {
        match self {
            Value::Single(first) => {
                let first = std::mem::take(first);
                *self = Value::List(vec![first, value]);
            }
            Value::List(vs) => vs.push(value),
        }
    }
}

/// A decoded key-value list. Field order is insertion order, which is also the order fields are
/// written back out in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kvlm {
    fields: Vec<(BString, Value)>,
    message: BString,
}

impl Kvlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: impl AsRef<[u8]>) -> Option<&Value> {
        let field = field.as_ref();
        self.fields
            .iter()
            .find(|(name, _)| name.as_bytes() == field)
            .map(|(_, value)| value)
    }

    /// Every value recorded under `field`, in order. Empty if the field is absent.
    pub fn get_all(&self, field: impl AsRef<[u8]>) -> &[BString] {
        self.get(field).map(Value::as_slice).unwrap_or_default()
    }

    /// Record `value` under `field`. The first occurrence is stored as a single value, later ones
    /// turn it into a list and append.
    ///
    /// # Panics
    ///
    /// If `field` contains a space or a newline, since it could not be read back.
    pub fn append(&mut self, field: impl Into<BString>, value: impl Into<BString>) {
        let field = field.into();
        let value = value.into();
        check_field_name(&field);
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.push(value),
            None => self.fields.push((field, Value::Single(value))),
        }
    }

    /// Replace whatever is stored under `field` with a single value. A field that already exists
    /// keeps its position.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Kvlm::append`].
    pub fn set(&mut self, field: impl Into<BString>, value: impl Into<BString>) {
        let field = field.into();
        check_field_name(&field);
        let value = Value::Single(value.into());
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&BStr, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_bstr(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message(&self) -> &BStr {
        self.message.as_bstr()
    }

    pub fn set_message(&mut self, message: impl Into<BString>) {
        self.message = message.into();
    }
}

fn check_field_name(field: &[u8]) {
    assert!(
        !field.contains(&b' ') && !field.contains(&b'\n'),
        "field names cannot contain spaces or newlines: {:?}",
        field.as_bstr()
    );
}
