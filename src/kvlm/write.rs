use bstr::ByteSlice;

use super::Kvlm;

impl Kvlm {
    /// Encode the key-value list. Fields are written in insertion order, with a list field written
    /// as one line per value. Newlines inside values are escaped as a newline followed by a space.
    ///
    /// The message is followed by a single trailing newline.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for (field, value) in self.fields() {
            for value in value.as_slice() {
                out.extend_from_slice(field);
                out.push(b' ');
                out.extend_from_slice(&value.replace(b"\n", b"\n "));
                out.push(b'\n');
            }
        }

        out.push(b'\n');
        out.extend_from_slice(&self.message);
        out.push(b'\n');
        out
    }
}
