use bstr::{BString, ByteSlice};
use memchr::memchr;

use super::{Kvlm, KvlmError};

impl Kvlm {
    /// Decode a key-value list.
    ///
    /// Header lines are read until a blank line; everything after the blank line is the message,
    /// taken verbatim. A newline followed by a space inside a value is a continuation and decodes
    /// to a bare newline.
    pub fn parse(raw: &[u8]) -> Result<Self, KvlmError> {
        let mut kvlm = Kvlm::new();
        let mut start = 0;

        loop {
            let space = memchr(b' ', &raw[start..]).map(|i| start + i);
            let newline = memchr(b'\n', &raw[start..]).map(|i| start + i);

            let space = match (space, newline) {
                (Some(space), Some(newline)) if space < newline => space,
                (Some(space), None) => space,
                _ => {
                    // No field name before the end of the line, so this has to be the blank line.
                    if newline != Some(start) {
                        return Err(KvlmError::FormatViolation {
                            offset: start,
                            reason: "expected a blank line before the message",
                        });
                    }
                    kvlm.message = BString::from(&raw[start + 1..]);
                    return Ok(kvlm);
                }
            };

            let end = value_end(raw, space + 1).ok_or(KvlmError::FormatViolation {
                offset: start,
                reason: "header line is not terminated by a newline",
            })?;

            let field = &raw[start..space];
            let value = raw[space + 1..end].replace(b"\n ", b"\n");
            kvlm.append(field, value);

            start = end + 1;
        }
    }
}

/// Find the newline that ends the value starting at `from`, skipping over continuation lines.
fn value_end(raw: &[u8], from: usize) -> Option<usize> {
    let mut search = from;
    loop {
        let newline = search + memchr(b'\n', &raw[search..])?;
        if raw.get(newline + 1) != Some(&b' ') {
            return Some(newline);
        }
        search = newline + 1;
    }
}
