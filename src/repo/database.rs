use std::io::{ErrorKind, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::*;

use crate::digest::Digest;
use crate::error::ObjectError;
use crate::object::{Object, ObjectKind};
use crate::util;

/// The loose object store under `.git/objects`.
pub struct Database {
    database_root: Utf8PathBuf,
}

impl Database {
    pub fn new(git_dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            database_root: git_dir.as_ref().join("objects"),
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.database_root
    }

    /// `objects/<first two hex digits>/<remaining 38>`
    pub fn object_path(&self, oid: &Digest) -> Utf8PathBuf {
        let mut x = self.database_root.to_owned();
        let oid = oid.to_hex();
        let (prefix, suffix) = oid.split_at(2);
        x.push(prefix);
        x.push(suffix);
        x
    }

    pub fn exists(&self, oid: &Digest) -> bool {
        self.object_path(oid).is_file()
    }

    /// Load an object. Returns `Ok(None)` if nothing is stored under `oid`.
    pub fn read(&self, oid: &Digest) -> Result<Option<Object>, ObjectError> {
        let frame = match self.read_to_vec(oid)? {
            Some(frame) => frame,
            None => {
                trace!(%oid, "Object not in database");
                return Ok(None);
            }
        };

        let (kind, payload) = parse_frame(oid, &frame)?;
        let object = Object::new(kind, payload).map_err(|source| ObjectError::Format {
            oid: *oid,
            kind,
            source,
        })?;

        Ok(Some(object))
    }

    /// Read and inflate the stored frame for `oid`.
    pub fn read_to_vec(&self, oid: &Digest) -> Result<Option<Vec<u8>>, ObjectError> {
        trace!(%oid, "Reading object from database");

        let compressed = match std::fs::read(self.object_path(oid)) {
            Ok(compressed) => compressed,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut decompressed = Vec::new();
        ZlibDecoder::new(&*compressed)
            .read_to_end(&mut decompressed)
            .map_err(|e| ObjectError::Corruption {
                oid: *oid,
                reason: format!("could not inflate: {e}"),
            })?;

        Ok(Some(decompressed))
    }

    /// Hash `obj`, and if `persist` is set, store it. The id is the same either way.
    ///
    /// An object that is already present is never rewritten or checked.
    pub fn write(&self, obj: &Object, persist: bool) -> Result<Digest, ObjectError> {
        let frame = obj.frame();
        let oid = Digest::new(&frame);

        if persist {
            self.store(&oid, &frame)?;
        }

        Ok(oid)
    }

    /// Name resolution is not implemented: the name is returned as given.
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        name
    }

    /// Write `frame` under `oid` unless something is already there. Returns whether a file was
    /// written.
    fn store(&self, oid: &Digest, frame: &[u8]) -> Result<bool, ObjectError> {
        let object_path = self.object_path(oid);

        if object_path.exists() {
            trace!(%oid, "Object already in database");
            return Ok(false);
        }

        trace!(%oid, "Writing object to database");

        let dirname = object_path
            .parent()
            .unwrap_or_else(|| self.database_root.as_path());

        if !dirname.is_dir() {
            std::fs::create_dir_all(dirname)?;
        }

        let mut e = ZlibEncoder::new(Vec::with_capacity(frame.len()), Compression::default());
        e.write_all(frame)?;
        let compressed_bytes = e.finish()?;

        util::write_atomically(dirname, &object_path, &compressed_bytes)?;

        Ok(true)
    }
}

/// Split a decompressed object into its type and payload, checking the declared length.
fn parse_frame<'a>(oid: &Digest, frame: &'a [u8]) -> Result<(ObjectKind, &'a [u8]), ObjectError> {
    let corruption = |reason: &str| ObjectError::Corruption {
        oid: *oid,
        reason: reason.to_owned(),
    };

    let space_idx =
        memchr::memchr(b' ', frame).ok_or_else(|| corruption("no space in header"))?;
    let nul_idx = memchr::memchr(b'\0', &frame[space_idx..])
        .map(|i| space_idx + i)
        .ok_or_else(|| corruption("no NUL after header"))?;

    let r#type = &frame[..space_idx];
    let len = &frame[space_idx + 1..nul_idx];
    if len.is_empty() || !len.iter().all(u8::is_ascii_digit) {
        return Err(corruption("header length is not a decimal number"));
    }
    let len = std::str::from_utf8(len)
        .ok()
        .and_then(|len| len.parse::<usize>().ok())
        .ok_or_else(|| corruption("header length does not fit in memory"))?;

    let payload = &frame[nul_idx + 1..];
    if payload.len() != len {
        return Err(ObjectError::Corruption {
            oid: *oid,
            reason: format!("bad length: header says {len}, payload is {}", payload.len()),
        });
    }

    let kind = ObjectKind::from_token(r#type).ok_or_else(|| ObjectError::UnknownType {
        oid: *oid,
        token: String::from_utf8_lossy(r#type).into_owned(),
    })?;

    debug!(%oid, %kind, len, "Parsed object header");

    Ok((kind, payload))
}
