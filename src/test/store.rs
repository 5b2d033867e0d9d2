use std::io::Write;

use color_eyre::Result;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pretty_assertions::assert_eq;

use crate::error::ObjectError;
use crate::kvlm::{Kvlm, Value};
use crate::object::{Blob, Commit, Object, ObjectKind, Storable, Tag, Tree};

#[test]
/// Store a handful of blobs and read each of them back by the returned id.
fn blob_round_trip() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;

    let payloads: [&[u8]; 4] = [b"", b"hello world\n", b"\0\x01\xff binary \n\n", &[b'x'; 4096]];
    for payload in payloads {
        let oid = repo
            .database
            .write(&Object::from(Blob::new(payload.to_vec())), true)?;
        let blob = repo.database.read(&oid)?.and_then(Object::into_blob).unwrap();
        assert_eq!(blob.data(), payload);
    }
    Ok(())
}

#[test]
fn hello_world_path() -> Result<()> {
    let (dir, repo) = super::temp_repo()?;

    let oid = repo
        .database
        .write(&Object::from(Blob::new(b"hello world\n".to_vec())), true)?;

    assert_eq!(oid.to_hex(), "3b18e512dba79e4c8300dd08aeb37f8e728b8dad");
    assert!(dir
        .path()
        .join(".git/objects/3b/18e512dba79e4c8300dd08aeb37f8e728b8dad")
        .is_file());
    Ok(())
}

#[test]
fn persist_twice_is_one_write() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;
    let blob = Object::from(Blob::new(b"twice".to_vec()));

    let first = repo.database.write(&blob, true)?;
    let path = repo.database.object_path(&first);
    let modified = std::fs::metadata(&path)?.modified()?;
    let stored = std::fs::read(&path)?;

    let second = repo.database.write(&blob, true)?;
    assert_eq!(first, second);
    assert_eq!(std::fs::metadata(&path)?.modified()?, modified);
    assert_eq!(std::fs::read(&path)?, stored);
    Ok(())
}

#[test]
fn commit_round_trip() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;

    let mut kvlm = Kvlm::new();
    kvlm.append("tree", "090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5");
    kvlm.append("parent", "e6a49274aa0893ce2e2928589100387aee220c5b");
    kvlm.append("parent", "14a9d8464caef987f3b5c3cf26f56db825459abd");
    kvlm.append("author", "Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100");
    kvlm.append("gpgsig", "-----BEGIN PGP SIGNATURE-----\n\nabc\n-----END PGP SIGNATURE-----");
    kvlm.set_message("a message\n\nwith a body");

    let oid = repo.database.write(&Object::from(Commit::new(kvlm.clone())), true)?;
    let commit = repo.database.read(&oid)?.and_then(Object::into_commit).unwrap();

    assert_eq!(commit.parents().count(), 2);
    assert_eq!(commit.kvlm().get("gpgsig"), kvlm.get("gpgsig"));
    assert!(matches!(commit.kvlm().get("parent"), Some(Value::List(_))));
    assert_eq!(commit.message(), "a message\n\nwith a body\n");
    Ok(())
}

#[test]
/// Trees and tags are stored without being interpreted, and come back byte for byte.
fn opaque_objects_keep_their_id() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;

    let tree_body = b"100644 file1\0\x86\xf8\xad\x06\x7d\x20\xfa\x9b\x45\xf6\x73\xd8\xe3\x9f\x0b\xd9\x69\x66\x64\xcb";
    let tag_body = b"object 3b18e512dba79e4c8300dd08aeb37f8e728b8dad\ntype blob\ntag v1\n\nrelease\n";

    for object in [
        Object::from(Tree::deserialize(tree_body)?),
        Object::from(Tag::deserialize(tag_body)?),
    ] {
        let oid = repo.database.write(&object, true)?;
        let loaded = repo.database.read(&oid)?.unwrap();
        assert_eq!(loaded.kind(), object.kind());
        assert_eq!(loaded.hash(), oid);
        assert_eq!(loaded, object);
    }
    Ok(())
}

#[test]
fn missing_object_is_none() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;
    let oid = Object::from(Blob::new(b"never stored".to_vec())).hash();

    assert!(!repo.database.exists(&oid));
    assert_eq!(repo.database.read(&oid)?, None);
    Ok(())
}

#[test]
/// Rewrite a stored object with a header length that is one too large. Reading it must fail
/// rather than hand back a short payload.
fn tampered_length_is_corruption() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;
    let oid = repo
        .database
        .write(&Object::from(Blob::new(b"hello world\n".to_vec())), true)?;

    let mut e = ZlibEncoder::new(Vec::new(), Compression::default());
    e.write_all(b"blob 13\0hello world\n")?;
    std::fs::write(repo.database.object_path(&oid), e.finish()?)?;

    match repo.database.read(&oid) {
        Err(ObjectError::Corruption { oid: bad, .. }) => assert_eq!(bad, oid),
        other => panic!("expected corruption, got {other:?}"),
    }
    Ok(())
}

#[test]
fn stored_frame_matches_kind() -> Result<()> {
    let (_dir, repo) = super::temp_repo()?;
    let commit = Object::from(Commit::default());
    let oid = repo.database.write(&commit, true)?;

    let frame = repo.database.read_to_vec(&oid)?.unwrap();
    assert_eq!(frame, b"commit 2\0\n\n");
    assert_eq!(repo.database.read(&oid)?.map(|o| o.kind()), Some(ObjectKind::Commit));
    Ok(())
}
