use camino::Utf8Path;
use rand::prelude::*;

/// A name for a scratch file, unique enough that concurrent writers in the same directory do not
/// collide.
pub fn tmp_file_name() -> String {
    const ALPHANUM_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::thread_rng();
    let suffix = (0..6)
        .map(|_| *ALPHANUM_CHARS.choose(&mut rng).unwrap_or(&b'x') as char)
        .collect::<String>();

    format!("tmp_obj_{suffix}")
}

/// Write `bytes` to a scratch file in `dir`, then rename it to `dest`. On failure the scratch
/// file is removed, and `dest` is never left half-written.
pub fn write_atomically(dir: &Utf8Path, dest: &Utf8Path, bytes: &[u8]) -> std::io::Result<()> {
    let temp_path = dir.join(tmp_file_name());

    let res = std::fs::write(&temp_path, bytes).and_then(|()| std::fs::rename(&temp_path, dest));
    if res.is_err() && temp_path.exists() {
        if let Err(e) = std::fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path, error = %e, "Could not remove scratch file");
        }
    }
    res
}
