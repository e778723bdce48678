//! The zone fingerprint: SHA-1 over the sorted record lines.

use sha1::{Digest, Sha1};

/// Fold the lines, in the order given, through SHA-1 — raw bytes, no
/// separators — and render the digest as lowercase hex. Callers must pass
/// the lines already sorted; the fingerprint of an empty slice is the
/// digest of the empty byte sequence.
pub fn digest_lines<S: AsRef<str>>(sorted_lines: &[S]) -> String {
    let mut hasher = Sha1::new();
    for line in sorted_lines {
        hasher.update(line.as_ref().as_bytes());
    }
    hex::encode(hasher.finalize())
}
