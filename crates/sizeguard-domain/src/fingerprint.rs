use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a path-level finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - path (repo-relative)
pub fn fingerprint_for_path(check_id: &str, code: &str, path: &str) -> String {
    let canonical = [check_id, code, path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_path_sensitive() {
        let a = fingerprint_for_path("files.max_size", "file_too_large", "big.bin");
        let b = fingerprint_for_path("files.max_size", "file_too_large", "big.bin");
        let c = fingerprint_for_path("files.max_size", "file_too_large", "other.bin");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
