// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// 9 bytes encode to exactly 12 URL-safe characters.
pub const ID_BYTES: usize = 9;

/// Session token from the OS RNG.
pub fn generate_session_token() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, SESSION_TOKEN_BYTES)
}

/// Short random identifier for new opportunities. Safe in URL paths.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    generate_token(&mut rng, ID_BYTES)
}

/// Generate a URL-safe token from random bytes.
/// - Uses Base64 URL-safe, no padding.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of a token. Only the hash is kept server side.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Compares two digests without stopping at the first differing byte.
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn token_is_url_safe_no_pad() {
        let mut rng = StdRng::seed_from_u64(123);
        let t = generate_token(&mut rng, 32);

        assert!(t
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(t.len() >= 40);
    }

    #[test]
    fn ids_are_twelve_chars() {
        let id = generate_id();
        assert_eq!(id.len(), 12);
        assert_ne!(id, generate_id());
    }

    #[test]
    fn hash_changes_with_input() {
        assert_eq!(hash_token("hello"), hash_token("hello"));
        assert_ne!(hash_token("hello"), hash_token("hello!"));
    }

    #[test]
    fn passcode_digests_compare_by_content() {
        let stored = hash_token("regatta");

        assert!(hashes_equal(&stored, &hash_token("regatta")));
        assert!(!hashes_equal(&stored, &hash_token("regattA")));
        assert!(!hashes_equal(&stored, &hash_token("")));
        assert!(!hashes_equal(&stored, &stored[..31]));
    }
}
