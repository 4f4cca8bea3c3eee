//! bcrypt password hashing and verification.
//!
//! Digests are self-contained: algorithm version, cost, and salt are embedded,
//! so verification needs nothing beyond the digest itself.

/// Fixed bcrypt work factor.
pub const COST: u32 = 10;

pub fn hash(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, COST)
}

/// Non-match is a normal boolean outcome, not an error; a malformed digest
/// also verifies false rather than erroring.
pub fn verify(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let digest = hash("secret1").unwrap();
        assert!(verify("secret1", &digest));
    }

    #[test]
    fn wrong_password_is_false() {
        let digest = hash("secret1").unwrap();
        assert!(!verify("secret2", &digest));
    }

    #[test]
    fn malformed_digest_is_false() {
        assert!(!verify("secret1", "not-a-digest"));
        assert!(!verify("secret1", ""));
    }

    #[test]
    fn digest_embeds_cost_and_salt() {
        let digest = hash("secret1").unwrap();
        assert!(digest.starts_with("$2"));
        assert!(digest.contains("$10$"));
        // fresh salt per call
        assert_ne!(digest, hash("secret1").unwrap());
    }
}
