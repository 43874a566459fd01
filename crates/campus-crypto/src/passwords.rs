use anyhow::{Result, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{Error as HashError, SaltString, rand_core::OsRng},
};
use sha2::{Digest, Sha256};

/// One-way transform of a plaintext secret into a storable digest.
pub trait PasswordScheme: Send + Sync {
    /// Produce the digest to store for `password`.
    fn hash(&self, password: &str) -> Result<String>;

    /// Check `password` against a stored digest.
    ///
    /// `Ok(false)` means the password is wrong. `Err` means the stored
    /// digest itself is unusable.
    fn verify(&self, password: &str, digest: &str) -> Result<bool>;
}

/// Argon2id with a fresh random salt per hash, stored as a PHC string.
#[derive(Default)]
pub struct AdaptiveSaltedHash {
    argon2: Argon2<'static>,
}

impl AdaptiveSaltedHash {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordScheme for AdaptiveSaltedHash {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Password hashing failed: {}", e))?
            .to_string();
        Ok(digest)
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool> {
        let parsed =
            PasswordHash::new(digest).map_err(|e| anyhow!("Stored digest is malformed: {}", e))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(anyhow!("Password verification failed: {}", e)),
        }
    }
}

/// Lowercase hex SHA-256 of the password bytes. No salt, no work factor.
#[derive(Default, Clone, Copy)]
pub struct FastUnsaltedHash;

impl FastUnsaltedHash {
    pub fn digest(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }
}

impl PasswordScheme for FastUnsaltedHash {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(Self::digest(password))
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool> {
        Ok(Self::digest(password) == digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_hash_verifies_own_digest() {
        let scheme = AdaptiveSaltedHash::new();
        let digest = scheme.hash("correct horse").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(scheme.verify("correct horse", &digest).unwrap());
        assert!(!scheme.verify("battery staple", &digest).unwrap());
    }

    #[test]
    fn adaptive_hash_is_salted() {
        let scheme = AdaptiveSaltedHash::new();
        let a = scheme.hash("same-password").unwrap();
        let b = scheme.hash("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn adaptive_verify_rejects_garbage_digest() {
        let scheme = AdaptiveSaltedHash::new();
        assert!(scheme.verify("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn fast_hash_matches_known_sha256() {
        assert_eq!(
            FastUnsaltedHash::digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn fast_hash_is_deterministic_and_unsalted() {
        let scheme = FastUnsaltedHash;
        let a = scheme.hash("hunter2").unwrap();
        let b = scheme.hash("hunter2").unwrap();
        assert_eq!(a, b);
        assert!(scheme.verify("hunter2", &a).unwrap());
        assert!(!scheme.verify("hunter3", &a).unwrap());
    }

    #[test]
    fn schemes_are_not_interchangeable() {
        let fast = FastUnsaltedHash.hash("pw").unwrap();
        assert!(AdaptiveSaltedHash::new().verify("pw", &fast).is_err());
    }
}
