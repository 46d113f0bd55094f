//! Argon2id credential hashing adapter.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use crate::domain::ports::{CredentialError, CredentialHasher};

/// [`CredentialHasher`] producing PHC-format Argon2id hashes with a random
/// per-credential salt.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2CredentialHasher;

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|error| CredentialError::Crypto {
                message: format!("hashing failed: {error}"),
            })
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError> {
        let parsed = PasswordHash::new(hash).map_err(|error| CredentialError::Crypto {
            message: format!("stored hash is malformed: {error}"),
        })?;
        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(error) => Err(CredentialError::Crypto {
                message: format!("verification failed: {error}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hasher = Argon2CredentialHasher;
        let hash = hasher.hash("kopi-o-kosong").expect("hashing succeeds");

        assert_ne!(hash, "kopi-o-kosong");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("kopi-o-kosong", &hash).expect("verify"));
    }

    #[test]
    fn wrong_password_verifies_false_without_error() {
        let hasher = Argon2CredentialHasher;
        let hash = hasher.hash("kopi-o-kosong").expect("hashing succeeds");
        assert!(!hasher.verify("teh-tarik", &hash).expect("verify"));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let hasher = Argon2CredentialHasher;
        let first = hasher.hash("same").expect("hashing succeeds");
        let second = hasher.hash("same").expect("hashing succeeds");
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let hasher = Argon2CredentialHasher;
        assert!(hasher.verify("anything", "not-a-phc-string").is_err());
    }
}
