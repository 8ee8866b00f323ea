//! Password sealing and comparison for both storage modes.

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use configs::PasswordStorage;
use rand::rngs::OsRng;

use super::errors::AuthError;

/// Turn a registration password into what the store keeps.
pub fn seal(storage: PasswordStorage, password: &str) -> Result<String, AuthError> {
    match storage {
        PasswordStorage::Plain => Ok(password.to_string()),
        PasswordStorage::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| AuthError::Hash(e.to_string()))?
                .to_string();
            Ok(hash)
        }
    }
}

/// Exact comparison of a candidate against a stored credential.
pub fn matches(storage: PasswordStorage, stored: &str, candidate: &str) -> bool {
    match storage {
        PasswordStorage::Plain => stored == candidate,
        PasswordStorage::Argon2 => match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default().verify_password(candidate.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        },
    }
}
