use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use touchline_types::{
    Result,
    errors::{AppError, ClubError},
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hashed = argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hashed)
}

pub fn verify_password(hash: &str, password: &str) -> Result<(), AppError> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash)?)
}

pub fn ensure_password_strength(password: &str) -> Result<(), ClubError> {
    if password.is_empty() {
        return Err(ClubError::MissingField("password"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ClubError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
