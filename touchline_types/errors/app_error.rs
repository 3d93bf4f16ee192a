use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wrong authentication credentials")]
    WrongAuthCredentials,

    #[error("Wrong password")]
    PasswordError,

    #[error(transparent)]
    PasswordHash(#[from] argon2::password_hash::Error),

    #[error("You need to set env {0}")]
    MissingConfig(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
}
