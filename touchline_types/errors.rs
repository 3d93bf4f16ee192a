use thiserror::Error;

pub mod app_error;
pub mod club_error;
pub mod db_error;

pub use app_error::AppError;
pub use club_error::ClubError;
pub use db_error::DbError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Top-level error of every command, query and repository call.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Club(#[from] ClubError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
