use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

use touchline_types::errors::{AppError, ApplicationError, DbError};

pub type DbPool = PgPool;

pub async fn establish_connection_pool() -> Result<DbPool, ApplicationError> {
    init_connection_pool("DATABASE_URL").await
}

pub async fn establish_test_connection_pool() -> Result<DbPool, ApplicationError> {
    init_connection_pool("TEST_DATABASE_URL").await
}

async fn init_connection_pool(database_env: &'static str) -> Result<DbPool, ApplicationError> {
    dotenvy::dotenv().ok();

    let database_url =
        env::var(database_env).map_err(|_| AppError::MissingConfig(database_env))?;

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))
}
