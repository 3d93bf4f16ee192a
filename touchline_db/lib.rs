//! PostgreSQL storage: one repository per aggregate, all sharing the
//! transaction of a [`uow::PostgresUnitOfWork`].

pub mod mapping;
pub mod uow;

mod connection;
mod models;
mod repository;

pub use connection::{DbPool, establish_connection_pool, establish_test_connection_pool};
pub use repository::*;
