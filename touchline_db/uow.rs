use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use touchline_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use touchline_types::errors::{ApplicationError, DbError};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: PgPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let tx_arc = Arc::new(Mutex::new(tx));

        Ok(Box::new(PostgresUnitOfWork { tx: tx_arc }))
    }
}

/// Every repository handed out shares the same transaction.
#[derive(Debug, Clone)]
pub struct PostgresUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for PostgresUnitOfWork<'a> {
    fn users(&self) -> Arc<dyn UserRepository + 'a> {
        Arc::new(PostgresUserRepository::new(self.tx.clone()))
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository + 'a> {
        Arc::new(PostgresProfileRepository::new(self.tx.clone()))
    }

    fn clubs(&self) -> Arc<dyn ClubRepository + 'a> {
        Arc::new(PostgresClubRepository::new(self.tx.clone()))
    }

    fn chat(&self) -> Arc<dyn ChatRepository + 'a> {
        Arc::new(PostgresChatRepository::new(self.tx.clone()))
    }

    fn teams(&self) -> Arc<dyn TeamRepository + 'a> {
        Arc::new(PostgresTeamRepository::new(self.tx.clone()))
    }

    fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
        Arc::new(PostgresPlayerRepository::new(self.tx.clone()))
    }

    fn invitations(&self) -> Arc<dyn InvitationRepository + 'a> {
        Arc::new(PostgresInvitationRepository::new(self.tx.clone()))
    }

    fn events(&self) -> Arc<dyn EventRepository + 'a> {
        Arc::new(PostgresEventRepository::new(self.tx.clone()))
    }

    fn availabilities(&self) -> Arc<dyn AvailabilityRepository + 'a> {
        Arc::new(PostgresAvailabilityRepository::new(self.tx.clone()))
    }

    fn posts(&self) -> Arc<dyn PostRepository + 'a> {
        Arc::new(PostgresPostRepository::new(self.tx.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        // A repository still holding the transaction means a handler leaked it;
        // refuse to commit and let Drop roll back.
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .commit()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        } else {
            return Err(ApplicationError::Db(DbError::Transaction(
                "transaction still has multiple owners".to_string(),
            )));
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .rollback()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }
        Ok(())
    }
}
