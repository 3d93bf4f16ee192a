use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::repository::*;

/// A Unit of Work (UoW) works as a provider for repositories
/// that all operate within a single transaction.
#[async_trait::async_trait]
pub trait UnitOfWork<'a>: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository + 'a>;
    fn profiles(&self) -> Arc<dyn ProfileRepository + 'a>;
    fn clubs(&self) -> Arc<dyn ClubRepository + 'a>;
    fn chat(&self) -> Arc<dyn ChatRepository + 'a>;
    fn teams(&self) -> Arc<dyn TeamRepository + 'a>;
    fn players(&self) -> Arc<dyn PlayerRepository + 'a>;
    fn invitations(&self) -> Arc<dyn InvitationRepository + 'a>;
    fn events(&self) -> Arc<dyn EventRepository + 'a>;
    fn availabilities(&self) -> Arc<dyn AvailabilityRepository + 'a>;
    fn posts(&self) -> Arc<dyn PostRepository + 'a>;

    // Consume self to ensure the UoW is not used after commit/rollback
    async fn commit(self: Box<Self>) -> Result<(), ApplicationError>;
    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError>;
}

/// A factory for creating Unit of Work instances.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Begin a new Unit of Work (transaction).
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError>;
}
