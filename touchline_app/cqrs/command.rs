use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{config::Config, realtime::ClubChange, uow::UnitOfWork};

/// A write request, committed as a whole or not at all.
pub trait Command: Send + Sync {
    /// Change announced to the club once the command has been committed.
    fn change(&self) -> Option<ClubChange> {
        None
    }
}

/// Applies a command through the repositories of `uow`. Commit and rollback
/// belong to the bus.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError>;
}
