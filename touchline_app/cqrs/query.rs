use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{config::Config, uow::UnitOfWork};

/// A read request. The unit of work it runs in is always rolled back.
pub trait Query: Send + Sync {
    type Output: Send + Sync;
}

#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
