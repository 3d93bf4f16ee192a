use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::{ApplicationError, ClubError, DbError};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetSessionProfile},
    uow::UnitOfWork,
};

pub struct GetSessionProfileHandler {}

impl GetSessionProfileHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetSessionProfile> for GetSessionProfileHandler {
    async fn handle(
        &self,
        query: GetSessionProfile,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetSessionProfile as Query>::Output, ApplicationError> {
        match uow.profiles().get_by_user_id(query.user_id).await {
            Err(ApplicationError::Db(DbError::ProfileNotFound(_))) => {
                Err(ClubError::ProfilePending.into())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, setup_club, test_config};

    #[tokio::test]
    async fn test_users_without_profile_are_pending() -> Result<(), ApplicationError> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let handler = GetSessionProfileHandler::new();

        let profile = handler
            .handle(
                GetSessionProfile {
                    user_id: fixture.coach.user_id,
                },
                &mock_uow,
                &test_config(),
            )
            .await?;
        assert_eq!(profile.context(), fixture.coach);

        let pending = handler
            .handle(
                GetSessionProfile {
                    user_id: Uuid::new_v4(),
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            pending,
            Err(ApplicationError::Club(ClubError::ProfilePending))
        ));
        Ok(())
    }
}
