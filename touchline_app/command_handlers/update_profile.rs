use std::sync::Arc;

use touchline_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdateProfile},
    uow::UnitOfWork,
};

pub struct UpdateProfileCommandHandler {}

impl Default for UpdateProfileCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProfileCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateProfile> for UpdateProfileCommandHandler {
    async fn handle(
        &self,
        command: UpdateProfile,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let profile_repo = uow.profiles();
        let mut profile = profile_repo.get_by_user_id(command.ctx.user_id).await?;
        profile.rename(&command.full_name)?;
        profile_repo.save(&profile).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use touchline_types::{
        Result,
        errors::{ApplicationError, ClubError},
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, setup_club, test_config};

    #[tokio::test]
    async fn test_update_profile_renames() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let handler = UpdateProfileCommandHandler::new();

        handler
            .handle(
                UpdateProfile {
                    ctx: fixture.coach,
                    full_name: " Eddie Jones ".to_string(),
                },
                &mock_uow,
                &test_config(),
            )
            .await?;
        let profile = mock_uow.profiles().get_by_user_id(fixture.coach.user_id).await?;
        assert_eq!(profile.full_name, "Eddie Jones");

        let result = handler
            .handle(
                UpdateProfile {
                    ctx: fixture.coach,
                    full_name: "".to_string(),
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::MissingField("full name")))
        ));
        Ok(())
    }
}
