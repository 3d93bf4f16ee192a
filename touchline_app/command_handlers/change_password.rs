use std::sync::Arc;

use touchline_types::Result;

use crate::{
    auth::{ensure_password_strength, hash_password},
    config::Config,
    cqrs::{CommandHandler, commands::ChangePassword},
    uow::UnitOfWork,
};

pub struct ChangePasswordCommandHandler {}

impl Default for ChangePasswordCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangePasswordCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ChangePassword> for ChangePasswordCommandHandler {
    async fn handle(
        &self,
        command: ChangePassword,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        ensure_password_strength(&command.new_password)?;
        let password_hash = hash_password(&command.new_password)?;
        uow.users()
            .update_password(command.ctx.user_id, &password_hash)
            .await?;
        Ok(())
    }
}
