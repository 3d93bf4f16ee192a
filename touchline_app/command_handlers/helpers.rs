use std::collections::HashMap;
use uuid::Uuid;

use touchline_club::models::{
    event::Event, player::Player, post::Post, profile::ClubContext, team::Team,
};
use touchline_types::{
    Result,
    errors::{ApplicationError, DbError},
};

use crate::uow::UnitOfWork;

pub(crate) const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Loads a team and checks it belongs to the caller's club.
pub(crate) async fn club_team(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    ctx: &ClubContext,
    team_id: Uuid,
) -> Result<Team> {
    let team = uow.teams().get_by_id(team_id).await?;
    team.ensure_in_club(ctx.club_id)?;
    Ok(team)
}

/// Loads a roster player together with its team, scoped to the caller's club.
pub(crate) async fn club_player(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    ctx: &ClubContext,
    player_id: Uuid,
) -> Result<(Player, Team)> {
    let player = uow.players().get_by_id(player_id).await?;
    let team = club_team(uow, ctx, player.team_id).await?;
    Ok((player, team))
}

/// Loads an event together with its team, scoped to the caller's club.
pub(crate) async fn club_event(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    ctx: &ClubContext,
    event_id: Uuid,
) -> Result<(Event, Team)> {
    let event = uow.events().get_by_id(event_id).await?;
    let team = club_team(uow, ctx, event.team_id).await?;
    Ok((event, team))
}

/// Posts of other clubs are reported as missing.
pub(crate) async fn club_post(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    ctx: &ClubContext,
    post_id: Uuid,
) -> Result<Post> {
    let post = uow.posts().get_by_id(post_id).await?;
    if post.club_id != ctx.club_id {
        return Err(ApplicationError::Db(DbError::PostNotFound(post_id)));
    }
    Ok(post)
}

/// Full names of the club members, keyed by user id.
pub(crate) async fn member_names(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    club_id: Uuid,
) -> Result<HashMap<Uuid, String>> {
    Ok(uow
        .profiles()
        .list_by_club(club_id)
        .await?
        .into_iter()
        .map(|p| (p.user_id, p.full_name))
        .collect())
}

pub(crate) fn author_name(names: &HashMap<Uuid, String>, user_id: Uuid) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
