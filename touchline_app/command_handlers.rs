pub(crate) mod helpers;

mod accept_invitation;
mod add_player;
mod change_password;
mod create_event;
mod create_post;
mod create_team;
mod delete_event;
mod delete_player;
mod delete_post;
mod delete_team;
mod invite_player;
mod post_message;
mod register_club;
mod rename_team;
mod save_composition;
mod set_player_availability;
mod update_availability;
mod update_event;
mod update_player;
mod update_post;
mod update_profile;

pub use accept_invitation::AcceptInvitationCommandHandler;
pub use add_player::AddPlayerCommandHandler;
pub use change_password::ChangePasswordCommandHandler;
pub use create_event::CreateEventCommandHandler;
pub use create_post::CreatePostCommandHandler;
pub use create_team::CreateTeamCommandHandler;
pub use delete_event::DeleteEventCommandHandler;
pub use delete_player::DeletePlayerCommandHandler;
pub use delete_post::DeletePostCommandHandler;
pub use delete_team::DeleteTeamCommandHandler;
pub use invite_player::InvitePlayerCommandHandler;
pub use post_message::PostMessageCommandHandler;
pub use register_club::RegisterClubCommandHandler;
pub use rename_team::RenameTeamCommandHandler;
pub use save_composition::SaveCompositionCommandHandler;
pub use set_player_availability::SetPlayerAvailabilityCommandHandler;
pub use update_availability::UpdateAvailabilityCommandHandler;
pub use update_event::UpdateEventCommandHandler;
pub use update_player::UpdatePlayerCommandHandler;
pub use update_post::UpdatePostCommandHandler;
pub use update_profile::UpdateProfileCommandHandler;
