mod authenticate_user;
mod get_account;
mod get_availability;
mod get_dashboard;
mod get_event;
mod get_player;
mod get_post;
mod get_session_profile;
mod get_team;
mod list_chat_messages;
mod list_posts;
mod list_team_events;
mod list_team_players;
mod list_teams;
mod list_upcoming_events;
mod load_blackboard;

pub use authenticate_user::AuthenticateUserHandler;
pub use get_account::GetAccountHandler;
pub use get_availability::GetAvailabilityHandler;
pub use get_dashboard::GetDashboardHandler;
pub use get_event::GetEventHandler;
pub use get_player::GetPlayerHandler;
pub use get_post::GetPostHandler;
pub use get_session_profile::GetSessionProfileHandler;
pub use get_team::GetTeamHandler;
pub use list_chat_messages::ListChatMessagesHandler;
pub use list_posts::ListPostsHandler;
pub use list_team_events::ListTeamEventsHandler;
pub use list_team_players::ListTeamPlayersHandler;
pub use list_teams::ListTeamsHandler;
pub use list_upcoming_events::ListUpcomingEventsHandler;
pub use load_blackboard::LoadBlackboardHandler;
