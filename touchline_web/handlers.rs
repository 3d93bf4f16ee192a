mod account_handler;
mod auth_handler;
mod availability_handler;
mod blackboard_handler;
mod chat_handler;
mod dashboard_handler;
mod event_handler;
mod helpers;
mod player_handler;
mod post_handler;
mod team_handler;

pub use account_handler::{ChangePasswordForm, UpdateMeForm, change_password, me, update_me};
pub use auth_handler::{
    AcceptInvitationForm, LoginForm, SignupForm, accept_invitation, login, logout, signup,
};
pub use availability_handler::{
    AvailabilityForm, get_availability, set_player_availability, update_availability,
};
pub use blackboard_handler::{
    AssignForm, BlackboardView, PositionEntry, ResetForm, SaveCompositionForm, UnassignForm,
    assign_position, load_blackboard, positions, reset_board, save_composition, unassign_player,
};
pub use chat_handler::{
    ChatHistoryParams, ChatMessageForm, list_chat_messages, post_chat_message, wait_for_change,
};
pub use dashboard_handler::dashboard;
pub use event_handler::{
    EventForm, create_event, delete_event, get_event, list_team_events, update_event,
    upcoming_events,
};
pub use helpers::{ApiError, CurrentUser, SESSION_COOKIE, not_found};
pub use player_handler::{
    InviteForm, PlayerForm, add_player, delete_player, get_player, invite_player, list_players,
    update_player,
};
pub use post_handler::{
    PostFilter, PostForm, create_post, delete_post, get_post, list_posts, update_post,
};
pub use team_handler::{TeamForm, create_team, delete_team, get_team, list_teams, rename_team};
