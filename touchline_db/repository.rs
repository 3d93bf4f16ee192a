mod availability_repository;
mod chat_repository;
mod club_repository;
mod event_repository;
mod invitation_repository;
mod player_repository;
mod post_repository;
mod profile_repository;
mod team_repository;
mod user_repository;

pub use availability_repository::PostgresAvailabilityRepository;
pub use chat_repository::PostgresChatRepository;
pub use club_repository::PostgresClubRepository;
pub use event_repository::PostgresEventRepository;
pub use invitation_repository::PostgresInvitationRepository;
pub use player_repository::PostgresPlayerRepository;
pub use post_repository::PostgresPostRepository;
pub use profile_repository::PostgresProfileRepository;
pub use team_repository::PostgresTeamRepository;
pub use user_repository::PostgresUserRepository;
