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

pub use availability_repository::AvailabilityRepository;
pub use chat_repository::ChatRepository;
pub use club_repository::ClubRepository;
pub use event_repository::EventRepository;
pub use invitation_repository::InvitationRepository;
pub use player_repository::PlayerRepository;
pub use post_repository::PostRepository;
pub use profile_repository::ProfileRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;
