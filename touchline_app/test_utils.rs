#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use touchline_club::{
        lineup::Composition,
        models::{
            availability::Availability,
            chat::{Channel, ChatMessage},
            club::Club,
            event::Event,
            invitation::Invitation,
            player::{Player, PlayerDetails},
            post::Post,
            profile::{ClubContext, Profile},
            team::Team,
        },
    };
    use touchline_types::{
        Result,
        common::User,
        errors::{ApplicationError, DbError},
        roles::Role,
    };

    use crate::{
        auth::hash_password,
        config::Config,
        repository::{
            AvailabilityRepository, ChatRepository, ClubRepository, EventRepository,
            InvitationRepository, PlayerRepository, PostRepository, ProfileRepository,
            TeamRepository, UserRepository,
        },
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    pub const TEST_PASSWORD: &str = "touchline!";

    pub fn test_config() -> Arc<Config> {
        Arc::new(Config {
            auth_cookie_secret: "x".repeat(64),
            http_port: 0,
            public_url: "http://touchline.test".to_string(),
            chat_history: 100,
            chat_wait_secs: 1,
        })
    }

    #[derive(Default, Clone)]
    pub struct MockUserRepository {
        users: Arc<Mutex<HashMap<Uuid, User>>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: &User) -> Result<(), ApplicationError> {
            let mut users = self.users.lock().unwrap();
            if users
                .values()
                .any(|u| u.email == user.email && u.id != user.id)
            {
                return Err(ApplicationError::Db(DbError::EmailTaken(user.email.clone())));
            }
            users.insert(user.id, user.clone());
            Ok(())
        }

        async fn get_by_email(&self, email: &str) -> Result<User, ApplicationError> {
            self.users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::UserByEmailNotFound(email.to_string())))
        }

        async fn get_by_id(&self, id: Uuid) -> Result<User, ApplicationError> {
            if let Some(user) = self.users.lock().unwrap().get(&id) {
                return Ok(user.clone());
            }
            Err(ApplicationError::Db(DbError::UserByIdNotFound(id)))
        }

        async fn update_password(
            &self,
            user_id: Uuid,
            password_hash: &str,
        ) -> Result<(), ApplicationError> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .get(&user_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::UserByIdNotFound(user_id)))?;
            users.insert(
                user_id,
                User::new(user.id, user.email, password_hash.to_string()),
            );
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockProfileRepository {
        profiles: Arc<Mutex<HashMap<Uuid, Profile>>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn save(&self, profile: &Profile) -> Result<(), ApplicationError> {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.user_id, profile.clone());
            Ok(())
        }

        async fn get_by_user_id(&self, user_id: Uuid) -> Result<Profile, ApplicationError> {
            self.profiles
                .lock()
                .unwrap()
                .get(&user_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::ProfileNotFound(user_id)))
        }

        async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Profile>, ApplicationError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.club_id == club_id)
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockClubRepository {
        clubs: Arc<Mutex<HashMap<Uuid, Club>>>,
    }

    #[async_trait]
    impl ClubRepository for MockClubRepository {
        async fn save(&self, club: &Club) -> Result<(), ApplicationError> {
            self.clubs.lock().unwrap().insert(club.id, club.clone());
            Ok(())
        }

        async fn get_by_id(&self, club_id: Uuid) -> Result<Club, ApplicationError> {
            self.clubs
                .lock()
                .unwrap()
                .get(&club_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::ClubNotFound(club_id)))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockChatRepository {
        channels: Arc<Mutex<HashMap<Uuid, Channel>>>,
        messages: Arc<Mutex<Vec<ChatMessage>>>,
    }

    #[async_trait]
    impl ChatRepository for MockChatRepository {
        async fn save_channel(&self, channel: &Channel) -> Result<(), ApplicationError> {
            self.channels
                .lock()
                .unwrap()
                .insert(channel.club_id, channel.clone());
            Ok(())
        }

        async fn get_channel_by_club(&self, club_id: Uuid) -> Result<Channel, ApplicationError> {
            self.channels
                .lock()
                .unwrap()
                .get(&club_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::ChannelNotFound(club_id)))
        }

        async fn save_message(&self, message: &ChatMessage) -> Result<(), ApplicationError> {
            self.messages.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn list_recent_messages(
            &self,
            channel_id: Uuid,
            limit: usize,
        ) -> Result<Vec<ChatMessage>, ApplicationError> {
            let mut messages: Vec<ChatMessage> = self
                .messages
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.channel_id == channel_id)
                .cloned()
                .collect();
            messages.sort_by_key(|m| m.created_at);
            let skip = messages.len().saturating_sub(limit);
            Ok(messages.into_iter().skip(skip).collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockTeamRepository {
        teams: Arc<Mutex<HashMap<Uuid, Team>>>,
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn save(&self, team: &Team) -> Result<(), ApplicationError> {
            self.teams.lock().unwrap().insert(team.id, team.clone());
            Ok(())
        }

        async fn get_by_id(&self, team_id: Uuid) -> Result<Team, ApplicationError> {
            self.teams
                .lock()
                .unwrap()
                .get(&team_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::TeamNotFound(team_id)))
        }

        async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Team>, ApplicationError> {
            let mut teams: Vec<Team> = self
                .teams
                .lock()
                .unwrap()
                .values()
                .filter(|t| t.club_id == club_id)
                .cloned()
                .collect();
            teams.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(teams)
        }

        async fn delete(&self, team_id: Uuid) -> Result<(), ApplicationError> {
            self.teams.lock().unwrap().remove(&team_id);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<HashMap<Uuid, Player>>>,
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
            self.players
                .lock()
                .unwrap()
                .insert(player.id, player.clone());
            Ok(())
        }

        async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
            self.players
                .lock()
                .unwrap()
                .get(&player_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))
        }

        async fn get_by_user_id(&self, user_id: Uuid) -> Result<Player, ApplicationError> {
            self.players
                .lock()
                .unwrap()
                .values()
                .find(|p| p.user_id == Some(user_id))
                .cloned()
                .ok_or(ApplicationError::Db(DbError::UserPlayerNotFound(user_id)))
        }

        async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, ApplicationError> {
            let mut players: Vec<Player> = self
                .players
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.team_id == team_id)
                .cloned()
                .collect();
            players.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(players)
        }

        async fn delete(&self, player_id: Uuid) -> Result<(), ApplicationError> {
            self.players.lock().unwrap().remove(&player_id);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockInvitationRepository {
        invitations: Arc<Mutex<HashMap<String, Invitation>>>,
    }

    #[async_trait]
    impl InvitationRepository for MockInvitationRepository {
        async fn save(&self, invitation: &Invitation) -> Result<(), ApplicationError> {
            self.invitations
                .lock()
                .unwrap()
                .insert(invitation.token.clone(), invitation.clone());
            Ok(())
        }

        async fn get_by_token(&self, token: &str) -> Result<Invitation, ApplicationError> {
            self.invitations
                .lock()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::InvitationNotFound))
        }
    }

    /// Shares the team map of [`MockTeamRepository`] to resolve club events.
    #[derive(Default, Clone)]
    pub struct MockEventRepository {
        events: Arc<Mutex<HashMap<Uuid, Event>>>,
        teams: Arc<Mutex<HashMap<Uuid, Team>>>,
    }

    impl MockEventRepository {
        fn sorted(&self, filter: impl Fn(&Event) -> bool) -> Vec<Event> {
            let mut events: Vec<Event> = self
                .events
                .lock()
                .unwrap()
                .values()
                .filter(|e| filter(e))
                .cloned()
                .collect();
            events.sort_by_key(|e| e.starts_at);
            events
        }
    }

    #[async_trait]
    impl EventRepository for MockEventRepository {
        async fn save(&self, event: &Event) -> Result<(), ApplicationError> {
            self.events.lock().unwrap().insert(event.id, event.clone());
            Ok(())
        }

        async fn get_by_id(&self, event_id: Uuid) -> Result<Event, ApplicationError> {
            self.events
                .lock()
                .unwrap()
                .get(&event_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::EventNotFound(event_id)))
        }

        async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Event>, ApplicationError> {
            Ok(self.sorted(|e| e.team_id == team_id))
        }

        async fn list_upcoming_by_team(
            &self,
            team_id: Uuid,
            from: DateTime<Utc>,
        ) -> Result<Vec<Event>, ApplicationError> {
            Ok(self.sorted(|e| e.team_id == team_id && e.starts_at >= from))
        }

        async fn list_upcoming_by_club(
            &self,
            club_id: Uuid,
            from: DateTime<Utc>,
        ) -> Result<Vec<Event>, ApplicationError> {
            let teams = self.teams.lock().unwrap().clone();
            Ok(self.sorted(|e| {
                e.starts_at >= from
                    && teams
                        .get(&e.team_id)
                        .is_some_and(|t| t.club_id == club_id)
            }))
        }

        async fn save_composition(
            &self,
            event_id: Uuid,
            composition: &Composition,
        ) -> Result<(), ApplicationError> {
            let mut events = self.events.lock().unwrap();
            let event = events
                .get_mut(&event_id)
                .ok_or(ApplicationError::Db(DbError::EventNotFound(event_id)))?;
            event.composition = composition.clone();
            Ok(())
        }

        async fn delete(&self, event_id: Uuid) -> Result<(), ApplicationError> {
            self.events.lock().unwrap().remove(&event_id);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockAvailabilityRepository {
        availabilities: Arc<Mutex<HashMap<Uuid, Availability>>>,
    }

    #[async_trait]
    impl AvailabilityRepository for MockAvailabilityRepository {
        async fn upsert(
            &self,
            availability: &Availability,
        ) -> Result<Availability, ApplicationError> {
            let mut availabilities = self.availabilities.lock().unwrap();
            let existing = availabilities
                .values()
                .find(|a| {
                    a.event_id == availability.event_id && a.player_id == availability.player_id
                })
                .map(|a| a.id);

            let mut stored = availability.clone();
            if let Some(id) = existing {
                stored.id = id;
            }
            availabilities.insert(stored.id, stored.clone());
            Ok(stored)
        }

        async fn update(&self, availability: &Availability) -> Result<(), ApplicationError> {
            let mut availabilities = self.availabilities.lock().unwrap();
            if !availabilities.contains_key(&availability.id) {
                return Err(ApplicationError::Db(DbError::AvailabilityNotFound(
                    availability.id,
                )));
            }
            availabilities.insert(availability.id, availability.clone());
            Ok(())
        }

        async fn get_by_id(&self, availability_id: Uuid) -> Result<Availability, ApplicationError> {
            self.availabilities
                .lock()
                .unwrap()
                .get(&availability_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::AvailabilityNotFound(
                    availability_id,
                )))
        }

        async fn get_for_player(
            &self,
            event_id: Uuid,
            player_id: Uuid,
        ) -> Result<Option<Availability>, ApplicationError> {
            Ok(self
                .availabilities
                .lock()
                .unwrap()
                .values()
                .find(|a| a.event_id == event_id && a.player_id == player_id)
                .cloned())
        }

        async fn list_by_event(
            &self,
            event_id: Uuid,
        ) -> Result<Vec<Availability>, ApplicationError> {
            Ok(self
                .availabilities
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.event_id == event_id)
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockPostRepository {
        posts: Arc<Mutex<HashMap<Uuid, Post>>>,
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn save(&self, post: &Post) -> Result<(), ApplicationError> {
            self.posts.lock().unwrap().insert(post.id, post.clone());
            Ok(())
        }

        async fn get_by_id(&self, post_id: Uuid) -> Result<Post, ApplicationError> {
            self.posts
                .lock()
                .unwrap()
                .get(&post_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::PostNotFound(post_id)))
        }

        async fn list_by_club(
            &self,
            club_id: Uuid,
            team_id: Option<Uuid>,
        ) -> Result<Vec<Post>, ApplicationError> {
            let mut posts: Vec<Post> = self
                .posts
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.club_id == club_id && p.team_id == team_id)
                .cloned()
                .collect();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(posts)
        }

        async fn delete(&self, post_id: Uuid) -> Result<(), ApplicationError> {
            self.posts.lock().unwrap().remove(&post_id);
            Ok(())
        }
    }

    /// In-memory unit of work. Clones share the same data, so a provider can
    /// hand out several units of work over one store.
    #[derive(Clone)]
    pub struct MockUnitOfWork {
        users: Arc<MockUserRepository>,
        profiles: Arc<MockProfileRepository>,
        clubs: Arc<MockClubRepository>,
        chat: Arc<MockChatRepository>,
        teams: Arc<MockTeamRepository>,
        players: Arc<MockPlayerRepository>,
        invitations: Arc<MockInvitationRepository>,
        events: Arc<MockEventRepository>,
        availabilities: Arc<MockAvailabilityRepository>,
        posts: Arc<MockPostRepository>,

        // Flags to check if commit/rollback was called
        committed: Arc<Mutex<bool>>,
        rolled_back: Arc<Mutex<bool>>,
    }

    impl Default for MockUnitOfWork {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            let teams = MockTeamRepository::default();
            let events = MockEventRepository {
                teams: teams.teams.clone(),
                ..Default::default()
            };

            Self {
                users: Default::default(),
                profiles: Default::default(),
                clubs: Default::default(),
                chat: Default::default(),
                teams: Arc::new(teams),
                players: Default::default(),
                invitations: Default::default(),
                events: Arc::new(events),
                availabilities: Default::default(),
                posts: Default::default(),
                committed: Default::default(),
                rolled_back: Default::default(),
            }
        }

        pub fn committed(&self) -> bool {
            *self.committed.lock().unwrap()
        }

        pub fn rolled_back(&self) -> bool {
            *self.rolled_back.lock().unwrap()
        }

        pub fn boxed(&self) -> Box<dyn UnitOfWork<'static>> {
            Box::new(self.clone())
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository + 'a> {
            self.users.clone()
        }

        fn profiles(&self) -> Arc<dyn ProfileRepository + 'a> {
            self.profiles.clone()
        }

        fn clubs(&self) -> Arc<dyn ClubRepository + 'a> {
            self.clubs.clone()
        }

        fn chat(&self) -> Arc<dyn ChatRepository + 'a> {
            self.chat.clone()
        }

        fn teams(&self) -> Arc<dyn TeamRepository + 'a> {
            self.teams.clone()
        }

        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        fn invitations(&self) -> Arc<dyn InvitationRepository + 'a> {
            self.invitations.clone()
        }

        fn events(&self) -> Arc<dyn EventRepository + 'a> {
            self.events.clone()
        }

        fn availabilities(&self) -> Arc<dyn AvailabilityRepository + 'a> {
            self.availabilities.clone()
        }

        fn posts(&self) -> Arc<dyn PostRepository + 'a> {
            self.posts.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.committed.lock().unwrap() = true;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.rolled_back.lock().unwrap() = true;
            Ok(())
        }
    }

    /// Hands out units of work over one shared in-memory store.
    #[derive(Clone, Default)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self {
                uow: MockUnitOfWork::new(),
            }
        }

        /// Direct access to the shared store, for seeding and assertions.
        pub fn uow(&self) -> &MockUnitOfWork {
            &self.uow
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.uow.clone());
            Ok(uow)
        }
    }

    /// A club with its coach, chat channel and one team.
    #[derive(Debug, Clone)]
    pub struct ClubFixture {
        pub club: Club,
        pub channel: Channel,
        pub coach_user: User,
        pub coach: ClubContext,
        pub team: Team,
    }

    pub async fn setup_club(uow: &MockUnitOfWork) -> Result<ClubFixture> {
        let users = uow.users();
        let coach_user = User::new(
            Uuid::new_v4(),
            format!("coach_{}@example.com", Uuid::new_v4().simple()),
            hash_password(TEST_PASSWORD)?,
        );
        users.save(&coach_user).await?;

        let club = Club::new(Uuid::new_v4(), "Stade Touchline", Some("Toulouse".to_string()))?;
        uow.clubs().save(&club).await?;
        let channel = Channel::for_club(&club);
        uow.chat().save_channel(&channel).await?;

        let profile = Profile::new(coach_user.id, club.id, Role::AdminCoach, "Coach Carter")?;
        uow.profiles().save(&profile).await?;

        let team = Team::new(Uuid::new_v4(), club.id, "Seniors")?;
        uow.teams().save(&team).await?;

        Ok(ClubFixture {
            club,
            channel,
            coach_user,
            coach: profile.context(),
            team,
        })
    }

    /// Adds a roster player to `team`. When `with_account` is set, the player
    /// also gets a user and a `player` profile and its context is returned.
    pub async fn add_roster_player(
        uow: &MockUnitOfWork,
        team: &Team,
        name: &str,
        positions: &[&str],
        with_account: bool,
    ) -> Result<(Player, Option<ClubContext>)> {
        let mut player = Player::new(
            Uuid::new_v4(),
            team.id,
            PlayerDetails {
                name: name.to_string(),
                positions: positions.iter().map(|p| p.to_string()).collect(),
                ..Default::default()
            },
        )?;

        let mut ctx = None;
        if with_account {
            let user = User::new(
                Uuid::new_v4(),
                format!("{}_{}@example.com", name.to_lowercase(), Uuid::new_v4().simple()),
                hash_password(TEST_PASSWORD)?,
            );
            uow.users().save(&user).await?;
            let profile = Profile::new(user.id, team.club_id, Role::Player, name)?;
            uow.profiles().save(&profile).await?;
            player.email = Some(user.email.clone());
            player.link_user(user.id)?;
            ctx = Some(profile.context());
        }

        uow.players().save(&player).await?;
        Ok((player, ctx))
    }
}
