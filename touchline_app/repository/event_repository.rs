use chrono::{DateTime, Utc};
use uuid::Uuid;

use touchline_club::{lineup::Composition, models::event::Event};
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait EventRepository: Send + Sync {
    /// Inserts or updates an event, composition included.
    async fn save(&self, event: &Event) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, event_id: Uuid) -> Result<Event, ApplicationError>;

    /// Events of a team, oldest first.
    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Event>, ApplicationError>;

    /// Events of a team starting at or after `from`, soonest first.
    async fn list_upcoming_by_team(
        &self,
        team_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Event>, ApplicationError>;

    /// Events of every team of a club starting at or after `from`, soonest first.
    async fn list_upcoming_by_club(
        &self,
        club_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Event>, ApplicationError>;

    /// Overwrites only the stored composition document.
    async fn save_composition(
        &self,
        event_id: Uuid,
        composition: &Composition,
    ) -> Result<(), ApplicationError>;

    async fn delete(&self, event_id: Uuid) -> Result<(), ApplicationError>;
}
