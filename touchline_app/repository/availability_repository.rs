use uuid::Uuid;

use touchline_club::models::availability::Availability;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Inserts or updates the record of (event, player). An existing record
    /// keeps its id; the stored record is returned.
    async fn upsert(&self, availability: &Availability) -> Result<Availability, ApplicationError>;

    /// Updates status and notes of an existing record.
    async fn update(&self, availability: &Availability) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, availability_id: Uuid) -> Result<Availability, ApplicationError>;

    async fn get_for_player(
        &self,
        event_id: Uuid,
        player_id: Uuid,
    ) -> Result<Option<Availability>, ApplicationError>;

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Availability>, ApplicationError>;
}
