//! Hostel catalogue views.

use sea_orm::DatabaseConnection;

use crate::{
    data::{hostel::HostelRepository, room::RoomRepository},
    error::Error,
    model::dto::{HostelDetailDto, HostelSummaryDto},
};

pub struct HostelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelService<'a> {
    /// Creates a new instance of [`HostelService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<HostelSummaryDto>, Error> {
        let hostel_repository = HostelRepository::new(self.db);

        let hostels = hostel_repository.list().await?;

        Ok(hostels.into_iter().map(HostelSummaryDto::from).collect())
    }

    /// A hostel with its rooms.
    pub async fn get(&self, hostel_id: i32) -> Result<HostelDetailDto, Error> {
        let hostel_repository = HostelRepository::new(self.db);
        let room_repository = RoomRepository::new(self.db);

        let hostel = hostel_repository
            .get(hostel_id)
            .await?
            .ok_or(Error::NotFound("Hostel not found"))?;

        let rooms = room_repository.list_by_hostel(hostel.id).await?;

        Ok(HostelDetailDto::from_parts(hostel, rooms))
    }
}
