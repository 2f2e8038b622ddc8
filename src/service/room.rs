//! Room catalogue operations.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::room::{RoomFields, RoomRepository},
    error::Error,
    model::dto::{CreateRoomDto, RoomDto, UpdateRoomDto},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    /// Creates a new instance of [`RoomService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<RoomDto>, Error> {
        let room_repository = RoomRepository::new(self.db);

        let rooms = room_repository.list().await?;

        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    pub async fn get(&self, room_id: i32) -> Result<RoomDto, Error> {
        let room_repository = RoomRepository::new(self.db);

        let room = room_repository
            .get(room_id)
            .await?
            .ok_or(Error::NotFound("Room not found"))?;

        Ok(RoomDto::from(room))
    }

    /// Creates a room after checking the required fields are present.
    pub async fn create(&self, dto: CreateRoomDto) -> Result<RoomDto, Error> {
        let (Some(room_number), Some(room_type), Some(occupancy_limit), Some(price_per_semester)) = (
            dto.room_number,
            dto.room_type,
            dto.occupancy_limit,
            dto.price_per_semester,
        ) else {
            return Err(Error::Validation("Missing required fields"));
        };

        let room_repository = RoomRepository::new(self.db);

        let room = room_repository
            .create(RoomFields {
                room_number,
                room_type,
                description: dto.description,
                occupancy_limit,
                price_per_semester,
                image_url: dto.image_url,
                hostel_id: dto.hostel_id,
            })
            .await?;

        info!("Created room {} ({})", room.id, room.room_number);

        Ok(RoomDto::from(room))
    }

    pub async fn update(&self, room_id: i32, dto: UpdateRoomDto) -> Result<RoomDto, Error> {
        let room_repository = RoomRepository::new(self.db);

        let room = room_repository
            .update(
                room_id,
                RoomFields {
                    room_number: dto.room_number,
                    room_type: dto.room_type,
                    description: dto.description,
                    occupancy_limit: dto.occupancy_limit,
                    price_per_semester: dto.price_per_semester,
                    image_url: dto.image_url,
                    hostel_id: dto.hostel_id,
                },
            )
            .await?
            .ok_or(Error::NotFound("Room not found"))?;

        Ok(RoomDto::from(room))
    }

    pub async fn delete(&self, room_id: i32) -> Result<(), Error> {
        let room_repository = RoomRepository::new(self.db);

        let result = room_repository.delete(room_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("Room not found"));
        }

        info!("Deleted room {}", room_id);

        Ok(())
    }
}
