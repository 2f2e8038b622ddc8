use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Column values for creating or replacing a room row.
pub struct RoomFields {
    pub room_number: String,
    pub room_type: String,
    pub description: Option<String>,
    pub occupancy_limit: i32,
    pub price_per_semester: f64,
    pub image_url: Option<String>,
    pub hostel_id: Option<i32>,
}

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: RoomFields) -> Result<entity::room::Model, DbErr> {
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(fields.room_number),
            room_type: ActiveValue::Set(fields.room_type),
            description: ActiveValue::Set(fields.description),
            occupancy_limit: ActiveValue::Set(fields.occupancy_limit),
            price_per_semester: ActiveValue::Set(fields.price_per_semester),
            image_url: ActiveValue::Set(fields.image_url),
            hostel_id: ActiveValue::Set(fields.hostel_id),
            ..Default::default()
        };

        room.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find().all(self.db).await
    }

    pub async fn get(&self, room_id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(room_id).one(self.db).await
    }

    pub async fn list_by_hostel(&self, hostel_id: i32) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::HostelId.eq(hostel_id))
            .all(self.db)
            .await
    }

    /// Replaces all mutable columns of a room.
    ///
    /// Returns `Ok(None)` when no row with the id exists.
    pub async fn update(
        &self,
        room_id: i32,
        fields: RoomFields,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let room = match entity::prelude::Room::find_by_id(room_id).one(self.db).await? {
            Some(room) => room,
            None => return Ok(None),
        };

        let mut room_am = room.into_active_model();
        room_am.room_number = ActiveValue::Set(fields.room_number);
        room_am.room_type = ActiveValue::Set(fields.room_type);
        room_am.description = ActiveValue::Set(fields.description);
        room_am.occupancy_limit = ActiveValue::Set(fields.occupancy_limit);
        room_am.price_per_semester = ActiveValue::Set(fields.price_per_semester);
        room_am.image_url = ActiveValue::Set(fields.image_url);
        room_am.hostel_id = ActiveValue::Set(fields.hostel_id);

        let room = room_am.update(self.db).await?;

        Ok(Some(room))
    }

    /// Deletes a room.
    ///
    /// Returns OK regardless of the room existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, room_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Room::delete_by_id(room_id).exec(self.db).await
    }
}
