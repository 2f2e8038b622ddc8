use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct HostelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HostelRepository<'a, C> {
    /// Creates a new instance of [`HostelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::hostel::Model>, DbErr> {
        entity::prelude::Hostel::find().all(self.db).await
    }

    pub async fn get(&self, hostel_id: i32) -> Result<Option<entity::hostel::Model>, DbErr> {
        entity::prelude::Hostel::find_by_id(hostel_id).one(self.db).await
    }
}
