//! Database fixtures for test setup.
//!
//! Insert helpers return the created models so tests can reference generated ids.
//! All fixture users share [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD).

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    error::TestError,
};

pub struct Fixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> Fixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with the shared test password and the given role.
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        role: &str,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn insert_hostel(&self, name: &str) -> Result<entity::hostel::Model, TestError> {
        let hostel = entity::hostel::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(format!("{} street", name)),
            total_rooms: ActiveValue::Set(20),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(hostel.insert(self.db).await?)
    }

    pub async fn insert_room(
        &self,
        room_number: &str,
        hostel_id: Option<i32>,
    ) -> Result<entity::room::Model, TestError> {
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(room_number.to_string()),
            room_type: ActiveValue::Set("double".to_string()),
            description: ActiveValue::Set(Some("Fixture room".to_string())),
            occupancy_limit: ActiveValue::Set(2),
            price_per_semester: ActiveValue::Set(1200.0),
            image_url: ActiveValue::Set(None),
            hostel_id: ActiveValue::Set(hostel_id),
            ..Default::default()
        };

        Ok(room.insert(self.db).await?)
    }

    pub async fn insert_application(
        &self,
        user_id: i32,
        room_id: Option<i32>,
        status: &str,
    ) -> Result<entity::application::Model, TestError> {
        let application = entity::application::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            room_id: ActiveValue::Set(room_id),
            status: ActiveValue::Set(status.to_string()),
            special_needs: ActiveValue::Set(None),
            additional_notes: ActiveValue::Set(None),
            academic_year: ActiveValue::Set(Some("2026/2027".to_string())),
            semester: ActiveValue::Set(Some("first".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(application.insert(self.db).await?)
    }

    pub async fn insert_notification(
        &self,
        user_id: i32,
        message: &str,
    ) -> Result<entity::notification::Model, TestError> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            message: ActiveValue::Set(message.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(notification.insert(self.db).await?)
    }
}
