//! Notification feed for the authenticated user.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository, error::Error, model::dto::NotificationDto,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<NotificationDto>, Error> {
        let notification_repository = NotificationRepository::new(self.db);

        let notifications = notification_repository.list_for_user(user_id).await?;

        Ok(notifications.into_iter().map(NotificationDto::from).collect())
    }
}
