//! Application workflow: applying, listing, and the admin decision step.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{
        application::{ApplicationFields, ApplicationRepository},
        notification::NotificationRepository,
        room::RoomRepository,
    },
    error::Error,
    model::dto::{
        AdminApplicationRow, ApplicationDto, ApplyDto, AssignedRoomRow, MyApplicationRow,
        UpdateApplicationDto,
    },
};

/// Notification text for an application decision.
fn notification_message(status: &str, room_number: Option<&str>) -> String {
    match (status, room_number) {
        ("approved", Some(room_number)) => format!(
            "Your application has been approved and you have been assigned to Room {}.",
            room_number
        ),
        ("approved", None) => "Your application has been approved!".to_string(),
        ("rejected", _) => "Your application has been rejected.".to_string(),
        (status, _) => format!("Your application status has been updated to: {}.", status),
    }
}

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn apply(&self, user_id: i32, dto: ApplyDto) -> Result<ApplicationDto, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        let application = application_repository
            .create(
                user_id,
                ApplicationFields {
                    room_id: dto.room_id,
                    special_needs: dto.special_needs,
                    additional_notes: dto.additional_notes,
                    academic_year: dto.academic_year,
                    semester: dto.semester,
                },
            )
            .await?;

        info!("User {} submitted application {}", user_id, application.id);

        Ok(ApplicationDto::from(application))
    }

    pub async fn my_applications(&self, user_id: i32) -> Result<Vec<MyApplicationRow>, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        Ok(application_repository.list_for_user(user_id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<AdminApplicationRow>, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        Ok(application_repository.list_all().await?)
    }

    pub async fn my_assigned_room(&self, user_id: i32) -> Result<Option<AssignedRoomRow>, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        Ok(application_repository.assigned_room(user_id).await?)
    }

    /// Applies an admin decision to an application.
    ///
    /// The status/room update and the applicant's notification commit in one
    /// transaction so a decision is never visible without its notification.
    pub async fn update_application(
        &self,
        application_id: i32,
        dto: UpdateApplicationDto,
    ) -> Result<ApplicationDto, Error> {
        let txn = self.db.begin().await?;

        let application_repository = ApplicationRepository::new(&txn);
        let room_repository = RoomRepository::new(&txn);
        let notification_repository = NotificationRepository::new(&txn);

        let application = application_repository
            .update_assignment(application_id, &dto.status, dto.room_id)
            .await?
            .ok_or(Error::NotFound("Application not found"))?;

        let room_number = match application.room_id {
            Some(room_id) => room_repository
                .get(room_id)
                .await?
                .map(|room| room.room_number),
            None => None,
        };

        let message = notification_message(&application.status, room_number.as_deref());
        notification_repository
            .create(application.user_id, &message)
            .await?;

        txn.commit().await?;

        info!(
            "Application {} updated to {}",
            application.id, application.status
        );

        Ok(ApplicationDto::from(application))
    }
}
