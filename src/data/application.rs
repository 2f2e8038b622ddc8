use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::dto::{AdminApplicationRow, AssignedRoomRow, MyApplicationRow};

/// Applicant-supplied values for a new application.
pub struct ApplicationFields {
    pub room_id: Option<i32>,
    pub special_needs: Option<String>,
    pub additional_notes: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
}

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an application in the `pending` state for the given user.
    pub async fn create(
        &self,
        user_id: i32,
        fields: ApplicationFields,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            room_id: ActiveValue::Set(fields.room_id),
            status: ActiveValue::Set("pending".to_string()),
            special_needs: ActiveValue::Set(fields.special_needs),
            additional_notes: ActiveValue::Set(fields.additional_notes),
            academic_year: ActiveValue::Set(fields.academic_year),
            semester: ActiveValue::Set(fields.semester),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// A user's applications with their (possibly unassigned) rooms, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<MyApplicationRow>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::Id)
            .column(entity::application::Column::Status)
            .column(entity::application::Column::CreatedAt)
            .column(entity::application::Column::SpecialNeeds)
            .column(entity::application::Column::AdditionalNotes)
            .column(entity::application::Column::AcademicYear)
            .column(entity::application::Column::Semester)
            .column(entity::application::Column::RoomId)
            .column_as(entity::room::Column::RoomNumber, "room_number")
            .column_as(entity::room::Column::RoomType, "room_type")
            .column_as(entity::room::Column::PricePerSemester, "price_per_semester")
            .join(JoinType::LeftJoin, entity::application::Relation::Room.def())
            .filter(entity::application::Column::UserId.eq(user_id))
            .order_by_desc(entity::application::Column::CreatedAt)
            .into_model::<MyApplicationRow>()
            .all(self.db)
            .await
    }

    /// All applications with applicant, room, and the room's hostel, newest first.
    pub async fn list_all(&self) -> Result<Vec<AdminApplicationRow>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::Id)
            .column_as(entity::user::Column::Name, "user_name")
            .column_as(entity::user::Column::Email, "user_email")
            .column_as(entity::room::Column::RoomNumber, "room_number")
            .column(entity::application::Column::Status)
            .column(entity::application::Column::CreatedAt)
            .column_as(entity::hostel::Column::Id, "hostel_id")
            .column_as(entity::hostel::Column::Name, "hostel_name")
            .join(JoinType::InnerJoin, entity::application::Relation::User.def())
            .join(JoinType::LeftJoin, entity::application::Relation::Room.def())
            .join(JoinType::LeftJoin, entity::room::Relation::Hostel.def())
            .order_by_desc(entity::application::Column::CreatedAt)
            .into_model::<AdminApplicationRow>()
            .all(self.db)
            .await
    }

    /// The user's most recent approved application and its room, if any.
    pub async fn assigned_room(&self, user_id: i32) -> Result<Option<AssignedRoomRow>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column_as(entity::application::Column::Id, "application_id")
            .column(entity::application::Column::Status)
            .column(entity::application::Column::CreatedAt)
            .column_as(entity::room::Column::Id, "room_id")
            .column_as(entity::room::Column::RoomNumber, "room_number")
            .column_as(entity::room::Column::RoomType, "room_type")
            .column_as(entity::room::Column::PricePerSemester, "price_per_semester")
            .column_as(entity::room::Column::Description, "description")
            .join(JoinType::InnerJoin, entity::application::Relation::Room.def())
            .filter(entity::application::Column::UserId.eq(user_id))
            .filter(entity::application::Column::Status.eq("approved"))
            .order_by_desc(entity::application::Column::CreatedAt)
            .into_model::<AssignedRoomRow>()
            .one(self.db)
            .await
    }

    /// Sets an application's status and assigned room.
    ///
    /// Returns `Ok(None)` when no row with the id exists.
    pub async fn update_assignment(
        &self,
        application_id: i32,
        status: &str,
        room_id: Option<i32>,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let application = match entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await?
        {
            Some(application) => application,
            None => return Ok(None),
        };

        let mut application_am = application.into_active_model();
        application_am.status = ActiveValue::Set(status.to_string());
        application_am.room_id = ActiveValue::Set(room_id);

        let application = application_am.update(self.db).await?;

        Ok(Some(application))
    }
}
