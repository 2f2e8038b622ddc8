use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_user_table::User, m20260815_000003_create_room_table::Room,
};

static FK_APPLICATION_USER_ID: &str = "fk_application_user_id";
static FK_APPLICATION_ROOM_ID: &str = "fk_application_room_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(integer(Application::UserId))
                    .col(integer_null(Application::RoomId))
                    .col(string(Application::Status).default("pending"))
                    .col(string_null(Application::SpecialNeeds))
                    .col(string_null(Application::AdditionalNotes))
                    .col(string_null(Application::AcademicYear))
                    .col(string_null(Application::Semester))
                    .col(timestamp(Application::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_USER_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_ROOM_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::RoomId)
                    .to_tbl(Room::Table)
                    .to_col(Room::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_USER_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_ROOM_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    UserId,
    RoomId,
    Status,
    SpecialNeeds,
    AdditionalNotes,
    AcademicYear,
    Semester,
    CreatedAt,
}
