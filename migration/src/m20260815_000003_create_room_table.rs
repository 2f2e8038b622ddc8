use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000002_create_hostel_table::Hostel;

static FK_ROOM_HOSTEL_ID: &str = "fk_room_hostel_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string(Room::RoomNumber))
                    .col(string(Room::RoomType))
                    .col(string_null(Room::Description))
                    .col(integer(Room::OccupancyLimit))
                    .col(double(Room::PricePerSemester))
                    .col(string_null(Room::ImageUrl))
                    .col(integer_null(Room::HostelId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROOM_HOSTEL_ID)
                    .from_tbl(Room::Table)
                    .from_col(Room::HostelId)
                    .to_tbl(Hostel::Table)
                    .to_col(Hostel::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROOM_HOSTEL_ID)
                    .table(Room::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomNumber,
    RoomType,
    Description,
    OccupancyLimit,
    PricePerSemester,
    ImageUrl,
    HostelId,
}
