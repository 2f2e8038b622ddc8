pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_user_table;
mod m20260815_000002_create_hostel_table;
mod m20260815_000003_create_room_table;
mod m20260815_000004_create_application_table;
mod m20260815_000005_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_user_table::Migration),
            Box::new(m20260815_000002_create_hostel_table::Migration),
            Box::new(m20260815_000003_create_room_table::Migration),
            Box::new(m20260815_000004_create_application_table::Migration),
            Box::new(m20260815_000005_create_notification_table::Migration),
        ]
    }
}
