//! Data access layer repositories.
//!
//! One repository per entity, generic over [`sea_orm::ConnectionTrait`] so the
//! same code runs against the pooled connection and inside transactions.
//! Repositories return entity models or query-shaped rows; HTTP mapping
//! happens in the service and controller layers.

pub mod application;
pub mod hostel;
pub mod notification;
pub mod room;
pub mod user;

pub use application::ApplicationRepository;
pub use hostel::HostelRepository;
pub use notification::NotificationRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
