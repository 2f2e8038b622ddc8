//! Business logic between the HTTP controllers and the repositories.
//!
//! Services own validation, password hashing, token issuance, and the
//! transaction boundaries; controllers only translate HTTP to service calls.

pub mod application;
pub mod auth;
pub mod hostel;
pub mod notification;
pub mod room;

pub use application::ApplicationService;
pub use auth::AuthService;
pub use hostel::HostelService;
pub use notification::NotificationService;
pub use room::RoomService;
