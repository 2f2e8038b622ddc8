pub mod application;
pub mod hostel;
pub mod notification;
pub mod room;
pub mod user;

pub mod prelude {
    pub use crate::application::Entity as Application;
    pub use crate::hostel::Entity as Hostel;
    pub use crate::notification::Entity as Notification;
    pub use crate::room::Entity as Room;
    pub use crate::user::Entity as User;
}
