//! Wire-format DTOs.
//!
//! Persisted entities never serialize directly; this module owns the view
//! transformations, including the hostel placeholder fields synthesized
//! because the schema has no occupancy, amenity, or image columns yet.

use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response body when a request fails.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// The response body for operations that only acknowledge success.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Public view of a user; never carries the password hash.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Envelope used by the auth endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

/// Identity claim returned by the `me` endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct IdentityDto {
    pub id: i32,
    pub email: String,
    pub role: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Public view of a room as listed in the catalogue.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub description: Option<String>,
    pub occupancy_limit: i32,
    pub price_per_semester: f64,
    pub image_url: Option<String>,
}

impl From<entity::room::Model> for RoomDto {
    fn from(room: entity::room::Model) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number,
            room_type: room.room_type,
            description: room.description,
            occupancy_limit: room.occupancy_limit,
            price_per_semester: room.price_per_semester,
            image_url: room.image_url,
        }
    }
}

/// Room creation payload. Optional fields let the handler report which
/// required values are missing instead of failing deserialization.
#[derive(Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub description: Option<String>,
    pub occupancy_limit: Option<i32>,
    pub price_per_semester: Option<f64>,
    pub image_url: Option<String>,
    pub hostel_id: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateRoomDto {
    pub room_number: String,
    pub room_type: String,
    pub description: Option<String>,
    pub occupancy_limit: i32,
    pub price_per_semester: f64,
    pub image_url: Option<String>,
    pub hostel_id: Option<i32>,
}

/// Hostel list entry.
///
/// `description` mirrors the address column, `available_rooms` defaults to
/// `total_rooms`, and the amenity/image lists are empty until the schema
/// tracks them.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HostelSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub total_rooms: i32,
    pub available_rooms: i32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl From<entity::hostel::Model> for HostelSummaryDto {
    fn from(hostel: entity::hostel::Model) -> Self {
        Self {
            id: hostel.id,
            name: hostel.name,
            description: hostel.address,
            total_rooms: hostel.total_rooms,
            available_rooms: hostel.total_rooms,
            amenities: Vec::new(),
            images: Vec::new(),
        }
    }
}

/// Abbreviated room view nested under a hostel detail response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HostelRoomDto {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub price_per_semester: f64,
}

impl From<entity::room::Model> for HostelRoomDto {
    fn from(room: entity::room::Model) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number,
            room_type: room.room_type,
            price_per_semester: room.price_per_semester,
        }
    }
}

/// Hostel detail with its rooms.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HostelDetailDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub total_rooms: i32,
    pub rooms: Vec<HostelRoomDto>,
}

impl HostelDetailDto {
    pub fn from_parts(hostel: entity::hostel::Model, rooms: Vec<entity::room::Model>) -> Self {
        Self {
            id: hostel.id,
            name: hostel.name,
            description: hostel.address,
            total_rooms: hostel.total_rooms,
            rooms: rooms.into_iter().map(HostelRoomDto::from).collect(),
        }
    }
}

/// Full application row as returned to its owner after creation or update.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: Option<i32>,
    pub status: String,
    pub special_needs: Option<String>,
    pub additional_notes: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::application::Model> for ApplicationDto {
    fn from(application: entity::application::Model) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            room_id: application.room_id,
            status: application.status,
            special_needs: application.special_needs,
            additional_notes: application.additional_notes,
            academic_year: application.academic_year,
            semester: application.semester,
            created_at: application.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct ApplyDto {
    pub room_id: Option<i32>,
    pub special_needs: Option<String>,
    pub additional_notes: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateApplicationDto {
    pub status: String,
    pub room_id: Option<i32>,
}

/// Applicant's own application joined with its (possibly unassigned) room.
#[derive(Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct MyApplicationRow {
    pub id: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub special_needs: Option<String>,
    pub additional_notes: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub room_id: Option<i32>,
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub price_per_semester: Option<f64>,
}

/// Admin listing row: applicant, assigned room, and the room's hostel.
#[derive(Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct AdminApplicationRow {
    pub id: i32,
    pub user_name: String,
    pub user_email: String,
    pub room_number: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub hostel_id: Option<i32>,
    pub hostel_name: Option<String>,
}

/// The caller's most recent approved application with its room.
#[derive(Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct AssignedRoomRow {
    pub application_id: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub room_id: i32,
    pub room_number: String,
    pub room_type: String,
    pub price_per_semester: f64,
    pub description: Option<String>,
}

/// Notification as listed for its recipient.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            message: notification.message,
            created_at: notification.created_at,
        }
    }
}
