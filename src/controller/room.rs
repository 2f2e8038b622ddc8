use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::util::{authenticate, require_admin},
    error::Error,
    model::{
        app::AppState,
        dto::{CreateRoomDto, ErrorDto, MessageDto, RoomDto, UpdateRoomDto},
    },
    service::room::RoomService,
};

pub static ROOM_TAG: &str = "room";

/// List all rooms
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.db);

    let rooms = room_service.list().await?;

    Ok(Json(rooms))
}

/// Get a single room
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    authenticate(&jar, &state.jwt_secret)?;

    let room_service = RoomService::new(&state.db);

    let room = room_service.get(id).await?;

    Ok(Json(room))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;
    require_admin(&claims)?;

    let room_service = RoomService::new(&state.db);

    let room = room_service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// Update a room
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;
    require_admin(&claims)?;

    let room_service = RoomService::new(&state.db);

    let room = room_service.update(id, dto).await?;

    Ok(Json(room))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;
    require_admin(&claims)?;

    let room_service = RoomService::new(&state.db);

    room_service.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Room deleted".to_string(),
    }))
}
