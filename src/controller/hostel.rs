use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        app::AppState,
        dto::{ErrorDto, HostelDetailDto, HostelSummaryDto},
    },
    service::hostel::HostelService,
};

pub static HOSTEL_TAG: &str = "hostel";

/// List all hostels
#[utoipa::path(
    get,
    path = "/api/hostels",
    tag = HOSTEL_TAG,
    responses(
        (status = 200, description = "All hostels", body = Vec<HostelSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hostels(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let hostel_service = HostelService::new(&state.db);

    let hostels = hostel_service.list().await?;

    Ok(Json(hostels))
}

/// Get a hostel with its rooms
#[utoipa::path(
    get,
    path = "/api/hostels/{id}",
    tag = HOSTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hostel id")
    ),
    responses(
        (status = 200, description = "The hostel and its rooms", body = HostelDetailDto),
        (status = 404, description = "Hostel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hostel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let hostel_service = HostelService::new(&state.db);

    let hostel = hostel_service.get(id).await?;

    Ok(Json(hostel))
}
