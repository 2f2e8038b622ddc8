use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::util::{authenticate, require_admin},
    error::Error,
    model::{
        app::AppState,
        dto::{
            AdminApplicationRow, ApplicationDto, ApplyDto, AssignedRoomRow, ErrorDto,
            MyApplicationRow, UpdateApplicationDto,
        },
    },
    service::application::ApplicationService,
};

pub static APPLICATION_TAG: &str = "application";

/// Submit a room application
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = ApplyDto,
    responses(
        (status = 200, description = "Application submitted", body = ApplicationDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<ApplyDto>,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;

    let application_service = ApplicationService::new(&state.db);

    let application = application_service.apply(claims.id, dto).await?;

    Ok(Json(application))
}

/// List the caller's applications
#[utoipa::path(
    get,
    path = "/api/applications/my-applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "The caller's applications, newest first", body = Vec<MyApplicationRow>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_applications(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;

    let application_service = ApplicationService::new(&state.db);

    let applications = application_service.my_applications(claims.id).await?;

    Ok(Json(applications))
}

/// List all applications with applicant and hostel details
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "All applications, newest first", body = Vec<AdminApplicationRow>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;
    require_admin(&claims)?;

    let application_service = ApplicationService::new(&state.db);

    let applications = application_service.list_all().await?;

    Ok(Json(applications))
}

/// The caller's assigned room, if an application was approved
#[utoipa::path(
    get,
    path = "/api/applications/my-assigned-room",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "The assigned room, or null when none", body = Option<AssignedRoomRow>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_assigned_room(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;

    let application_service = ApplicationService::new(&state.db);

    let assigned = application_service.my_assigned_room(claims.id).await?;

    Ok(Json(assigned))
}

/// Decide an application and notify the applicant
#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application id")
    ),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;
    require_admin(&claims)?;

    let application_service = ApplicationService::new(&state.db);

    let application = application_service.update_application(id, dto).await?;

    Ok(Json(application))
}
