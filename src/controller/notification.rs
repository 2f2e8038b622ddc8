use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::{
    controller::util::authenticate,
    error::Error,
    model::{
        app::AppState,
        dto::{ErrorDto, NotificationDto},
    },
    service::notification::NotificationService,
};

pub static NOTIFICATION_TAG: &str = "notification";

/// List the caller's notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "The caller's notifications, newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;

    let notification_service = NotificationService::new(&state.db);

    let notifications = notification_service.list_for_user(claims.id).await?;

    Ok(Json(notifications))
}
