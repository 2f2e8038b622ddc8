use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::dto::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No session token cookie present on request")]
    MissingToken,
    #[error("Session token failed verification or has expired")]
    InvalidToken,
    #[error("Authenticated user does not have the admin role")]
    AdminRequired,
    #[error("Email or password did not match a known account")]
    InvalidCredentials,
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Admin bootstrap refused because an admin account already exists")]
    AdminAlreadyExists,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken => (StatusCode::FORBIDDEN, "Invalid or expired token"),
            Self::AdminRequired => (StatusCode::FORBIDDEN, "Admin access required"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::EmailTaken => (StatusCode::BAD_REQUEST, "Email already in use."),
            Self::AdminAlreadyExists => (StatusCode::FORBIDDEN, "Admin user already exists"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
