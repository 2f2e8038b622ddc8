//! Error types for the bunkhouse server application.
//!
//! Domain-specific errors live in submodules and aggregate into a single
//! [`Error`] type via `thiserror`'s `#[from]`. Every error implements
//! `IntoResponse`; storage and runtime failures are logged in full and mapped
//! to a generic 500 body so internal details never reach the client.

pub mod auth;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{error::auth::AuthError, model::dto::ErrorDto};

/// Main error type for the bunkhouse server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication or authorization failure (missing/invalid token,
    /// credentials, role, bootstrap conflicts).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A row looked up by id does not exist. Carries the client-facing message.
    #[error("{0}")]
    NotFound(&'static str),
    /// Request body failed validation. Carries the client-facing message.
    #[error("{0}")]
    Validation(&'static str),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token encoding/decoding error outside the authentication gate.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    message: message.to_string(),
                }),
            )
                .into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: message.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message, but returns a generic body to the client to
/// avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
