use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::{
    controller::util::authenticate,
    error::Error,
    model::{
        app::AppState,
        dto::{
            ErrorDto, IdentityDto, LoginDto, MessageDto, RegisterUserDto, UserResponseDto,
        },
        token::{removal_cookie, session_cookie},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Account created", body = UserResponseDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt_secret);

    let user = auth_service
        .register(&dto.name, &dto.email, &dto.password, "user")
        .await?;

    Ok(Json(UserResponseDto { user }))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session started", body = UserResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt_secret);

    let (user, token) = auth_service.login(&dto.email, &dto.password).await?;

    Ok((
        jar.add(session_cookie(token)),
        Json(UserResponseDto { user }),
    ))
}

/// Identity of the current session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session identity", body = IdentityDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto)
    ),
)]
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse, Error> {
    let claims = authenticate(&jar, &state.jwt_secret)?;

    Ok(Json(IdentityDto {
        id: claims.id,
        email: claims.email,
        role: claims.role,
    }))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(removal_cookie()),
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Bootstrap the first admin account
#[utoipa::path(
    post,
    path = "/api/auth/create-admin",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Admin account created", body = UserResponseDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 403, description = "Admin user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt_secret);

    let user = auth_service
        .create_admin(&dto.name, &dto.email, &dto.password)
        .await?;

    Ok(Json(UserResponseDto { user }))
}
