//! Tests for the auth endpoints: register, login, me, logout, create-admin.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use bunkhouse::{
    controller::auth::{create_admin, login, logout, me, register},
    model::{
        app::AppState,
        dto::{LoginDto, RegisterUserDto},
    },
};
use bunkhouse_test_utils::prelude::*;

use crate::util::{authed_jar, body_json};

fn register_dto(name: &str, email: &str) -> RegisterUserDto {
    RegisterUserDto {
        name: name.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Expect 200 with a password-free body and no session cookie on registration
#[tokio::test]
async fn register_returns_user_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let resp = register(
        State(test.state::<AppState>()),
        Json(register_dto("Jane", "jane@example.com")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!resp.headers().contains_key(SET_COOKIE));

    let body = body_json(resp).await;
    assert_eq!(body["user"]["email"], "jane@example.com");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    Ok(())
}

/// Expect 400 with the duplicate email message when the email is registered
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    let resp = register(
        State(test.state::<AppState>()),
        Json(register_dto("Other Jane", "jane@example.com")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Email already in use.");

    Ok(())
}

/// Expect 200 with a session cookie for valid credentials
#[tokio::test]
async fn login_sets_session_cookie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    let resp = login(
        State(test.state::<AppState>()),
        CookieJar::new(),
        Json(LoginDto {
            email: "jane@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));

    Ok(())
}

/// Expect 401 with the same message for an unknown email and a bad password
#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    for (email, password) in [
        ("nobody@example.com", TEST_PASSWORD),
        ("jane@example.com", "not-it"),
    ] {
        let resp = login(
            State(test.state::<AppState>()),
            CookieJar::new(),
            Json(LoginDto {
                email: email.to_string(),
                password: password.to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Invalid credentials");
    }

    Ok(())
}

/// Expect 401 from me without a session cookie
#[tokio::test]
async fn me_requires_authentication() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let resp = me(State(test.state::<AppState>()), CookieJar::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect me to return the claims of the session token
#[tokio::test]
async fn me_returns_session_identity() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    let resp = me(State(test.state::<AppState>()), authed_jar(&user)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["role"], "user");

    Ok(())
}

/// Expect logout to clear the session cookie
#[tokio::test]
async fn logout_clears_cookie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    let resp = logout(authed_jar(&user)?).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("Max-Age=0"));

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully");

    Ok(())
}

/// Expect the first admin bootstrap to succeed without starting a session
#[tokio::test]
async fn create_admin_bootstraps_first_admin() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let resp = create_admin(
        State(test.state::<AppState>()),
        Json(register_dto("Root", "root@example.com")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!resp.headers().contains_key(SET_COOKIE));
    let body = body_json(resp).await;
    assert_eq!(body["user"]["role"], "admin");

    Ok(())
}

/// Expect 403 once an admin account already exists
#[tokio::test]
async fn create_admin_refuses_second_admin() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.fixtures()
        .insert_user("Root", "root@example.com", "admin")
        .await?;

    let resp = create_admin(
        State(test.state::<AppState>()),
        Json(register_dto("Second Root", "root2@example.com")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Admin user already exists");

    Ok(())
}
