//! Tests for the application workflow endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use bunkhouse::{
    controller::application::{
        apply, list_applications, my_applications, my_assigned_room, update_application,
    },
    data::notification::NotificationRepository,
    model::{
        app::AppState,
        dto::{ApplyDto, UpdateApplicationDto},
    },
};
use bunkhouse_test_utils::prelude::*;

use crate::util::{authed_jar, body_json};

fn apply_dto(room_id: Option<i32>) -> ApplyDto {
    ApplyDto {
        room_id,
        special_needs: None,
        additional_notes: None,
        academic_year: Some("2026/2027".to_string()),
        semester: Some("first".to_string()),
    }
}

/// Expect 401 when applying without a session
#[tokio::test]
async fn apply_requires_authentication() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resp = apply(
        State(test.state::<AppState>()),
        CookieJar::new(),
        Json(apply_dto(None)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 with a pending application tied to the session user
#[tokio::test]
async fn apply_creates_pending_application() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let room = test.fixtures().insert_room("A-101", None).await?;

    let resp = apply(
        State(test.state::<AppState>()),
        authed_jar(&user)?,
        Json(apply_dto(Some(room.id))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["room_id"], room.id);

    Ok(())
}

/// Expect only the caller's applications in the listing
#[tokio::test]
async fn my_applications_lists_own_only() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let jane = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let other = test
        .fixtures()
        .insert_user("Omar", "omar@example.com", "user")
        .await?;
    test.fixtures()
        .insert_application(jane.id, None, "pending")
        .await?;
    test.fixtures()
        .insert_application(other.id, None, "pending")
        .await?;

    let resp = my_applications(State(test.state::<AppState>()), authed_jar(&jane)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    Ok(())
}

/// Expect 403 when a non-admin requests the full listing
#[tokio::test]
async fn list_rejects_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    let resp = list_applications(State(test.state::<AppState>()), authed_jar(&user)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the admin listing to include applicant and hostel details
#[tokio::test]
async fn list_includes_applicant_and_hostel() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let admin = test
        .fixtures()
        .insert_user("Root", "root@example.com", "admin")
        .await?;
    let jane = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let hostel = test.fixtures().insert_hostel("North Hall").await?;
    let room = test.fixtures().insert_room("A-101", Some(hostel.id)).await?;
    test.fixtures()
        .insert_application(jane.id, Some(room.id), "pending")
        .await?;

    let resp = list_applications(State(test.state::<AppState>()), authed_jar(&admin)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_email"], "jane@example.com");
    assert_eq!(rows[0]["hostel_name"], "North Hall");

    Ok(())
}

/// Expect JSON null when the caller has no approved application
#[tokio::test]
async fn my_assigned_room_is_null_without_approval() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;

    let resp = my_assigned_room(State(test.state::<AppState>()), authed_jar(&user)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body.is_null());

    Ok(())
}

/// Expect the assigned room once an application is approved
#[tokio::test]
async fn my_assigned_room_returns_approved_room() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let room = test.fixtures().insert_room("A-101", None).await?;
    test.fixtures()
        .insert_application(user.id, Some(room.id), "approved")
        .await?;

    let resp = my_assigned_room(State(test.state::<AppState>()), authed_jar(&user)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["room_number"], "A-101");
    assert_eq!(body["status"], "approved");

    Ok(())
}

/// Expect 403 when a non-admin decides an application
#[tokio::test]
async fn update_rejects_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let application = test
        .fixtures()
        .insert_application(user.id, None, "pending")
        .await?;

    let resp = update_application(
        State(test.state::<AppState>()),
        authed_jar(&user)?,
        Path(application.id),
        Json(UpdateApplicationDto {
            status: "approved".to_string(),
            room_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect an admin approval to assign the room and notify the applicant
#[tokio::test]
async fn update_assigns_room_and_notifies() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let admin = test
        .fixtures()
        .insert_user("Root", "root@example.com", "admin")
        .await?;
    let jane = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let room = test.fixtures().insert_room("A-101", None).await?;
    let application = test
        .fixtures()
        .insert_application(jane.id, None, "pending")
        .await?;

    let resp = update_application(
        State(test.state::<AppState>()),
        authed_jar(&admin)?,
        Path(application.id),
        Json(UpdateApplicationDto {
            status: "approved".to_string(),
            room_id: Some(room.id),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "approved");
    assert_eq!(body["room_id"], room.id);

    let notification_repository = NotificationRepository::new(&test.state.db);
    let notifications = notification_repository.list_for_user(jane.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].message,
        "Your application has been approved and you have been assigned to Room A-101."
    );

    Ok(())
}

/// Expect 404 when deciding a nonexistent application
#[tokio::test]
async fn update_reports_missing_application() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let admin = test
        .fixtures()
        .insert_user("Root", "root@example.com", "admin")
        .await?;

    let resp = update_application(
        State(test.state::<AppState>()),
        authed_jar(&admin)?,
        Path(42),
        Json(UpdateApplicationDto {
            status: "approved".to_string(),
            room_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Application not found");

    Ok(())
}
