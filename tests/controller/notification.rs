//! Tests for the notification listing endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use bunkhouse::{controller::notification::list_notifications, model::app::AppState};
use bunkhouse_test_utils::prelude::*;

use crate::util::{authed_jar, body_json};

/// Expect 401 without a session cookie
#[tokio::test]
async fn requires_authentication() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Notification)?;

    let resp = list_notifications(State(test.state::<AppState>()), CookieJar::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect only the caller's notifications, newest first
#[tokio::test]
async fn lists_own_notifications() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Notification)?;
    let jane = test
        .fixtures()
        .insert_user("Jane", "jane@example.com", "user")
        .await?;
    let other = test
        .fixtures()
        .insert_user("Omar", "omar@example.com", "user")
        .await?;
    test.fixtures()
        .insert_notification(jane.id, "Your application has been approved!")
        .await?;
    test.fixtures()
        .insert_notification(other.id, "Your application has been rejected.")
        .await?;

    let resp = list_notifications(State(test.state::<AppState>()), authed_jar(&jane)?)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["message"], "Your application has been approved!");

    Ok(())
}
