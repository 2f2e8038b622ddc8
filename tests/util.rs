//! Shared helpers for controller tests.

use axum::{
    body::Body,
    http::{header::COOKIE, HeaderMap},
    response::Response,
};
use axum_extra::extract::CookieJar;
use bunkhouse::model::token::TOKEN_COOKIE;
use bunkhouse_test_utils::prelude::*;

/// Build a cookie jar carrying a valid session token for the user.
///
/// The jar is built from a `Cookie` request header so the token counts as an
/// "original" cookie, as it would when extracted from a real request; removing
/// it then emits a removal `Set-Cookie` instead of silently dropping it.
pub fn authed_jar(user: &entity::user::Model) -> Result<CookieJar, TestError> {
    let token = token_for(user, TEST_JWT_SECRET)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        format!("{TOKEN_COOKIE}={token}")
            .parse()
            .expect("valid cookie header"),
    );

    Ok(CookieJar::from_headers(&headers))
}

/// Read a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
