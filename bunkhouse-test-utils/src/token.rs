//! Signed token helpers for exercising authenticated endpoints.
//!
//! The claim shape mirrors the application's session claims without depending
//! on the main crate, avoiding a circular dev-dependency.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::TestError;

#[derive(Serialize)]
struct TestClaims<'a> {
    id: i32,
    email: &'a str,
    role: &'a str,
    exp: usize,
}

/// Issue a signed token for a fixture user, valid for one hour.
pub fn token_for(user: &entity::user::Model, secret: &str) -> Result<String, TestError> {
    let claims = TestClaims {
        id: user.id,
        email: &user.email,
        role: &user.role,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Issue a token that expired in the past, for negative tests.
pub fn expired_token_for(user: &entity::user::Model, secret: &str) -> Result<String, TestError> {
    let claims = TestClaims {
        id: user.id,
        email: &user.email,
        role: &user.role,
        exp: (Utc::now() - Duration::hours(1)).timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}
