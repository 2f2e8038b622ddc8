//! Session token claims and cookie construction.
//!
//! Sessions are stateless: a signed claim set carried in an http-only cookie
//! named [`TOKEN_COOKIE`]. The claim is issued at login and verified on every
//! authenticated request; no server-side session store exists.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Session lifetime. The cookie itself carries no max-age; expiry is enforced
/// by the signed claim.
const TOKEN_TTL_HOURS: i64 = 8;

/// Identity claim carried by the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

impl Claims {
    /// Build a claim set for a user, expiring [`TOKEN_TTL_HOURS`] from now.
    pub fn for_user(user: &entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Sign a claim set with the shared secret.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verify a token's signature and expiry, returning the decoded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    Ok(decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?
    .claims)
}

/// Build the http-only session cookie carrying a signed token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Build a removal cookie clearing the session.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE).path("/").build()
}
