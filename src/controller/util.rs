use axum_extra::extract::CookieJar;

use crate::{
    error::auth::AuthError,
    model::token::{decode_token, Claims, TOKEN_COOKIE},
};

/// Verifies the session cookie and returns its claims.
///
/// A missing cookie is a 401; a cookie that fails verification (bad signature
/// or expired) is a 403.
pub fn authenticate(jar: &CookieJar, jwt_secret: &str) -> Result<Claims, AuthError> {
    let token = jar.get(TOKEN_COOKIE).ok_or(AuthError::MissingToken)?;

    decode_token(token.value(), jwt_secret).map_err(|_| AuthError::InvalidToken)
}

/// Rejects claims without the admin role.
pub fn require_admin(claims: &Claims) -> Result<(), AuthError> {
    if !claims.is_admin() {
        return Err(AuthError::AdminRequired);
    }

    Ok(())
}
