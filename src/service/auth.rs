//! Registration, login, and admin bootstrap.

use sea_orm::{DatabaseConnection, SqlErr};
use tracing::info;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        dto::UserDto,
        token::{encode_token, Claims},
    },
};

/// Work factor for password hashing in production paths.
const BCRYPT_COST: u32 = 10;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Registers a new account with the given role.
    ///
    /// No session is started; the caller logs in separately. A duplicate
    /// email is reported as [`AuthError::EmailTaken`]; the race between two
    /// concurrent registrations is settled by the unique index, not by a
    /// prior existence check.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;

        let user = match user_repository
            .create(name, email, &password_hash, role)
            .await
        {
            Ok(user) => user,
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AuthError::EmailTaken.into());
                }

                return Err(err.into());
            }
        };

        info!("Registered new {} account {}", user.role, user.id);

        Ok(UserDto::from(user))
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown email and wrong password both map to
    /// [`AuthError::InvalidCredentials`] so responses do not reveal which
    /// part failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<(UserDto, String), Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = encode_token(&Claims::for_user(&user), self.jwt_secret)?;

        Ok((UserDto::from(user), token))
    }

    /// Bootstraps the first admin account.
    ///
    /// Refused once any admin exists; after that, new admins are created
    /// through administrative tooling rather than this open endpoint.
    pub async fn create_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.admin_exists().await? {
            return Err(AuthError::AdminAlreadyExists.into());
        }

        self.register(name, email, password, "admin").await
    }
}
