//! User persistence shared by signup, signin, role assignment, and password
//! reset.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use nomad_auth::UserRole;
use nomad_core::AppError;
use nomad_models::{SignupRequest, User, UserRow};

pub const USER_NOT_FOUND: &str = "User not found";

pub(crate) const USER_COLUMNS: &str = "id, first_name, last_name, email, role, is_verified, \
     manager_id, gender, birth_date, preferred_language, preferred_currency, location, \
     email_notification, created_at, updated_at";

/// Emails are stored and compared lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct UserService;

impl UserService {
    /// Looks up a user together with the password hash.
    #[instrument(skip(db))]
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {}, password FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(normalize_email(email))
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(row)
    }

    /// Inserts a user with an already-hashed password. New users always start
    /// as unverified requesters.
    #[instrument(skip(db, dto, password_hash), fields(email = %dto.email))]
    pub async fn create_user(
        db: &PgPool,
        dto: &SignupRequest,
        password_hash: &str,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users
                (first_name, last_name, email, password, gender, birth_date,
                 preferred_language, preferred_currency, location)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(dto.first_name.trim())
        .bind(dto.last_name.trim())
        .bind(normalize_email(&dto.email))
        .bind(password_hash)
        .bind(&dto.gender)
        .bind(&dto.birth_date)
        .bind(&dto.preferred_language)
        .bind(&dto.preferred_currency)
        .bind(&dto.location)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(crate::modules::auth::service::ALREADY_REGISTERED)
            }
            _ => AppError::database(e),
        })
    }

    #[instrument(skip(db))]
    pub async fn update_role(db: &PgPool, email: &str, role: UserRole) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET role = $1, updated_at = NOW() WHERE email = $2 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(role)
        .bind(normalize_email(email))
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    #[instrument(skip(db))]
    pub async fn mark_verified(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET is_verified = TRUE, updated_at = NOW() WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    #[instrument(skip(db, password_hash))]
    pub async fn update_password(
        db: &PgPool,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET password = $1, updated_at = NOW() WHERE id = $2 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(password_hash)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane.Doe@Email.com "), "jane.doe@email.com");
    }
}
