//! User domain models and DTOs.
//!
//! [`UserRow`] is the only type that carries the password hash. Everything
//! that reaches a response body goes through [`User`], which has no password
//! field at all.

use chrono::{DateTime, Utc};
use nomad_auth::UserRole;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[schema(example = "Chioma")]
    pub first_name: String,
    #[schema(example = "Dans")]
    pub last_name: String,
    #[schema(example = "chiomadans@gmail.com")]
    pub email: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub manager_id: Option<Uuid>,
    pub gender: Option<String>,
    #[schema(example = "02-02-2019")]
    pub birth_date: Option<String>,
    pub preferred_language: Option<String>,
    pub preferred_currency: Option<String>,
    pub location: Option<String>,
    pub email_notification: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A user row including the stored bcrypt hash. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        row.user
    }
}

/// A user together with a freshly issued session token.
///
/// Serializes flat: the token sits next to the user fields.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

/// Signup payload. Field-level checks run on the raw JSON before this is
/// deserialized, so the types here only need to describe the happy path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "Chioma")]
    pub first_name: String,
    #[schema(example = "Dans")]
    pub last_name: String,
    #[schema(example = "chiomadans@gmail.com")]
    pub email: String,
    #[schema(example = "secret123")]
    pub password: String,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub preferred_language: Option<String>,
    pub preferred_currency: Option<String>,
    pub location: Option<String>,
}

/// Role assignment payload for `PATCH /api/v1/user/role`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RoleAssignmentRequest {
    #[schema(example = "jane_doe@email.com")]
    pub email: String,
    #[schema(example = "travel_admin")]
    pub role: UserRole,
}
