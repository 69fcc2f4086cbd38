//! JWT claim structures.
//!
//! - [`Claims`]: session tokens issued at signup and signin
//! - [`ActionClaims`]: single-purpose tokens mailed to users
//!
//! The two shapes are disjoint (`role` vs `purpose`), so a session token never
//! decodes as an action token and vice versa.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::UserRole;

/// Session token claims; the resolved principal of an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    VerifyEmail,
    PasswordReset,
}

/// Claims for links sent by email (verification, password reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionClaims {
    pub sub: Uuid,
    pub email: String,
    pub purpose: TokenPurpose,
    pub exp: usize,
    pub iat: usize,
}
