//! The fixed set of user roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role carried by every user and embedded in session tokens.
///
/// Stored as the Postgres enum `user_role`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Requester,
    TravelAdmin,
    SuperAdmin,
    Manager,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Requester,
        UserRole::TravelAdmin,
        UserRole::SuperAdmin,
        UserRole::Manager,
    ];

    /// Wire names, in declaration order.
    pub const NAMES: [&'static str; 4] = ["requester", "travel_admin", "super_admin", "manager"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Requester => "requester",
            UserRole::TravelAdmin => "travel_admin",
            UserRole::SuperAdmin => "super_admin",
            UserRole::Manager => "manager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Invalid role: {}", s))
    }
}
