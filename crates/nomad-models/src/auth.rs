//! Authentication DTOs: signin, email verification, and password reset.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Signin credentials.
///
/// Any failure to deserialize or validate this is reported to the client as
/// an incorrect email or password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "jane_doe@email.com")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "asdfghjkl")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PasswordResetRequest {
    #[schema(example = "jane_doe@email.com")]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPasswordRequest {
    #[schema(example = "newsecret123")]
    pub password: String,
}

/// Plain acknowledgement carried inside a success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Returned once a password reset link has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetData {
    pub message: String,
    pub email: String,
}
