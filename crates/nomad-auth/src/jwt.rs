//! JWT creation and verification.
//!
//! Session tokens carry the user's role so the role guard never needs a
//! database lookup. Action tokens are single-purpose and short-lived; they are
//! embedded in verification and password-reset links.
//!
//! # Example
//!
//! ```ignore
//! use nomad_auth::{TokenPurpose, create_action_token, verify_action_token};
//!
//! let token = create_action_token(user_id, &email, TokenPurpose::PasswordReset, &config)?;
//! let claims = verify_action_token(&token, TokenPurpose::PasswordReset, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use nomad_config::JwtConfig;
use nomad_core::AppError;

use crate::claims::{ActionClaims, Claims, TokenPurpose};
use crate::roles::UserRole;

pub const INVALID_TOKEN: &str = "Failed to authenticate token.";

fn issue_window(expiry_secs: i64) -> (usize, usize) {
    let now = Utc::now().timestamp();
    (now as usize, (now + expiry_secs).max(0) as usize)
}

fn encode_claims<T: Serialize>(claims: &T, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

fn decode_claims<T: DeserializeOwned>(token: &str, jwt_config: &JwtConfig) -> Result<T, AppError> {
    decode::<T>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(INVALID_TOKEN))
}

/// Creates a session token for a user whose credentials were just checked.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let (iat, exp) = issue_window(jwt_config.access_token_expiry);

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role,
        exp,
        iat,
    };

    encode_claims(&claims, jwt_config)
}

/// Verifies a session token's signature and expiry.
///
/// # Errors
///
/// Returns a 401 [`AppError`] when the token is malformed, expired, signed
/// with another secret, or is not a session token.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode_claims(token, jwt_config)
}

pub fn create_action_token(
    user_id: Uuid,
    email: &str,
    purpose: TokenPurpose,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let (iat, exp) = issue_window(jwt_config.action_token_expiry);

    let claims = ActionClaims {
        sub: user_id,
        email: email.to_string(),
        purpose,
        exp,
        iat,
    };

    encode_claims(&claims, jwt_config)
}

/// Verifies an action token and checks it was issued for `purpose`.
pub fn verify_action_token(
    token: &str,
    purpose: TokenPurpose,
    jwt_config: &JwtConfig,
) -> Result<ActionClaims, AppError> {
    let claims: ActionClaims = decode_claims(token, jwt_config)?;

    if claims.purpose != purpose {
        return Err(AppError::unauthorized(INVALID_TOKEN));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            access_token_expiry: 3600,
            action_token_expiry: 600,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token =
            create_access_token(user_id, "jane@example.com", UserRole::TravelAdmin, &config())
                .unwrap();
        let claims = verify_token(&token, &config()).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, UserRole::TravelAdmin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let token =
            create_access_token(Uuid::new_v4(), "a@b.com", UserRole::Requester, &config()).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..config()
        };
        let err = verify_token(&token, &other).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let expired = JwtConfig {
            access_token_expiry: -7200,
            ..config()
        };
        let token =
            create_access_token(Uuid::new_v4(), "a@b.com", UserRole::Requester, &expired).unwrap();
        assert!(verify_token(&token, &config()).is_err());
    }

    #[test]
    fn test_action_token_purpose_must_match() {
        let token = create_action_token(
            Uuid::new_v4(),
            "a@b.com",
            TokenPurpose::VerifyEmail,
            &config(),
        )
        .unwrap();
        assert!(verify_action_token(&token, TokenPurpose::VerifyEmail, &config()).is_ok());
        assert!(verify_action_token(&token, TokenPurpose::PasswordReset, &config()).is_err());
    }

    #[test]
    fn test_tokens_are_not_interchangeable() {
        let session =
            create_access_token(Uuid::new_v4(), "a@b.com", UserRole::SuperAdmin, &config()).unwrap();
        assert!(verify_action_token(&session, TokenPurpose::PasswordReset, &config()).is_err());

        let action = create_action_token(
            Uuid::new_v4(),
            "a@b.com",
            TokenPurpose::PasswordReset,
            &config(),
        )
        .unwrap();
        assert!(verify_token(&action, &config()).is_err());
    }
}
