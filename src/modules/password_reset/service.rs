use sqlx::PgPool;
use tracing::instrument;

use nomad_auth::{TokenPurpose, create_action_token, verify_action_token};
use nomad_config::{EmailConfig, JwtConfig};
use nomad_core::AppError;
use nomad_models::{MessageData, PasswordResetData};

use crate::metrics::track_jwt_issued;
use crate::modules::auth::service::hash_password_blocking;
use crate::modules::users::service::UserService;
use crate::utils::email::EmailService;

pub const EMAIL_NOT_FOUND: &str = "user email not found";
pub const RESET_LINK_SENT: &str = "A password reset link has been sent to your email";
pub const PASSWORD_RESET: &str = "Your password has been reset successfully";

pub struct PasswordResetService;

impl PasswordResetService {
    #[instrument(skip(db, jwt_config, email_config))]
    pub async fn request_reset(
        db: &PgPool,
        email: &str,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<PasswordResetData, AppError> {
        let row = UserService::find_by_email(db, email)
            .await?
            .ok_or_else(|| AppError::not_found(EMAIL_NOT_FOUND))?;
        let user = row.user;

        let token =
            create_action_token(user.id, &user.email, TokenPurpose::PasswordReset, jwt_config)?;
        track_jwt_issued("password_reset");

        EmailService::new(email_config.clone())
            .with_link_expiry(jwt_config.action_token_expiry)
            .send_password_reset_email(&user.email, &user.first_name, &token)
            .await?;

        tracing::info!(user_id = %user.id, "Password reset link dispatched");

        Ok(PasswordResetData {
            message: RESET_LINK_SENT.to_string(),
            email: user.email,
        })
    }

    #[instrument(skip(db, token, password, jwt_config, email_config))]
    pub async fn reset_password(
        db: &PgPool,
        token: &str,
        password: String,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<MessageData, AppError> {
        let claims = verify_action_token(token, TokenPurpose::PasswordReset, jwt_config)?;

        let password_hash = hash_password_blocking(password).await?;
        let user = UserService::update_password(db, claims.sub, &password_hash).await?;

        tracing::info!(user_id = %user.id, "Password reset");

        if let Err(e) = EmailService::new(email_config.clone())
            .send_password_reset_confirmation(&user.email, &user.first_name)
            .await
        {
            tracing::warn!(
                user_id = %user.id,
                error = %e.error,
                "Failed to send reset confirmation"
            );
        }

        Ok(MessageData::new(PASSWORD_RESET))
    }
}
