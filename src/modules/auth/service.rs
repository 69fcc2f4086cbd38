use sqlx::PgPool;
use tracing::instrument;

use nomad_auth::{TokenPurpose, create_access_token, create_action_token, verify_action_token};
use nomad_config::{EmailConfig, JwtConfig};
use nomad_core::{AppError, hash_password, verify_password};
use nomad_models::{AuthenticatedUser, LoginRequest, MessageData, SignupRequest, User};

use crate::metrics::{
    track_jwt_issued, track_user_created, track_user_login_failure, track_user_login_success,
};
use crate::modules::users::service::UserService;
use crate::utils::email::EmailService;

pub const ALREADY_REGISTERED: &str = "user already registered";
pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";
pub const EMAIL_VERIFIED: &str = "Your email has been verified";

/// Hashes on the blocking pool; bcrypt is CPU-bound.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

async fn verify_password_blocking(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config, email_config), fields(email = %dto.email))]
    pub async fn signup(
        db: &PgPool,
        dto: SignupRequest,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<AuthenticatedUser, AppError> {
        if UserService::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::conflict(ALREADY_REGISTERED));
        }

        let password_hash = hash_password_blocking(dto.password.clone()).await?;
        let user = UserService::create_user(db, &dto, &password_hash).await?;

        track_user_created(user.role.as_str());
        tracing::info!(user_id = %user.id, "User registered");

        Self::send_verification(&user, jwt_config, email_config).await;

        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;
        track_jwt_issued("access");

        Ok(AuthenticatedUser { user, token })
    }

    /// Mail failures are logged; the account already exists and the user can
    /// still sign in.
    async fn send_verification(user: &User, jwt_config: &JwtConfig, email_config: &EmailConfig) {
        let result = async {
            let token =
                create_action_token(user.id, &user.email, TokenPurpose::VerifyEmail, jwt_config)?;
            track_jwt_issued("verify_email");
            EmailService::new(email_config.clone())
                .with_link_expiry(jwt_config.action_token_expiry)
                .send_verification_email(&user.email, &user.first_name, &token)
                .await
        }
        .await;

        if let Err(e) = result {
            tracing::warn!(
                user_id = %user.id,
                error = %e.error,
                "Failed to send verification email"
            );
        }
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn signin(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthenticatedUser, AppError> {
        let Some(row) = UserService::find_by_email(db, &dto.email).await? else {
            track_user_login_failure("unknown_email");
            return Err(AppError::invalid_credentials(INCORRECT_CREDENTIALS));
        };

        if !verify_password_blocking(dto.password, row.password).await? {
            track_user_login_failure("wrong_password");
            return Err(AppError::invalid_credentials(INCORRECT_CREDENTIALS));
        }

        let user = row.user;
        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        track_jwt_issued("access");
        track_user_login_success(user.role.as_str());

        Ok(AuthenticatedUser { user, token })
    }

    #[instrument(skip(db, token, jwt_config))]
    pub async fn verify_email(
        db: &PgPool,
        token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<MessageData, AppError> {
        let claims = verify_action_token(token, TokenPurpose::VerifyEmail, jwt_config)?;
        let user = UserService::mark_verified(db, claims.sub).await?;

        tracing::info!(user_id = %user.id, "Email verified");

        Ok(MessageData::new(EMAIL_VERIFIED))
    }
}
