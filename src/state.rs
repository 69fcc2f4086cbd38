use sqlx::PgPool;

use nomad_config::{CorsConfig, EmailConfig, JwtConfig};
use nomad_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            email_config: EmailConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> Result<AppState, sqlx::Error> {
    let db = init_db_pool().await?;
    Ok(AppState::new(db))
}
