use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use nomad_auth::UserRole;
use nomad_core::FieldError;
use nomad_models::{
    AuthenticatedUser, CreateFacilityDto, Facility, LoginRequest, MessageData,
    NewPasswordRequest, PasswordResetData, PasswordResetRequest, RoleAssignmentRequest,
    SignupRequest, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::signin,
        crate::modules::auth::controller::verify_email,
        crate::modules::users::controller::update_role,
        crate::modules::facilities::controller::create_facility,
        crate::modules::facilities::controller::list_facilities,
        crate::modules::password_reset::controller::request_password_reset,
        crate::modules::password_reset::controller::reset_password,
    ),
    components(
        schemas(
            User,
            UserRole,
            AuthenticatedUser,
            SignupRequest,
            LoginRequest,
            RoleAssignmentRequest,
            Facility,
            CreateFacilityDto,
            PasswordResetRequest,
            NewPasswordRequest,
            PasswordResetData,
            MessageData,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup, signin, and email verification"),
        (name = "Users", description = "Role management"),
        (name = "Facilities", description = "Accommodation facilities"),
        (name = "Password Reset", description = "Password recovery by email")
    ),
    info(
        title = "Barefoot Nomad API",
        version = "0.1.0",
        description = "Travel and accommodation booking backend built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "access_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                    crate::middleware::auth::ACCESS_TOKEN_HEADER,
                ))),
            )
        }
    }
}
