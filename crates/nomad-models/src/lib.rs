//! # Nomad Models
//!
//! Domain models and DTOs for the Barefoot Nomad API.
//!
//! This crate holds the database entities and the request/response shapes
//! shared by the HTTP layer, the CLI, and the tests.
//!
//! # Modules
//!
//! - [`auth`]: Signin, email verification, and password reset DTOs
//! - [`facilities`]: Accommodation facilities and their creation DTO
//! - [`users`]: User entities, signup and role assignment DTOs
//!
//! # Example
//!
//! ```ignore
//! use nomad_models::facilities::{CreateFacilityDto, Facility};
//! use nomad_models::users::{AuthenticatedUser, User};
//!
//! let data = AuthenticatedUser { user, token };
//! ```

pub mod auth;
pub mod facilities;
pub mod users;

pub use auth::{
    LoginRequest, MessageData, NewPasswordRequest, PasswordResetData, PasswordResetRequest,
};
pub use facilities::{CreateFacilityDto, Facility};
pub use users::{AuthenticatedUser, RoleAssignmentRequest, SignupRequest, User, UserRow};
