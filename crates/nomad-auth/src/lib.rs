//! # Nomad Auth
//!
//! Roles, token claims, and JWT utilities for the Barefoot Nomad API.
//!
//! - [`roles`]: the fixed [`UserRole`] set
//! - [`claims`]: session and single-purpose token claims
//! - [`jwt`]: token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use nomad_auth::{UserRole, create_access_token, verify_token};
//!
//! let token = create_access_token(user_id, "jane@example.com", UserRole::TravelAdmin, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, UserRole::TravelAdmin);
//! ```

pub mod claims;
pub mod jwt;
pub mod roles;

pub use claims::{ActionClaims, Claims, TokenPurpose};
pub use jwt::{create_access_token, create_action_token, verify_action_token, verify_token};
pub use roles::UserRole;
