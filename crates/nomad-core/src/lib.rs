//! # Nomad Core
//!
//! Core types, errors, and utilities for the Barefoot Nomad API.
//!
//! - [`errors`]: Application error type with the API's JSON error shapes
//! - [`password`]: Password hashing and verification
//! - [`response`]: Success envelopes shared by every controller
//!
//! # Example
//!
//! ```ignore
//! use nomad_core::errors::{AppError, FieldError};
//! use nomad_core::response::ApiResponse;
//!
//! let error = AppError::validation(vec![FieldError::new("name", "Kindly Provide a name")]);
//! let ok = ApiResponse::success(facility);
//! ```

pub mod errors;
pub mod password;
pub mod response;

pub use errors::{AppError, ErrorBody, FieldError};
pub use password::{hash_password, verify_password};
pub use response::{ApiResponse, NoticeResponse};
