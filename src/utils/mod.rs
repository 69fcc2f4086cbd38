//! Shared utilities.
//!
//! - [`email`]: verification and password reset mail over SMTP

pub mod email;
