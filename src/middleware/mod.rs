//! Authentication and authorization stages of the request pipeline.
//!
//! # Modules
//!
//! - [`auth`]: token extraction and verification, the [`auth::AuthUser`] extractor
//! - [`role`]: role guards layered after authentication
//!
//! # Ordering
//!
//! Routes that need both stages add them as `route_layer`s, guard first,
//! because the last layer added runs first:
//!
//! ```ignore
//! use axum::{middleware, routing::post};
//! use crate::middleware::{auth::authenticate, role::require_facility_admin};
//!
//! post(create_facility)
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_facility_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```

pub mod auth;
pub mod role;
