pub mod controller;
pub mod router;
pub mod rules;
pub mod service;

pub use router::init_users_router;
