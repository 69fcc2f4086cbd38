pub mod auth;
pub mod facilities;
pub mod password_reset;
pub mod users;
