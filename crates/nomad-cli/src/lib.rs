//! # Nomad CLI
//!
//! Database seeding utilities for Barefoot Nomad development.
//!
//! Seeded accounts all use the [`seeder::SEED_EMAIL_DOMAIN`] domain so they can
//! be removed again without touching real users.
//!
//! ## Usage
//!
//! ```ignore
//! use nomad_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20).with_travel_admins(3).with_facilities(10);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
