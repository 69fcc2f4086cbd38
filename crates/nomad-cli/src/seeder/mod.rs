//! Fake data for local development.
//!
//! Seeding runs in dependency order: users first, then facilities owned by
//! the freshly seeded travel admins.

mod facilities;
mod models;
mod users;

use std::time::Instant;

use nomad_auth::UserRole;
use sqlx::PgPool;

pub use facilities::{generate_facilities, insert_facilities_batch, seed_facilities};
pub use models::{FacilitySeed, SeedConfig, UserSeed};
pub use users::{clear_users, generate_users, insert_users_batch, seed_email, seed_users};

/// Every seeded account uses this email domain.
pub const SEED_EMAIL_DOMAIN: &str = "seed.barefoot.test";

/// Counts of what a seed run inserted.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub requesters: usize,
    pub travel_admins: usize,
    pub facilities: usize,
}

/// Seeds requesters, travel admins, and their facilities.
pub async fn seed_all(
    db: &PgPool,
    config: SeedConfig,
) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Starting database seed...\n");

    let requesters = seed_users(db, UserRole::Requester, config.requesters, &config.password).await?;
    let admins =
        seed_users(db, UserRole::TravelAdmin, config.travel_admins, &config.password).await?;
    let facilities = seed_facilities(db, &admins, config.facilities_per_admin).await?;

    let summary = SeedSummary {
        requesters: requesters.len(),
        travel_admins: admins.len(),
        facilities: facilities.len(),
    };

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("   Requesters:    {}", summary.requesters);
    println!("   Travel admins: {}", summary.travel_admins);
    println!("   Facilities:    {}", summary.facilities);
    println!("   Password:      {}", config.password);

    Ok(summary)
}

/// Removes every seeded user together with the facilities they created.
pub async fn clear_all(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🧹 Clearing seeded data...\n");

    let deleted = clear_users(db).await?;

    println!("\n✅ Cleared seeded data in {:?}", start_time.elapsed());
    Ok(deleted)
}
