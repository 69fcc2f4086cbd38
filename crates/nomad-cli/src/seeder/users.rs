//! User seeding functionality.
//!
//! Generates requesters and travel admins with fake names. Every seeded
//! account is verified and shares one password so it can sign in right away.

use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::name::en::*;
use nomad_auth::UserRole;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::SEED_EMAIL_DOMAIN;
use super::models::UserSeed;

// Seed accounts only need to be realistic, not expensive to crack.
const SEED_HASH_COST: u32 = 4;

/// Builds the seed email for the `index`-th user of a role.
pub fn seed_email(first_name: &str, last_name: &str, role: UserRole, index: usize) -> String {
    let clean = |s: &str| {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase()
    };
    format!(
        "{}.{}.{}{}@{}",
        clean(first_name),
        clean(last_name),
        role.as_str().replace('_', ""),
        index,
        SEED_EMAIL_DOMAIN
    )
}

/// Generates `count` users of one role, hashing passwords in parallel with Rayon
pub fn generate_users(
    role: UserRole,
    count: usize,
    password: &str,
) -> Result<Vec<UserSeed>, bcrypt::BcryptError> {
    (0..count)
        .into_par_iter()
        .map(|index| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let location: String = CityName().fake();

            Ok(UserSeed {
                email: seed_email(&first_name, &last_name, role, index),
                first_name,
                last_name,
                password_hash: bcrypt::hash(password, SEED_HASH_COST)?,
                role,
                location: Some(location),
            })
        })
        .collect()
}

/// Seeds users of one role into the database, returning their ids
pub async fn seed_users(
    db: &PgPool,
    role: UserRole,
    count: usize,
    password: &str,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👤 Seeding {} {} users...", count, role);

    let users = generate_users(role, count, password)?;
    let ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} {} users in {:?}",
        ids.len(),
        role,
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts users in batches using multi-value INSERT statements
pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 6 params per user
    const BATCH_SIZE: usize = 1000;

    let mut all_ids = Vec::with_capacity(users.len());
    for chunk in users.chunks(BATCH_SIZE) {
        all_ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO users (first_name, last_name, email, password, role, location, is_verified) VALUES ",
    );

    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${}, TRUE)",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5,
            p + 6
        ));
    }

    // Reseeding without clearing first skips the duplicates.
    query.push_str(" ON CONFLICT (email) DO NOTHING RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role)
            .bind(&user.location);
    }

    let ids: Vec<Uuid> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Clears all seeded users; their facilities go with them
pub async fn clear_users(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded users...");

    let deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} users in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
