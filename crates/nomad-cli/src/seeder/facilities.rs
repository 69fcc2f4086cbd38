//! Facility seeding functionality.

use fake::Fake;
use fake::faker::address::en::*;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::models::FacilitySeed;

/// Generates `per_admin` facilities for each travel admin in parallel
pub fn generate_facilities(admin_ids: &[Uuid], per_admin: usize) -> Vec<FacilitySeed> {
    admin_ids
        .par_iter()
        .flat_map(|&admin_id| {
            (0..per_admin)
                .map(|_| generate_facility(admin_id))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn generate_facility(created_by: Uuid) -> FacilitySeed {
    let city: String = CityName().fake();
    let street: String = StreetName().fake();
    let building: String = BuildingNumber().fake();
    let country: String = CountryName().fake();
    let company: String = CompanyName().fake();
    let number_of_rooms: i32 = (1..60).fake();
    let available_space: i32 = (0..=number_of_rooms).fake();
    let image_count: usize = (1..4).fake();

    FacilitySeed {
        name: format!("{} Lodge", company),
        address: format!("{} {}", building, street),
        street,
        city,
        country,
        number_of_rooms,
        available_space,
        images: (0..image_count)
            .map(|_| format!("https://picsum.photos/seed/{}/640/480", Uuid::new_v4()))
            .collect(),
        description: Sentence(6..14).fake(),
        created_by,
    }
}

/// Seeds facilities owned by the given travel admins
pub async fn seed_facilities(
    db: &PgPool,
    admin_ids: &[Uuid],
    per_admin: usize,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🏨 Seeding {} facilities ({} per travel admin)...",
        admin_ids.len() * per_admin,
        per_admin
    );

    let facilities = generate_facilities(admin_ids, per_admin);
    let ids = insert_facilities_batch(db, &facilities).await?;

    println!(
        "   ✓ Inserted {} facilities in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts facilities in batches using multi-value INSERT statements
pub async fn insert_facilities_batch(
    db: &PgPool,
    facilities: &[FacilitySeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 10 params per facility
    const BATCH_SIZE: usize = 500;

    let mut all_ids = Vec::with_capacity(facilities.len());
    for chunk in facilities.chunks(BATCH_SIZE) {
        all_ids.extend(insert_facilities_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_facilities_chunk(
    tx: &mut Transaction<'_, Postgres>,
    facilities: &[FacilitySeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if facilities.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO facilities (name, street, city, country, address, number_of_rooms, available_space, images, description, created_by) VALUES ",
    );

    for i in 0..facilities.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 10;
        let placeholders = (1..=10)
            .map(|n| format!("${}", p + n))
            .collect::<Vec<_>>()
            .join(", ");
        query.push('(');
        query.push_str(&placeholders);
        query.push(')');
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for facility in facilities {
        q = q
            .bind(&facility.name)
            .bind(&facility.street)
            .bind(&facility.city)
            .bind(&facility.country)
            .bind(&facility.address)
            .bind(facility.number_of_rooms)
            .bind(facility.available_space)
            .bind(&facility.images)
            .bind(&facility.description)
            .bind(facility.created_by);
    }

    let ids: Vec<Uuid> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}
