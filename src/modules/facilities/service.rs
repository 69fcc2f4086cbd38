use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use nomad_core::AppError;
use nomad_models::{CreateFacilityDto, Facility};

const FACILITY_COLUMNS: &str = "id, name, street, city, country, address, number_of_rooms, \
     available_space, images, description, created_by, created_at, updated_at";

pub struct FacilityService;

impl FacilityService {
    #[instrument(skip(db, dto), fields(facility.name = %dto.name))]
    pub async fn create_facility(
        db: &PgPool,
        created_by: Uuid,
        dto: CreateFacilityDto,
    ) -> Result<Facility, AppError> {
        let facility = sqlx::query_as::<_, Facility>(&format!(
            "INSERT INTO facilities
                (name, street, city, country, address, number_of_rooms, available_space,
                 images, description, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {}",
            FACILITY_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.street)
        .bind(&dto.city)
        .bind(&dto.country)
        .bind(&dto.address)
        .bind(dto.number_of_rooms)
        .bind(dto.available_space)
        .bind(&dto.images)
        .bind(&dto.description)
        .bind(created_by)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(facility)
    }

    /// All facilities, oldest first.
    #[instrument(skip(db))]
    pub async fn list_facilities(db: &PgPool) -> Result<Vec<Facility>, AppError> {
        let facilities = sqlx::query_as::<_, Facility>(&format!(
            "SELECT {} FROM facilities ORDER BY created_at ASC, id ASC",
            FACILITY_COLUMNS
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(facilities)
    }
}
