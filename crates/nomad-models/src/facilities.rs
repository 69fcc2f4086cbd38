//! Accommodation facility models.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An accommodation facility listed by a travel admin, manager, or super admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Facility {
    pub id: Uuid,
    #[schema(example = "Transcorp Hilton")]
    pub name: String,
    #[schema(example = "34 Idu")]
    pub street: String,
    #[schema(example = "Abuja")]
    pub city: String,
    #[schema(example = "Nigeria")]
    pub country: String,
    #[schema(example = "Otolo, Nnewi")]
    pub address: String,
    pub number_of_rooms: i32,
    pub available_space: i32,
    #[schema(example = json!(["https://cloudinary.com/16x16/1.png"]))]
    pub images: Vec<String>,
    #[schema(example = "Our services are the best")]
    pub description: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Facility creation payload.
///
/// Counts may arrive as JSON integers or numeric strings, and `images` may be
/// an array or a single comma-separated string.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFacilityDto {
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub address: String,
    #[serde(deserialize_with = "deserialize_count")]
    #[schema(value_type = i32, example = 8)]
    pub number_of_rooms: i32,
    #[serde(deserialize_with = "deserialize_count")]
    #[schema(value_type = i32, example = 7)]
    pub available_space: i32,
    #[serde(deserialize_with = "deserialize_images")]
    #[schema(value_type = Vec<String>)]
    pub images: Vec<String>,
    pub description: String,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| de::Error::custom("expected a 32-bit integer")),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom("expected an integer string")),
        other => Err(de::Error::custom(format!("expected an integer, got {}", other))),
    }
}

/// Splits a comma-separated image list, dropping blank entries.
pub fn split_images(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(de::Error::custom(format!(
                    "expected an image url, got {}",
                    other
                ))),
            })
            .collect(),
        Value::String(s) => Ok(split_images(&s)),
        other => Err(de::Error::custom(format!(
            "expected an array of image urls, got {}",
            other
        ))),
    }
}
