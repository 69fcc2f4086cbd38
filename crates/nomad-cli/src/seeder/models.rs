//! Seed records and the configuration that controls how many are generated.

use nomad_auth::UserRole;
use uuid::Uuid;

/// Seed data for creating a user.
pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub location: Option<String>,
}

/// Seed data for creating a facility.
pub struct FacilitySeed {
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub number_of_rooms: i32,
    pub available_space: i32,
    pub images: Vec<String>,
    pub description: String,
    pub created_by: Uuid,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub requesters: usize,
    pub travel_admins: usize,
    /// Facilities created by each seeded travel admin.
    pub facilities_per_admin: usize,
    /// Plain-text password shared by every seeded account.
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            requesters: 20,
            travel_admins: 3,
            facilities_per_admin: 5,
            password: "Password123".to_string(),
        }
    }
}

impl SeedConfig {
    pub fn new(requesters: usize) -> Self {
        Self {
            requesters,
            ..Default::default()
        }
    }

    pub fn with_travel_admins(mut self, travel_admins: usize) -> Self {
        self.travel_admins = travel_admins;
        self
    }

    pub fn with_facilities(mut self, facilities_per_admin: usize) -> Self {
        self.facilities_per_admin = facilities_per_admin;
        self
    }

    pub fn total_users(&self) -> usize {
        self.requesters + self.travel_admins
    }

    pub fn total_facilities(&self) -> usize {
        self.travel_admins * self.facilities_per_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = SeedConfig::new(10)
            .with_travel_admins(2)
            .with_facilities(4);
        assert_eq!(config.requesters, 10);
        assert_eq!(config.total_users(), 12);
        assert_eq!(config.total_facilities(), 8);
    }

    #[test]
    fn test_no_admins_means_no_facilities() {
        let config = SeedConfig::new(5).with_travel_admins(0).with_facilities(9);
        assert_eq!(config.total_facilities(), 0);
    }
}
