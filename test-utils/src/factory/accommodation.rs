//! Accommodation factory for creating test accommodations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accommodations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let accommodation = AccommodationFactory::new(&db, Some(owner.id))
///     .name("Lakeside Tent")
///     .coordinates(None)
///     .build()
///     .await?;
/// ```
pub struct AccommodationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
    coordinates: Option<(f64, f64)>,
    owner_id: Option<i32>,
}

impl<'a> AccommodationFactory<'a> {
    /// Creates a new AccommodationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Accommodation {id}"`
    /// - address: `Some("Lakeshore Road, Pawna")`
    /// - coordinates: `Some((18.6651, 73.4927))`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Optional owning user id
    pub fn new(db: &'a DatabaseConnection, owner_id: Option<i32>) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Accommodation {}", id),
            address: Some("Lakeshore Road, Pawna".to_string()),
            coordinates: Some((18.6651, 73.4927)),
            owner_id,
        }
    }

    /// Sets the accommodation name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the accommodation address.
    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Sets the latitude/longitude pair.
    pub fn coordinates(mut self, coordinates: Option<(f64, f64)>) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Builds and inserts the accommodation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::accommodation::Model)` - Created accommodation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::accommodation::Model, DbErr> {
        entity::accommodation::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            latitude: ActiveValue::Set(self.coordinates.map(|(lat, _)| lat)),
            longitude: ActiveValue::Set(self.coordinates.map(|(_, lng)| lng)),
            owner_id: ActiveValue::Set(self.owner_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an accommodation with default values.
///
/// Shorthand for `AccommodationFactory::new(db, owner_id).build().await`.
pub async fn create_accommodation(
    db: &DatabaseConnection,
    owner_id: Option<i32>,
) -> Result<entity::accommodation::Model, DbErr> {
    AccommodationFactory::new(db, owner_id).build().await
}
