//! Shared helper utilities for factory methods.
//!
//! Provides ID generation shared by all factories and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner and an accommodation belonging to them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, accommodation))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_accommodation_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::accommodation::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let accommodation =
        crate::factory::accommodation::create_accommodation(db, Some(owner.id)).await?;

    Ok((owner, accommodation))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as accommodation owner)
/// 2. Accommodation
/// 3. Booking (pending)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, accommodation, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::accommodation::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (owner, accommodation) = create_accommodation_with_owner(db).await?;
    let booking = crate::factory::booking::create_booking(db, accommodation.id).await?;

    Ok((owner, accommodation, booking))
}
