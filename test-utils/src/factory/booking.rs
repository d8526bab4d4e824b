//! Booking factory for creating test bookings.
//!
//! Defaults describe a valid two-adult, one-room stay so tests only override the
//! fields they care about.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let stale = BookingFactory::new(&db, accommodation.id)
///     .created_at(Utc::now() - Duration::hours(2))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    accommodation_id: i32,
    guest_name: String,
    guest_email: Option<String>,
    guest_phone: Option<String>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    adults: i32,
    children: i32,
    rooms: i32,
    total_amount: f64,
    advance_amount: f64,
    payment_status: String,
    payment_txn_id: String,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - guest: `"Guest {id}"` with email `"guest{id}@example.com"`
    /// - stay: 2025-06-01 to 2025-06-03, 2 adults, 0 children, 1 room, 2 veg meals
    /// - amounts: 5000.00 total, 1000.00 advance
    /// - payment_status: `"pending"`, payment_txn_id: `"BOOK-test-{id}"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `accommodation_id` - Accommodation this booking references
    pub fn new(db: &'a DatabaseConnection, accommodation_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            accommodation_id,
            guest_name: format!("Guest {}", id),
            guest_email: Some(format!("guest{}@example.com", id)),
            guest_phone: Some("9876543210".to_string()),
            check_in: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            adults: 2,
            children: 0,
            rooms: 1,
            total_amount: 5000.0,
            advance_amount: 1000.0,
            payment_status: "pending".to_string(),
            payment_txn_id: format!("BOOK-test-{}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the guest email (None to leave it empty).
    pub fn guest_email(mut self, guest_email: Option<String>) -> Self {
        self.guest_email = guest_email;
        self
    }

    /// Sets the stay dates.
    pub fn stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Sets the number of rooms.
    pub fn rooms(mut self, rooms: i32) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the total and advance amounts.
    pub fn amounts(mut self, total_amount: f64, advance_amount: f64) -> Self {
        self.total_amount = total_amount;
        self.advance_amount = advance_amount;
        self
    }

    /// Sets the stored payment status string.
    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Sets the payment transaction id.
    pub fn payment_txn_id(mut self, payment_txn_id: impl Into<String>) -> Self {
        self.payment_txn_id = payment_txn_id.into();
        self
    }

    /// Sets the creation timestamp, used to simulate stale bookings.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let guests = self.adults + self.children;

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            guest_name: ActiveValue::Set(self.guest_name),
            guest_email: ActiveValue::Set(self.guest_email),
            guest_phone: ActiveValue::Set(self.guest_phone),
            accommodation_id: ActiveValue::Set(self.accommodation_id),
            package_id: ActiveValue::Set(None),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            adults: ActiveValue::Set(self.adults),
            children: ActiveValue::Set(self.children),
            rooms: ActiveValue::Set(self.rooms),
            food_veg: ActiveValue::Set(guests),
            food_nonveg: ActiveValue::Set(0),
            food_jain: ActiveValue::Set(0),
            total_amount: ActiveValue::Set(self.total_amount),
            advance_amount: ActiveValue::Set(self.advance_amount),
            payment_status: ActiveValue::Set(self.payment_status),
            payment_txn_id: ActiveValue::Set(self.payment_txn_id),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values for an accommodation.
///
/// Shorthand for `BookingFactory::new(db, accommodation_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    accommodation_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, accommodation_id).build().await
}

/// Returns a timestamp `hours` in the past, for staleness tests.
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(hours)
}
