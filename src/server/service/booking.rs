pub mod validation;

use chrono::{NaiveDate, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::booking::CreateBookingDto,
    server::{
        data::{accommodation::AccommodationRepository, booking::BookingRepository},
        error::AppError,
        model::booking::{
            Booking, BookingDetails, BookingMode, CreatedBooking, GetPaginatedBookingsParams,
            PaginatedBookings, PaymentStatus,
        },
        service::{
            booking::validation::{parse_iso_date, validate_booking},
            notification::ConfirmationNotifier,
        },
    },
};

/// Generates the transaction id a booking is created with.
pub fn booking_txn_id() -> String {
    format!("BOOK-{}", Uuid::new_v4())
}

/// Loads a booking's accommodation and owner email.
///
/// A booking whose accommodation row has disappeared still yields details, with no
/// accommodation and no owner email.
pub async fn load_details<C: ConnectionTrait>(
    db: &C,
    booking: Booking,
) -> Result<BookingDetails, DbErr> {
    let found = AccommodationRepository::new(db)
        .find_with_owner_email(booking.accommodation_id)
        .await?;

    let (accommodation, owner_email) = match found {
        Some((accommodation, owner_email)) => (Some(accommodation), owner_email),
        None => (None, None),
    };

    Ok(BookingDetails {
        booking,
        accommodation,
        owner_email,
    })
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking that will be paid through the gateway.
    ///
    /// The booking is stored as `pending` with a fresh `BOOK-` transaction id inside a
    /// transaction; a failed insert leaves nothing behind.
    ///
    /// # Arguments
    /// - `dto` - Creation payload
    ///
    /// # Returns
    /// - `Ok(CreatedBooking)` - Stored booking's id, transaction id and status
    /// - `Err(AppError::ValidationErr)` - The payload broke a booking rule
    /// - `Err(AppError::DbErr)` - Insert or commit failed
    pub async fn create_online(&self, dto: CreateBookingDto) -> Result<CreatedBooking, AppError> {
        let params = validate_booking(dto, BookingMode::Online)?;

        let txn = self.db.begin().await?;
        let booking = BookingRepository::new(&txn)
            .create(
                params,
                BookingMode::Online.initial_status(),
                booking_txn_id(),
                Utc::now(),
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            txn_id = %booking.payment_txn_id,
            "Created pending booking"
        );

        Ok(CreatedBooking {
            booking_id: booking.id,
            payment_txn_id: booking.payment_txn_id,
            payment_status: booking.payment_status,
        })
    }

    /// Creates a booking that was paid outside the gateway and emails the guest.
    ///
    /// The booking is stored as `success`. The confirmation email is sent after commit
    /// and a delivery failure is only logged.
    ///
    /// # Arguments
    /// - `dto` - Creation payload; a guest email is required
    /// - `notifier` - Confirmation email sender
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Stored booking with accommodation and owner email
    /// - `Err(AppError::ValidationErr)` - The payload broke a booking rule
    /// - `Err(AppError::DbErr)` - Insert, lookup or commit failed
    pub async fn create_offline(
        &self,
        dto: CreateBookingDto,
        notifier: &ConfirmationNotifier,
    ) -> Result<BookingDetails, AppError> {
        let params = validate_booking(dto, BookingMode::Offline)?;

        let txn = self.db.begin().await?;
        let booking = BookingRepository::new(&txn)
            .create(
                params,
                BookingMode::Offline.initial_status(),
                booking_txn_id(),
                Utc::now(),
            )
            .await?;
        let details = load_details(&txn, booking).await?;
        txn.commit().await?;

        tracing::info!(
            booking_id = details.booking.id,
            txn_id = %details.booking.payment_txn_id,
            "Created offline booking"
        );

        if let Err(e) = notifier.send_confirmation(&details).await {
            tracing::error!(
                booking_id = details.booking.id,
                "Failed to send offline booking confirmation: {}",
                e
            );
        }

        Ok(details)
    }

    /// Gets a page of bookings, newest first.
    pub async fn get_paginated(
        &self,
        params: GetPaginatedBookingsParams,
    ) -> Result<PaginatedBookings, AppError> {
        Ok(BookingRepository::new(self.db).get_paginated(params).await?)
    }

    /// Gets a booking with its accommodation and owner email by transaction id.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Booking found
    /// - `Err(AppError::NotFound)` - No booking carries this transaction id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_details(&self, txn_id: &str) -> Result<BookingDetails, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_txn_id(txn_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(load_details(self.db, booking).await?)
    }

    /// Overrides a booking's payment status.
    ///
    /// Applies unconditionally once the status is known and the booking exists. No
    /// confirmation email is sent.
    ///
    /// # Arguments
    /// - `id` - Booking id
    /// - `payment_status` - Requested status as received
    ///
    /// # Returns
    /// - `Ok(PaymentStatus)` - Status now stored
    /// - `Err(AppError::BadRequest)` - Status missing or not one of the four states
    /// - `Err(AppError::NotFound)` - No booking with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        payment_status: Option<String>,
    ) -> Result<PaymentStatus, AppError> {
        let raw = payment_status
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("Payment status is required".to_string()))?;
        let status = raw
            .parse::<PaymentStatus>()
            .map_err(|_| AppError::BadRequest("Invalid payment status".to_string()))?;

        let rows = BookingRepository::new(self.db)
            .update_status(id, status)
            .await?;
        if rows == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        tracing::info!(booking_id = id, status = %status, "Payment status overridden");

        Ok(status)
    }

    /// Counts rooms held by paid bookings checking in on a date.
    ///
    /// # Arguments
    /// - `check_in` - Date as `YYYY-MM-DD`
    /// - `accommodation_id` - Accommodation to count for
    ///
    /// # Returns
    /// - `Ok((date, rooms))` - Parsed date and total rooms
    /// - `Err(AppError::BadRequest)` - Date missing or malformed, or id missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn room_occupancy(
        &self,
        check_in: Option<String>,
        accommodation_id: Option<i32>,
    ) -> Result<(NaiveDate, i64), AppError> {
        let date = check_in
            .as_deref()
            .and_then(parse_iso_date)
            .ok_or_else(|| {
                AppError::BadRequest("Valid check_in date (YYYY-MM-DD) is required".to_string())
            })?;
        let accommodation_id = accommodation_id
            .ok_or_else(|| AppError::BadRequest("Accommodation id is required".to_string()))?;

        let rooms = BookingRepository::new(self.db)
            .rooms_booked(accommodation_id, date)
            .await?;

        Ok((date, rooms))
    }
}
