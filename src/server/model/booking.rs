//! Booking domain models and parameters.
//!
//! Defines the booking payment lifecycle states, the booking domain model converted at the
//! repository boundary, validated creation parameters, and the flattened context the
//! confirmation notifier renders.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::model::booking::{
    AccommodationDto, BookingCreatedDto, BookingDetailsDto, BookingDto, OfflineBookingDto,
    PaginatedBookingsDto,
};

/// Payment state of a booking.
///
/// Stored as its lowercase string form in the `payment_status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
    Expired,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Success,
        PaymentStatus::Failed,
        PaymentStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized payment status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaymentStatus(pub String);

impl fmt::Display for UnknownPaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown payment status '{}'", self.0)
    }
}

impl std::error::Error for UnknownPaymentStatus {}

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownPaymentStatus(s.to_string()))
    }
}

/// Which creation route a booking request arrived through.
///
/// Online bookings wait for the payment gateway; offline bookings were paid at the
/// desk and are stored as settled immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingMode {
    Online,
    Offline,
}

impl BookingMode {
    /// Payment state a freshly created booking starts in.
    pub fn initial_status(&self) -> PaymentStatus {
        match self {
            BookingMode::Online => PaymentStatus::Pending,
            BookingMode::Offline => PaymentStatus::Success,
        }
    }
}

/// A guest's reservation for an accommodation over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub accommodation_id: i32,
    pub package_id: Option<i32>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub rooms: i32,
    pub food_veg: i32,
    pub food_nonveg: i32,
    pub food_jain: i32,
    pub total_amount: f64,
    pub advance_amount: f64,
    pub payment_status: PaymentStatus,
    /// Correlates the booking with a gateway payment attempt.
    pub payment_txn_id: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The booking entity from the database
    ///
    /// # Returns
    /// - `Ok(Booking)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored payment status is not one of the known states
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        let payment_status = entity
            .payment_status
            .parse::<PaymentStatus>()
            .map_err(|e| DbErr::Custom(format!("Booking {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            guest_name: entity.guest_name,
            guest_email: entity.guest_email,
            guest_phone: entity.guest_phone,
            accommodation_id: entity.accommodation_id,
            package_id: entity.package_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            adults: entity.adults,
            children: entity.children,
            rooms: entity.rooms,
            food_veg: entity.food_veg,
            food_nonveg: entity.food_nonveg,
            food_jain: entity.food_jain,
            total_amount: entity.total_amount,
            advance_amount: entity.advance_amount,
            payment_status,
            payment_txn_id: entity.payment_txn_id,
            created_at: entity.created_at,
        })
    }

    /// Amount still owed at check-in.
    pub fn remaining_amount(&self) -> f64 {
        self.total_amount - self.advance_amount
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Arguments
    /// - `accommodation_name` - Display name of the booked accommodation, when joined
    pub fn into_dto(self, accommodation_name: Option<String>) -> BookingDto {
        BookingDto {
            id: self.id,
            guest_name: self.guest_name,
            guest_email: self.guest_email,
            guest_phone: self.guest_phone,
            accommodation_id: self.accommodation_id,
            accommodation_name,
            package_id: self.package_id,
            check_in: self.check_in,
            check_out: self.check_out,
            adults: self.adults,
            children: self.children,
            rooms: self.rooms,
            food_veg: self.food_veg,
            food_nonveg: self.food_nonveg,
            food_jain: self.food_jain,
            total_amount: self.total_amount,
            advance_amount: self.advance_amount,
            payment_status: self.payment_status.to_string(),
            payment_txn_id: self.payment_txn_id,
            created_at: self.created_at,
        }
    }
}

/// Booking joined with the name of its accommodation, for list views.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithAccommodationName {
    pub booking: Booking,
    pub accommodation_name: Option<String>,
}

/// Accommodation fields needed by booking views and confirmations.
#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<i32>,
}

impl Accommodation {
    pub fn from_entity(entity: entity::accommodation::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            latitude: entity.latitude,
            longitude: entity.longitude,
            owner_id: entity.owner_id,
        }
    }

    /// Latitude/longitude pair, only when both are stored.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn into_dto(self) -> AccommodationDto {
        AccommodationDto {
            id: self.id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            owner_id: self.owner_id,
        }
    }
}

/// Booking with its accommodation and the accommodation owner's contact email.
///
/// Used by the details lookup and as the source of confirmation emails.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub accommodation: Option<Accommodation>,
    pub owner_email: Option<String>,
}

impl BookingDetails {
    /// Converts to the details lookup response.
    ///
    /// `booked_date` is the calendar date the booking was created on.
    pub fn into_dto(self) -> BookingDetailsDto {
        let booked_date = self.booking.created_at.date_naive();
        let accommodation_name = self.accommodation.as_ref().map(|a| a.name.clone());

        BookingDetailsDto {
            booking: self.booking.into_dto(accommodation_name),
            accommodation: self.accommodation.map(Accommodation::into_dto),
            owner_email: self.owner_email,
            booked_date,
        }
    }

    pub fn into_offline_dto(self) -> OfflineBookingDto {
        let accommodation_name = self.accommodation.map(|a| a.name);

        OfflineBookingDto {
            booking: self.booking.into_dto(accommodation_name),
            owner_email: self.owner_email,
        }
    }
}

/// Validated parameters for inserting a booking.
///
/// Only produced by the booking validator, so every invariant of a stored booking
/// already holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParams {
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub accommodation_id: i32,
    pub package_id: Option<i32>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub rooms: i32,
    pub food_veg: i32,
    pub food_nonveg: i32,
    pub food_jain: i32,
    pub total_amount: f64,
    pub advance_amount: f64,
}

/// A stored booking's identifiers returned to the online creation caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedBooking {
    pub booking_id: i32,
    pub payment_txn_id: String,
    pub payment_status: PaymentStatus,
}

impl CreatedBooking {
    pub fn into_dto(self) -> BookingCreatedDto {
        BookingCreatedDto {
            booking_id: self.booking_id,
            payment_txn_id: self.payment_txn_id,
            payment_status: self.payment_status.to_string(),
        }
    }
}

/// Page request for the booking list, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPaginatedBookingsParams {
    pub page: u64,
    pub per_page: u64,
}

impl GetPaginatedBookingsParams {
    pub const MAX_PER_PAGE: u64 = 100;

    /// Clamps `page` to at least 1 and `per_page` into `1..=MAX_PER_PAGE`.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }
}

/// One page of bookings with the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBookings {
    pub bookings: Vec<BookingWithAccommodationName>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedBookings {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page)
    }

    pub fn into_dto(self) -> PaginatedBookingsDto {
        let total_pages = self.total_pages();

        PaginatedBookingsDto {
            bookings: self
                .bookings
                .into_iter()
                .map(|b| b.booking.into_dto(b.accommodation_name))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
