use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking request body shared by the online and offline creation routes.
///
/// Every field is optional on the wire so that missing fields can be reported
/// together instead of failing on the first one during deserialization.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateBookingDto {
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub accommodation_id: Option<i32>,
    pub package_id: Option<i32>,
    pub check_in: Option<String>, // Format: "YYYY-MM-DD"
    pub check_out: Option<String>, // Format: "YYYY-MM-DD"
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub rooms: Option<i32>,
    pub food_veg: Option<i32>,
    pub food_nonveg: Option<i32>,
    pub food_jain: Option<i32>,
    pub total_amount: Option<f64>,
    pub advance_amount: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingCreatedDto {
    pub booking_id: i32,
    pub payment_txn_id: String,
    pub payment_status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub accommodation_id: i32,
    pub accommodation_name: Option<String>,
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
    pub payment_status: String,
    pub payment_txn_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OfflineBookingDto {
    pub booking: BookingDto,
    pub owner_email: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccommodationDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDetailsDto {
    pub booking: BookingDto,
    pub accommodation: Option<AccommodationDto>,
    pub owner_email: Option<String>,
    pub booked_date: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePaymentStatusDto {
    pub payment_status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomOccupancyDto {
    pub date: NaiveDate,
    pub total_rooms: i64,
}
