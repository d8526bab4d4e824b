use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A booking request broke one of the creation rules.
///
/// Produced by the booking validator before any transaction is opened, so a
/// rejected request never leaves a row behind.
#[derive(Error, Debug, PartialEq)]
pub enum BookingValidationError {
    /// One or more required fields were absent or null.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A stay date is not a calendar date in `YYYY-MM-DD` form.
    #[error("Invalid {field} date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// Name of the date field
        field: &'static str,
        /// Value as received
        value: String,
    },

    /// A guest or meal count is below zero.
    #[error("{field} cannot be negative")]
    NegativeCount {
        /// Name of the count field
        field: &'static str,
    },

    /// Meal preference counts do not add up to the number of guests.
    #[error("Food preferences must match total guests ({meals} meals for {guests} guests)")]
    MealCountMismatch {
        /// adults + children
        guests: i64,
        /// food_veg + food_nonveg + food_jain
        meals: i64,
    },

    /// Check-out is on or before check-in.
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,

    /// Total is not positive or advance is negative.
    #[error("Invalid amount values")]
    InvalidAmount,

    /// Fewer than one adult or one room.
    #[error("Must have at least 1 adult and 1 room")]
    InsufficientOccupancy,
}

/// Every validation failure is a 400 Bad Request carrying the rule that failed.
impl IntoResponse for BookingValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
