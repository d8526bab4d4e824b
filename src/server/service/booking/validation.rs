//! Booking request validation.
//!
//! Turns a raw creation payload into `CreateBookingParams`, or reports the first rule it
//! breaks. Nothing here touches the database, so a rejected request never opens a
//! transaction.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{
    model::booking::CreateBookingDto,
    server::{
        error::booking::BookingValidationError,
        model::booking::{BookingMode, CreateBookingParams},
    },
};

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

const DEFAULT_ADULTS: i32 = 1;
const DEFAULT_CHILDREN: i32 = 0;
const DEFAULT_ROOMS: i32 = 1;
const DEFAULT_ADVANCE: f64 = 0.0;

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Returns `None` for any other shape, including single-digit months or days, and for
/// dates that do not exist such as `2025-02-30`.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE.is_match(value) {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Validates a booking creation payload.
///
/// Missing required fields are reported together. The remaining rules are checked in
/// order and the first one broken is returned: date format, negative counts, meal counts,
/// stay ordering, amounts, then occupancy.
///
/// Meal counts are only checked when at least one of them is supplied; absent counts
/// are taken as zero.
///
/// # Arguments
/// - `dto` - Payload as received
/// - `mode` - Online bookings require a package, offline bookings a guest email
///
/// # Returns
/// - `Ok(CreateBookingParams)` - Payload with defaults applied
/// - `Err(BookingValidationError)` - The rule that failed
pub fn validate_booking(
    dto: CreateBookingDto,
    mode: BookingMode,
) -> Result<CreateBookingParams, BookingValidationError> {
    let mut missing = Vec::new();

    if dto.guest_name.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("guest_name");
    }
    if mode == BookingMode::Offline
        && dto.guest_email.as_deref().is_none_or(|v| v.trim().is_empty())
    {
        missing.push("guest_email");
    }
    if dto.accommodation_id.is_none() {
        missing.push("accommodation_id");
    }
    if mode == BookingMode::Online && dto.package_id.is_none() {
        missing.push("package_id");
    }
    if dto.check_in.is_none() {
        missing.push("check_in");
    }
    if dto.check_out.is_none() {
        missing.push("check_out");
    }
    if dto.total_amount.is_none() {
        missing.push("total_amount");
    }

    let (Some(guest_name), Some(accommodation_id), Some(check_in), Some(check_out), Some(total_amount)) = (
        dto.guest_name,
        dto.accommodation_id,
        dto.check_in,
        dto.check_out,
        dto.total_amount,
    ) else {
        return Err(BookingValidationError::MissingFields(missing));
    };
    if !missing.is_empty() {
        return Err(BookingValidationError::MissingFields(missing));
    }

    let check_in = parse_iso_date(&check_in).ok_or(BookingValidationError::InvalidDate {
        field: "check_in",
        value: check_in.clone(),
    })?;
    let check_out = parse_iso_date(&check_out).ok_or(BookingValidationError::InvalidDate {
        field: "check_out",
        value: check_out.clone(),
    })?;

    let adults = dto.adults.unwrap_or(DEFAULT_ADULTS);
    let children = dto.children.unwrap_or(DEFAULT_CHILDREN);
    let rooms = dto.rooms.unwrap_or(DEFAULT_ROOMS);
    let advance_amount = dto.advance_amount.unwrap_or(DEFAULT_ADVANCE);

    let meals_supplied =
        dto.food_veg.is_some() || dto.food_nonveg.is_some() || dto.food_jain.is_some();
    let food_veg = dto.food_veg.unwrap_or(0);
    let food_nonveg = dto.food_nonveg.unwrap_or(0);
    let food_jain = dto.food_jain.unwrap_or(0);

    for (field, count) in [
        ("adults", adults),
        ("children", children),
        ("rooms", rooms),
        ("food_veg", food_veg),
        ("food_nonveg", food_nonveg),
        ("food_jain", food_jain),
    ] {
        if count < 0 {
            return Err(BookingValidationError::NegativeCount { field });
        }
    }

    if meals_supplied {
        // Counts arrive as i32; summing in i64 cannot overflow.
        let guests = i64::from(adults) + i64::from(children);
        let meals = i64::from(food_veg) + i64::from(food_nonveg) + i64::from(food_jain);
        if guests != meals {
            return Err(BookingValidationError::MealCountMismatch { guests, meals });
        }
    }

    if check_out <= check_in {
        return Err(BookingValidationError::CheckOutNotAfterCheckIn);
    }

    if !total_amount.is_finite()
        || total_amount <= 0.0
        || !advance_amount.is_finite()
        || advance_amount < 0.0
    {
        return Err(BookingValidationError::InvalidAmount);
    }

    if adults < 1 || rooms < 1 {
        return Err(BookingValidationError::InsufficientOccupancy);
    }

    Ok(CreateBookingParams {
        guest_name: guest_name.trim().to_string(),
        guest_email: dto.guest_email.filter(|v| !v.trim().is_empty()),
        guest_phone: dto.guest_phone.filter(|v| !v.trim().is_empty()),
        accommodation_id,
        package_id: dto.package_id,
        check_in,
        check_out,
        adults,
        children,
        rooms,
        food_veg,
        food_nonveg,
        food_jain,
        total_amount,
        advance_amount,
    })
}
