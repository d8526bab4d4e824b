use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingCreatedDto, BookingDetailsDto, CreateBookingDto, OfflineBookingDto,
            PaginatedBookingsDto, RoomOccupancyDto, UpdatePaymentStatusDto,
        },
    },
    server::{
        error::AppError, model::booking::GetPaginatedBookingsParams,
        service::booking::BookingService, state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

#[derive(Deserialize)]
pub struct RoomOccupancyParams {
    pub check_in: Option<String>,
    pub id: Option<i32>,
}

/// Get a page of bookings.
///
/// Returns bookings newest first, each with the name of its accommodation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (1-based page and page size)
///
/// # Returns
/// - `200 OK` - Page of bookings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, at most 100 (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let bookings = service
        .get_paginated(GetPaginatedBookingsParams::new(params.page, params.per_page))
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

/// Create a booking to be paid through the gateway.
///
/// The booking is stored as `pending` with a fresh transaction id. Payment is started
/// separately through the payment initiation endpoint.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guest, stay, occupancy, meal and amount fields
///
/// # Returns
/// - `201 Created` - Booking stored as pending
/// - `400 Bad Request` - Missing fields or a broken booking rule
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created pending booking", body = BookingCreatedDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let created = service.create_online(payload).await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Create a booking that was paid outside the gateway.
///
/// The booking is stored as `success` and a confirmation email is sent to the guest.
/// A failed email does not fail the request.
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `payload` - Same fields as online creation; a guest email is required
///
/// # Returns
/// - `201 Created` - Booking stored as paid
/// - `400 Bad Request` - Missing fields or a broken booking rule
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/bookings/offline",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created paid booking", body = OfflineBookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offline_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let details = service.create_offline(payload, &state.notifier).await?;

    Ok((StatusCode::CREATED, Json(details.into_offline_dto())))
}

/// Get a booking with its accommodation and owner contact by transaction id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `txnid` - Transaction id currently stored on the booking
///
/// # Returns
/// - `200 OK` - Booking details
/// - `404 Not Found` - No booking carries this transaction id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/bookings/details/{txnid}",
    tag = BOOKING_TAG,
    params(
        ("txnid" = String, Path, description = "Booking or payment transaction id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking details", body = BookingDetailsDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_details(
    State(state): State<AppState>,
    Path(txnid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let details = service.get_details(&txnid).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Override a booking's payment status.
///
/// Applies whatever the current status is and sends no email.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Booking id
/// - `payload` - Requested payment status
///
/// # Returns
/// - `200 OK` - Status updated
/// - `400 Bad Request` - Status missing or not one of pending, success, failed, expired
/// - `404 Not Found` - Booking not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/admin/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Payment status updated", body = MessageDto),
        (status = 400, description = "Invalid payment status", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    service.update_status(id, payload.payment_status).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Payment status updated".to_string(),
        }),
    ))
}

/// Get the number of rooms held by paid bookings on a check-in date.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Check-in date (`YYYY-MM-DD`) and accommodation id
///
/// # Returns
/// - `200 OK` - Date and total rooms
/// - `400 Bad Request` - Date missing or malformed, or id missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/bookings/room-occupancy",
    tag = BOOKING_TAG,
    params(
        ("check_in" = String, Query, description = "Check-in date as YYYY-MM-DD"),
        ("id" = i32, Query, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Successfully counted rooms", body = RoomOccupancyDto),
        (status = 400, description = "Invalid date or missing accommodation id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_occupancy(
    State(state): State<AppState>,
    Query(params): Query<RoomOccupancyParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let (date, total_rooms) = service
        .room_occupancy(params.check_in, params.id)
        .await?;

    Ok((StatusCode::OK, Json(RoomOccupancyDto { date, total_rooms })))
}
