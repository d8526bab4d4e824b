use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use url::Url;

use crate::{
    model::{
        api::ErrorDto,
        payment::{InitiatePaymentDto, PaymentInitiationDto, PaymentStatusDto},
    },
    server::{
        error::AppError,
        model::{booking::PaymentStatus, payment::InitiatePaymentParams},
        service::payment::PaymentService, state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
pub struct PaymentStatusParams {
    #[serde(default)]
    pub force_gateway: bool,
}

/// Start a gateway payment for a pending booking.
///
/// Assigns a new transaction id to the booking and returns the signed form the payer's
/// browser posts to the gateway's hosted payment page.
///
/// # Arguments
/// - `state` - Application state containing the database connection and gateway client
/// - `payload` - Amount, payer details, booking id and product description
///
/// # Returns
/// - `200 OK` - Gateway URL and signed form fields
/// - `400 Bad Request` - Missing fields, non-positive amount or short phone number
/// - `404 Not Found` - No pending booking with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/bookings/payments/payu",
    tag = PAYMENT_TAG,
    request_body = InitiatePaymentDto,
    responses(
        (status = 200, description = "Payment initiated", body = PaymentInitiationDto),
        (status = 400, description = "Invalid payment parameters", body = ErrorDto),
        (status = 404, description = "Pending booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(payload): Json<InitiatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = InitiatePaymentParams::from_dto(payload)?;

    let service = PaymentService::new(&state.db, state.verifier.as_ref(), &state.notifier);
    let request = service.initiate(&state.payu, params).await?;

    Ok((
        StatusCode::OK,
        Json(PaymentInitiationDto {
            message: "Payment initiated".to_string(),
            payu_url: request.payu_url.clone(),
            payment_data: request.into_dto(),
        }),
    ))
}

/// Gateway callback after a payment attempt.
///
/// Re-verifies the transaction with the gateway, settles the booking and redirects the
/// payer to the front end's result page. The callback's own form fields are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection, verifier and notifier
/// - `txnid` - Transaction id embedded in the callback URL
///
/// # Returns
/// - `303 See Other` - Redirect to `<frontend>/payment/<status>/<txnid>`
#[utoipa::path(
    post,
    path = "/admin/bookings/verify/{txnid}",
    tag = PAYMENT_TAG,
    params(
        ("txnid" = String, Path, description = "Payment transaction id")
    ),
    responses(
        (status = 303, description = "Redirect to the payment result page")
    ),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    Path(txnid): Path<String>,
) -> Redirect {
    let service = PaymentService::new(&state.db, state.verifier.as_ref(), &state.notifier);

    let status = service.reconcile_callback(&txnid).await;

    Redirect::to(&payment_result_url(
        &state.config.frontend_base_url,
        status,
        &txnid,
    ))
}

/// Builds `<frontend>/payment/<status>/<txnid>` with the txnid as one encoded segment.
///
/// Falls back to `<frontend>/payment/failed` if the base cannot carry path segments.
fn payment_result_url(frontend_base_url: &str, status: PaymentStatus, txnid: &str) -> String {
    let fallback = format!("{}/payment/{}", frontend_base_url, PaymentStatus::Failed);

    let Ok(mut url) = Url::parse(frontend_base_url) else {
        return fallback;
    };
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments
                .pop_if_empty()
                .extend(["payment", status.as_str(), txnid]);
        }
        Err(()) => return fallback,
    }

    if HeaderValue::from_str(url.as_str()).is_err() {
        return fallback;
    }

    url.into()
}

/// Get a transaction's payment status, checking with the gateway when needed.
///
/// Paid bookings are answered from the database unless `force_gateway` is set. A
/// pending booking the gateway reports as settled is updated on the way.
///
/// # Arguments
/// - `state` - Application state containing the database connection, verifier and notifier
/// - `txnid` - Transaction id to report on
/// - `params` - Whether to query the gateway even for paid bookings
///
/// # Returns
/// - `200 OK` - Current status with gateway details or a warning
/// - `404 Not Found` - No booking carries this transaction id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/bookings/payment-status/{txnid}",
    tag = PAYMENT_TAG,
    params(
        ("txnid" = String, Path, description = "Payment transaction id"),
        ("force_gateway" = Option<bool>, Query, description = "Query the gateway even for paid bookings (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payment status", body = PaymentStatusDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(txnid): Path<String>,
    Query(params): Query<PaymentStatusParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db, state.verifier.as_ref(), &state.notifier);

    let report = service.check_status(&txnid, params.force_gateway).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
