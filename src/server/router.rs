use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        booking::{
            create_booking, create_offline_booking, get_booking_details, get_bookings,
            get_room_occupancy, update_payment_status,
        },
        payment::{get_payment_status, initiate_payment, verify_payment},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::booking::get_bookings,
        crate::server::controller::booking::create_booking,
        crate::server::controller::booking::create_offline_booking,
        crate::server::controller::booking::get_booking_details,
        crate::server::controller::booking::update_payment_status,
        crate::server::controller::booking::get_room_occupancy,
        crate::server::controller::payment::initiate_payment,
        crate::server::controller::payment::verify_payment,
        crate::server::controller::payment::get_payment_status,
    ),
    tags(
        (name = "booking", description = "Booking creation, lookup and manual overrides"),
        (name = "payment", description = "Gateway payment initiation and reconciliation")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/bookings", get(get_bookings).post(create_booking))
        .route("/admin/bookings/offline", post(create_offline_booking))
        .route("/admin/bookings/payments/payu", post(initiate_payment))
        .route(
            "/admin/bookings/payment-status/{txnid}",
            get(get_payment_status),
        )
        .route("/admin/bookings/verify/{txnid}", post(verify_payment))
        .route("/admin/bookings/details/{txnid}", get(get_booking_details))
        .route("/admin/bookings/{id}/status", put(update_payment_status))
        .route("/admin/bookings/room-occupancy", get(get_room_occupancy))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
