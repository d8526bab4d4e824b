use super::*;
use crate::server::{
    controller::payment::verify_payment,
    model::payment::{GatewayStatus, IndeterminateReason},
    service::test::FakeVerifier,
};
use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory},
};

/// Calls the gateway callback handler and returns the response status and Location.
async fn callback(state: AppState, txnid: &str) -> (StatusCode, String) {
    let response = verify_payment(State(state), Path(txnid.to_string()))
        .await
        .into_response();
    let location = response
        .headers()
        .get(LOCATION)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();

    (response.status(), location)
}

/// Tests the callback redirect for each gateway outcome of a pending booking.
///
/// Expected: 303 to `/payment/success`, `/payment/failed` and `/payment/pending`
#[tokio::test]
async fn redirects_to_result_page_per_gateway_outcome() -> Result<(), DbErr> {
    let cases = [
        (
            FakeVerifier::confirmed(GatewayStatus::Success, "success"),
            "success",
        ),
        (
            FakeVerifier::confirmed(GatewayStatus::Failed, "failure"),
            "failed",
        ),
        (
            FakeVerifier::indeterminate(IndeterminateReason::MissingDetails),
            "pending",
        ),
    ];

    for (verifier, expected) in cases {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, accommodation) =
            factory::helpers::create_accommodation_with_owner(db).await?;
        BookingFactory::new(db, accommodation.id)
            .payment_txn_id("PAYU-1")
            .build()
            .await?;

        let state = state_with_verifier(db, Arc::new(verifier));
        let (status, location) = callback(state, "PAYU-1").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            location,
            format!("https://retreat.example.com/payment/{}/PAYU-1", expected)
        );
    }

    Ok(())
}

/// Tests that hostile transaction ids stay inside a single encoded path segment.
///
/// Expected: 303 to `/payment/failed/<encoded txnid>` rather than a 500 or a path escape
#[tokio::test]
async fn encodes_transaction_id_in_redirect() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier: Arc<dyn TransactionVerifier> =
        Arc::new(FakeVerifier::confirmed(GatewayStatus::Success, "success"));

    let state = state_with_verifier(db, verifier.clone());
    let (status, location) = callback(state, "x\r\nSet-Cookie: a=b").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location,
        "https://retreat.example.com/payment/failed/x%0D%0ASet-Cookie:%20a=b"
    );

    let state = state_with_verifier(db, verifier);
    let (status, location) = callback(state, "../../evil").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location,
        "https://retreat.example.com/payment/failed/..%2F..%2Fevil"
    );

    Ok(())
}
