use super::*;

/// Tests replacing the transaction id of a pending booking.
///
/// Expected: Ok(1) and the booking is found by the new id
#[tokio::test]
async fn replaces_txn_id_of_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _accommodation, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let repo = BookingRepository::new(db);

    let rows = repo.set_txn_id_for_pending(booking.id, "PAYU-new").await?;

    assert_eq!(rows, 1);
    let found = repo.find_by_txn_id("PAYU-new").await?;
    assert_eq!(found.map(|b| b.id), Some(booking.id));

    Ok(())
}

/// Tests that a settled booking keeps its transaction id.
///
/// Expected: Ok(0) and the original id still resolves
#[tokio::test]
async fn refuses_settled_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let booking = BookingFactory::new(db, accommodation.id)
        .payment_status("success")
        .build()
        .await?;
    let repo = BookingRepository::new(db);

    let rows = repo.set_txn_id_for_pending(booking.id, "PAYU-new").await?;

    assert_eq!(rows, 0);
    assert!(repo
        .find_by_txn_id(&booking.payment_txn_id)
        .await?
        .is_some());

    Ok(())
}
