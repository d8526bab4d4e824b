use super::*;

/// Tests settling a pending booking.
///
/// Expected: Ok(1) and the stored status becomes success
#[tokio::test]
async fn settles_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _accommodation, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let rows = BookingRepository::new(db)
        .transition_from_pending(&booking.payment_txn_id, PaymentStatus::Success)
        .await?;

    assert_eq!(rows, 1);
    assert_eq!(stored_status(db, booking.id).await?, "success");

    Ok(())
}

/// Tests that a second settlement of the same transaction is a no-op.
///
/// Expected: Ok(0) on the replay and the first outcome is kept
#[tokio::test]
async fn ignores_replayed_settlement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _accommodation, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let repo = BookingRepository::new(db);

    repo.transition_from_pending(&booking.payment_txn_id, PaymentStatus::Success)
        .await?;
    let rows = repo
        .transition_from_pending(&booking.payment_txn_id, PaymentStatus::Failed)
        .await?;

    assert_eq!(rows, 0);
    assert_eq!(stored_status(db, booking.id).await?, "success");

    Ok(())
}

/// Tests that an expired booking is not revived by a late settlement.
///
/// Expected: Ok(0) and the booking stays expired
#[tokio::test]
async fn leaves_expired_booking_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let booking = BookingFactory::new(db, accommodation.id)
        .payment_status("expired")
        .build()
        .await?;

    let rows = BookingRepository::new(db)
        .transition_from_pending(&booking.payment_txn_id, PaymentStatus::Success)
        .await?;

    assert_eq!(rows, 0);
    assert_eq!(stored_status(db, booking.id).await?, "expired");

    Ok(())
}
