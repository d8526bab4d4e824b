use super::*;

/// Tests overriding the status of a terminal booking.
///
/// Expected: Ok(1) and the stored status changes from failed to success
#[tokio::test]
async fn overrides_terminal_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let booking = BookingFactory::new(db, accommodation.id)
        .payment_status("failed")
        .build()
        .await?;

    let rows = BookingRepository::new(db)
        .update_status(booking.id, PaymentStatus::Success)
        .await?;

    assert_eq!(rows, 1);
    assert_eq!(stored_status(db, booking.id).await?, "success");

    Ok(())
}

/// Tests overriding the status of a booking that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn affects_nothing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = BookingRepository::new(db)
        .update_status(7, PaymentStatus::Success)
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
