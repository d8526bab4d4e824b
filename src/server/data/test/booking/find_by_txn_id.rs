use super::*;

/// Tests finding a booking by its payment transaction id.
///
/// Expected: Ok(Some) for the matching booking, Ok(None) for an unknown id
#[tokio::test]
async fn finds_booking_by_txn_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let booking = BookingFactory::new(db, accommodation.id)
        .payment_txn_id("PAYU-lookup")
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let found = repo.find_by_txn_id("PAYU-lookup").await?;
    assert_eq!(found.map(|b| b.id), Some(booking.id));

    let missing = repo.find_by_txn_id("PAYU-unknown").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that a row with an unrecognized status surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    BookingFactory::new(db, accommodation.id)
        .payment_status("refunded")
        .payment_txn_id("PAYU-odd")
        .build()
        .await?;

    let result = BookingRepository::new(db).find_by_txn_id("PAYU-odd").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
