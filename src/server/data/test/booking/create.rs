use super::*;

/// Tests creating a pending booking.
///
/// Verifies that every field of the validated parameters is persisted along with the
/// provided payment status, transaction id and creation timestamp.
///
/// Expected: Ok with booking stored as pending
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let created_at = Utc::now();

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(
            create_params(accommodation.id),
            PaymentStatus::Pending,
            "BOOK-create-1".to_string(),
            created_at,
        )
        .await?;

    assert_eq!(booking.accommodation_id, accommodation.id);
    assert_eq!(booking.guest_name, "Asha Patil");
    assert_eq!(booking.check_in, date(2025, 6, 1));
    assert_eq!(booking.check_out, date(2025, 6, 3));
    assert_eq!(booking.payment_status, PaymentStatus::Pending);
    assert_eq!(booking.payment_txn_id, "BOOK-create-1");
    assert_eq!(booking.created_at, created_at);

    let stored = repo.find_by_txn_id("BOOK-create-1").await?;
    assert_eq!(stored, Some(booking));

    Ok(())
}

/// Tests that a duplicate transaction id is rejected.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_txn_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let repo = BookingRepository::new(db);

    repo.create(
        create_params(accommodation.id),
        PaymentStatus::Pending,
        "BOOK-dup".to_string(),
        Utc::now(),
    )
    .await?;

    let result = repo
        .create(
            create_params(accommodation.id),
            PaymentStatus::Pending,
            "BOOK-dup".to_string(),
            Utc::now(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a booking created inside a transaction that is dropped is rolled back.
///
/// Expected: no row visible after the transaction is dropped without commit
#[tokio::test]
async fn rolls_back_uncommitted_insert() -> Result<(), DbErr> {
    use sea_orm::{PaginatorTrait, TransactionTrait};

    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;

    {
        let txn = db.begin().await?;
        BookingRepository::new(&txn)
            .create(
                create_params(accommodation.id),
                PaymentStatus::Pending,
                "BOOK-rollback".to_string(),
                Utc::now(),
            )
            .await?;
    }

    let count = entity::prelude::Booking::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
