use super::*;

/// Tests expiring pending bookings older than the cutoff.
///
/// Creates a stale pending booking, a fresh pending booking and a stale paid booking.
///
/// Expected: only the stale pending booking is expired
#[tokio::test]
async fn expires_only_stale_pending_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;

    let stale = BookingFactory::new(db, accommodation.id)
        .created_at(factory::booking::hours_ago(2))
        .build()
        .await?;
    let fresh = BookingFactory::new(db, accommodation.id)
        .created_at(Utc::now() - Duration::minutes(10))
        .build()
        .await?;
    let paid = BookingFactory::new(db, accommodation.id)
        .payment_status("success")
        .created_at(factory::booking::hours_ago(5))
        .build()
        .await?;

    let cutoff = Utc::now() - Duration::hours(1);
    let rows = BookingRepository::new(db).expire_stale(cutoff).await?;

    assert_eq!(rows, 1);
    assert_eq!(stored_status(db, stale.id).await?, "expired");
    assert_eq!(stored_status(db, fresh.id).await?, "pending");
    assert_eq!(stored_status(db, paid.id).await?, "success");

    Ok(())
}

/// Tests that sweeping twice without new stale rows changes nothing the second time.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn second_sweep_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    BookingFactory::new(db, accommodation.id)
        .created_at(factory::booking::hours_ago(3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let cutoff = Utc::now() - Duration::hours(1);

    assert_eq!(repo.expire_stale(cutoff).await?, 1);
    assert_eq!(repo.expire_stale(cutoff).await?, 0);

    Ok(())
}
