use super::*;

/// Tests summing rooms of paid bookings checking in on a date.
///
/// Only paid bookings for the same accommodation that check in on the date and check
/// out after it count toward the total.
///
/// Expected: 3 rooms (2 + 1), ignoring pending, other-date and other-accommodation rows
#[tokio::test]
async fn sums_rooms_of_paid_bookings_on_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let other = factory::accommodation::create_accommodation(db, Some(owner.id)).await?;
    let day = date(2025, 6, 1);

    BookingFactory::new(db, accommodation.id)
        .payment_status("success")
        .stay(day, date(2025, 6, 3))
        .rooms(2)
        .build()
        .await?;
    BookingFactory::new(db, accommodation.id)
        .payment_status("success")
        .stay(day, date(2025, 6, 2))
        .rooms(1)
        .build()
        .await?;
    // Not paid
    BookingFactory::new(db, accommodation.id)
        .payment_status("pending")
        .stay(day, date(2025, 6, 2))
        .rooms(4)
        .build()
        .await?;
    // Different check-in date
    BookingFactory::new(db, accommodation.id)
        .payment_status("success")
        .stay(date(2025, 5, 31), date(2025, 6, 2))
        .rooms(5)
        .build()
        .await?;
    // Different accommodation
    BookingFactory::new(db, other.id)
        .payment_status("success")
        .stay(day, date(2025, 6, 2))
        .rooms(6)
        .build()
        .await?;

    let total = BookingRepository::new(db)
        .rooms_booked(accommodation.id, day)
        .await?;

    assert_eq!(total, 3);

    Ok(())
}

/// Tests an accommodation with no bookings on the date.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;

    let total = BookingRepository::new(db)
        .rooms_booked(accommodation.id, date(2025, 6, 1))
        .await?;

    assert_eq!(total, 0);

    Ok(())
}
