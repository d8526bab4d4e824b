use super::*;

/// Tests paginating bookings newest first with accommodation names.
///
/// Creates three bookings with distinct creation times and reads them two per page.
///
/// Expected: first page holds the two newest, second page the oldest, total is 3
#[tokio::test]
async fn returns_newest_first_with_accommodation_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;
    let now = Utc::now();

    let oldest = BookingFactory::new(db, accommodation.id)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let middle = BookingFactory::new(db, accommodation.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = BookingFactory::new(db, accommodation.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let first = repo
        .get_paginated(GetPaginatedBookingsParams::new(1, 2))
        .await?;
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages(), 2);
    let ids: Vec<i32> = first.bookings.iter().map(|b| b.booking.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert_eq!(
        first.bookings[0].accommodation_name.as_deref(),
        Some(accommodation.name.as_str())
    );

    let second = repo
        .get_paginated(GetPaginatedBookingsParams::new(2, 2))
        .await?;
    let ids: Vec<i32> = second.bookings.iter().map(|b| b.booking.id).collect();
    assert_eq!(ids, vec![oldest.id]);

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: Ok with no bookings and zero total
#[tokio::test]
async fn returns_empty_page_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = BookingRepository::new(db)
        .get_paginated(GetPaginatedBookingsParams::new(1, 20))
        .await?;

    assert!(page.bookings.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages(), 0);

    Ok(())
}
