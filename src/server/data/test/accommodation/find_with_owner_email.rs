use super::*;

/// Tests loading an accommodation with its owner's email.
///
/// Expected: Ok(Some) with the owner's email
#[tokio::test]
async fn returns_accommodation_with_owner_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, accommodation) = factory::helpers::create_accommodation_with_owner(db).await?;

    let result = AccommodationRepository::new(db)
        .find_with_owner_email(accommodation.id)
        .await?;

    let (found, owner_email) = result.unwrap();
    assert_eq!(found.id, accommodation.id);
    assert_eq!(found.name, accommodation.name);
    assert_eq!(found.coordinates(), Some((18.6651, 73.4927)));
    assert_eq!(owner_email, Some(owner.email));

    Ok(())
}

/// Tests an accommodation without an owner.
///
/// Expected: Ok(Some) with no owner email
#[tokio::test]
async fn returns_none_email_without_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let accommodation = AccommodationFactory::new(db, None)
        .coordinates(None)
        .build()
        .await?;

    let (found, owner_email) = AccommodationRepository::new(db)
        .find_with_owner_email(accommodation.id)
        .await?
        .unwrap();

    assert_eq!(found.coordinates(), None);
    assert!(owner_email.is_none());

    Ok(())
}

/// Tests an unknown accommodation id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccommodationRepository::new(db)
        .find_with_owner_email(404)
        .await?;

    assert!(result.is_none());

    Ok(())
}
