use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::booking::Accommodation;

pub struct AccommodationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccommodationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets an accommodation together with its owner's email.
    ///
    /// # Returns
    /// - `Ok(Some((accommodation, owner_email)))` - Accommodation found; `owner_email` is
    ///   `None` when it has no owner
    /// - `Ok(None)` - No accommodation with this id
    /// - `Err(DbErr)` - Database error
    pub async fn find_with_owner_email(
        &self,
        id: i32,
    ) -> Result<Option<(Accommodation, Option<String>)>, DbErr> {
        let result = entity::prelude::Accommodation::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(accommodation, owner)| {
            (
                Accommodation::from_entity(accommodation),
                owner.map(|o| o.email),
            )
        }))
    }
}
