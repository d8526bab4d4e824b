use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::booking::{
    Booking, BookingWithAccommodationName, CreateBookingParams, GetPaginatedBookingsParams,
    PaginatedBookings, PaymentStatus,
};

/// Repository for booking rows.
///
/// Generic over the connection so the same queries run against the pool or inside an
/// open `DatabaseTransaction`.
pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking row.
    ///
    /// # Arguments
    /// - `params` - Validated booking fields
    /// - `payment_status` - Initial payment state
    /// - `payment_txn_id` - Freshly generated transaction id
    /// - `created_at` - Creation timestamp, used later for staleness checks
    ///
    /// # Returns
    /// - `Ok(Booking)` - The stored booking
    /// - `Err(DbErr)` - Insert failed (e.g. unknown accommodation, duplicate txn id)
    pub async fn create(
        &self,
        params: CreateBookingParams,
        payment_status: PaymentStatus,
        payment_txn_id: String,
        created_at: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            guest_name: ActiveValue::Set(params.guest_name),
            guest_email: ActiveValue::Set(params.guest_email),
            guest_phone: ActiveValue::Set(params.guest_phone),
            accommodation_id: ActiveValue::Set(params.accommodation_id),
            package_id: ActiveValue::Set(params.package_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            adults: ActiveValue::Set(params.adults),
            children: ActiveValue::Set(params.children),
            rooms: ActiveValue::Set(params.rooms),
            food_veg: ActiveValue::Set(params.food_veg),
            food_nonveg: ActiveValue::Set(params.food_nonveg),
            food_jain: ActiveValue::Set(params.food_jain),
            total_amount: ActiveValue::Set(params.total_amount),
            advance_amount: ActiveValue::Set(params.advance_amount),
            payment_status: ActiveValue::Set(payment_status.as_str().to_string()),
            payment_txn_id: ActiveValue::Set(payment_txn_id),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    /// Gets a booking by its payment transaction id
    pub async fn find_by_txn_id(&self, txn_id: &str) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::PaymentTxnId.eq(txn_id))
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Gets a page of bookings, newest first, with the accommodation name joined in.
    ///
    /// # Arguments
    /// - `params` - 1-based page number and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedBookings)` - Bookings on the page and the total booking count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        params: GetPaginatedBookingsParams,
    ) -> Result<PaginatedBookings, DbErr> {
        let paginator = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Accommodation)
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(params.page - 1).await?;

        let bookings = rows
            .into_iter()
            .map(|(booking, accommodation)| {
                Ok(BookingWithAccommodationName {
                    booking: Booking::from_entity(booking)?,
                    accommodation_name: accommodation.map(|a| a.name),
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(PaginatedBookings {
            bookings,
            total,
            page: params.page,
            per_page: params.per_page,
        })
    }

    /// Sets a booking's payment status unconditionally.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated (0 when no booking has this id)
    /// - `Err(DbErr)` - Database error
    pub async fn update_status(&self, id: i32, status: PaymentStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::PaymentStatus,
                Expr::value(status.as_str()),
            )
            .filter(entity::booking::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a still-pending booking to a settled status.
    ///
    /// Rows that already left `pending` are not touched, so repeated settlements of the
    /// same transaction apply at most once.
    ///
    /// # Arguments
    /// - `txn_id` - Payment transaction id of the booking
    /// - `status` - Status to move to
    ///
    /// # Returns
    /// - `Ok(1)` - The transition was applied
    /// - `Ok(0)` - No pending booking carries this transaction id
    /// - `Err(DbErr)` - Database error
    pub async fn transition_from_pending(
        &self,
        txn_id: &str,
        status: PaymentStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::PaymentStatus,
                Expr::value(status.as_str()),
            )
            .filter(entity::booking::Column::PaymentTxnId.eq(txn_id))
            .filter(entity::booking::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the transaction id of a pending booking before handing it to the gateway.
    ///
    /// # Returns
    /// - `Ok(1)` - Transaction id stored
    /// - `Ok(0)` - No pending booking with this id
    /// - `Err(DbErr)` - Database error
    pub async fn set_txn_id_for_pending(&self, id: i32, txn_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::PaymentTxnId, Expr::value(txn_id))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Expires every pending booking created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of bookings expired
    /// - `Err(DbErr)` - Database error
    pub async fn expire_stale(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::PaymentStatus,
                Expr::value(PaymentStatus::Expired.as_str()),
            )
            .filter(entity::booking::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
            .filter(entity::booking::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sums the rooms held by paid bookings that check in on `date`.
    ///
    /// Counts bookings with `check_in = date`, `check_out > date` and a `success`
    /// payment status for the given accommodation.
    pub async fn rooms_booked(&self, accommodation_id: i32, date: NaiveDate) -> Result<i64, DbErr> {
        let rooms: Vec<i32> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::Rooms)
            .filter(entity::booking::Column::AccommodationId.eq(accommodation_id))
            .filter(entity::booking::Column::PaymentStatus.eq(PaymentStatus::Success.as_str()))
            .filter(entity::booking::Column::CheckIn.eq(date))
            .filter(entity::booking::Column::CheckOut.gt(date))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(i64::from).sum())
    }
}
