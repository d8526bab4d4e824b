use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingParams, GetPaginatedBookingsParams, PaymentStatus},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory},
};

mod create;
mod expire_stale;
mod find_by_txn_id;
mod get_paginated;
mod rooms_booked;
mod set_txn_id_for_pending;
mod transition_from_pending;
mod update_status;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_params(accommodation_id: i32) -> CreateBookingParams {
    CreateBookingParams {
        guest_name: "Asha Patil".to_string(),
        guest_email: Some("asha@example.com".to_string()),
        guest_phone: Some("9876543210".to_string()),
        accommodation_id,
        package_id: Some(3),
        check_in: date(2025, 6, 1),
        check_out: date(2025, 6, 3),
        adults: 2,
        children: 0,
        rooms: 1,
        food_veg: 2,
        food_nonveg: 0,
        food_jain: 0,
        total_amount: 5000.0,
        advance_amount: 1000.0,
    }
}

async fn stored_status(db: &sea_orm::DatabaseConnection, id: i32) -> Result<String, DbErr> {
    let booking = entity::prelude::Booking::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("booking {}", id)))?;

    Ok(booking.payment_status)
}
