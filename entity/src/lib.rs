//! SeaORM entity models for the booking backend.

pub mod prelude;

pub mod accommodation;
pub mod booking;
pub mod user;
