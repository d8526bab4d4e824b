//! Wire-level DTOs shared by the HTTP controllers.

pub mod api;
pub mod booking;
pub mod payment;
