//! Background jobs run alongside the HTTP server.

pub mod booking_expiry;
