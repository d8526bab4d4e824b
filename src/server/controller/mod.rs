//! HTTP handlers.
//!
//! Controllers extract requests, convert DTOs into domain parameters, call services and
//! convert the results back into DTOs. They hold no booking or payment rules.

pub mod booking;
pub mod payment;

#[cfg(test)]
mod test;
