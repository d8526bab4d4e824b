//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They apply booking rules,
//! open transactions for multi-statement writes, talk to the payment gateway and mail
//! relay through their traits, and return domain models rather than DTOs or entities.

pub mod booking;
pub mod notification;
pub mod payment;

#[cfg(test)]
pub(crate) mod test;
