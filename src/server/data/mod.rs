//! Database repository layer for bookings and accommodations.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`, keeping SeaORM types out of the service layer. Each repository is
//! generic over `ConnectionTrait` so services can run the same queries inside a
//! transaction.

pub mod accommodation;
pub mod booking;

#[cfg(test)]
mod test;
