//! Server-side domain models and operation parameters.
//!
//! Models here are converted from entities at the repository boundary and into DTOs at the
//! controller boundary, so neither SeaORM types nor wire types leak into services.

pub mod booking;
pub mod payment;
