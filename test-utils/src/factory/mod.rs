//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and
//! `helpers` wires complete hierarchies together.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let accommodation = factory::create_accommodation(&db, Some(owner.id)).await?;
//! let booking = factory::create_booking(&db, accommodation.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::booking::BookingFactory;
//!
//! let booking = BookingFactory::new(&db, accommodation.id)
//!     .payment_status("success")
//!     .rooms(3)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user (accommodation owner) entities
//! - `accommodation` - Create accommodation entities
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod accommodation;
pub mod booking;
pub mod helpers;
pub mod user;

pub use accommodation::create_accommodation;
pub use booking::create_booking;
pub use user::create_user;
