//! Campbook Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the booking
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for the booking tables, and canned payment gateway payloads.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Entity factories with sensible defaults
//! - **payu**: JSON bodies shaped like the gateway's verification API responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_booking_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let (owner, accommodation, booking) =
//!         factory::helpers::create_booking_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod payu;
