//! Canned payment gateway payloads for testing.
//!
//! These helpers build JSON bodies shaped like the gateway's `verify_payment`
//! responses, so the adapter's parsing and the reconciliation flow can be tested
//! without network access.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::payu::{verification_response, missing_transaction_response};
//!
//! let body = verification_response("PAYU-123", "success");
//! let outcome = parse_verification("PAYU-123", &body.to_string());
//! ```
//!
//! # Available Payloads
//!
//! - `verification::verification_response` - Transaction found with a raw status
//! - `verification::not_found_response` - Gateway's "Not Found" placeholder entry
//! - `verification::missing_transaction_response` - No entry for the requested id

pub mod verification;

pub use verification::{missing_transaction_response, not_found_response, verification_response};
