//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Immutable configuration loaded at startup
//! - Payment gateway client used to sign checkout forms
//! - Transaction verifier consulted on callbacks and status queries
//! - Confirmation notifier for guest emails

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::{
        notification::ConfirmationNotifier,
        payment::{gateway::TransactionVerifier, payu::PayuGateway},
    },
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection is a pool handle, and the
/// gateway client, verifier and notifier share their internals through `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded once at startup.
    ///
    /// Handlers read URLs from here; nothing reads the process environment after
    /// startup.
    pub config: Arc<Config>,

    /// Gateway client used to build signed checkout forms.
    pub payu: PayuGateway,

    /// Asks the gateway for the settlement status of a transaction.
    ///
    /// Normally the same PayU client as `payu`, held behind the trait so tests can
    /// substitute it.
    pub verifier: Arc<dyn TransactionVerifier>,

    /// Sends booking confirmation emails.
    pub notifier: ConfirmationNotifier,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    /// - `payu` - Payment gateway client, also used as the transaction verifier
    /// - `notifier` - Confirmation email sender
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        payu: PayuGateway,
        notifier: ConfirmationNotifier,
    ) -> Self {
        Self {
            db,
            config,
            verifier: Arc::new(payu.clone()),
            payu,
            notifier,
        }
    }
}
