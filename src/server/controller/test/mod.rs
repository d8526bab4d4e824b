//! Handler tests run against in-memory state with the gateway verifier and mailer faked.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    service::{
        payment::{gateway::TransactionVerifier, payu::PayuGateway},
        test::{notifier_with, test_config, RecordingMailer},
    },
    state::AppState,
};

mod payment;

/// Builds application state whose verifier is replaced by `verifier`.
fn state_with_verifier(
    db: &DatabaseConnection,
    verifier: Arc<dyn TransactionVerifier>,
) -> AppState {
    let config = Arc::new(test_config());

    AppState {
        db: db.clone(),
        payu: PayuGateway::new(reqwest::Client::new(), &config),
        config,
        verifier,
        notifier: notifier_with(&Arc::new(RecordingMailer::default())),
    }
}
