use async_trait::async_trait;

use crate::server::model::payment::Verification;

/// Asks the payment gateway for the settlement status of a transaction.
///
/// Implementations never fail: transport problems, timeouts and unreadable answers are
/// reported as `Verification::Indeterminate` so callers can keep the last known local
/// state instead of overwriting it.
#[async_trait]
pub trait TransactionVerifier: Send + Sync {
    async fn verify(&self, txnid: &str) -> Verification;
}
