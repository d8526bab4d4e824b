//! Service tests with in-memory fakes for the gateway and the mail relay.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use std::collections::HashMap;

use crate::server::{
    config::Config,
    error::mail::MailError,
    model::payment::{GatewayStatus, GatewayTransaction, IndeterminateReason, Verification},
    service::{
        notification::{
            mailer::{Mailer, OutgoingEmail},
            ConfirmationNotifier,
        },
        payment::gateway::TransactionVerifier,
    },
};


/// Verifier that answers every call with the same verification.
pub(crate) struct FakeVerifier {
    verification: Verification,
    calls: AtomicUsize,
}

impl FakeVerifier {
    pub(crate) fn new(verification: Verification) -> Self {
        Self {
            verification,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn confirmed(status: GatewayStatus, raw_status: &str) -> Self {
        Self::new(Verification::Confirmed {
            status,
            transaction: GatewayTransaction {
                raw_status: raw_status.to_string(),
                payment_id: Some("403993715531077182".to_string()),
                payment_mode: Some("UPI".to_string()),
                bank_ref_num: Some("REF123".to_string()),
                amount: Some("1000.00".to_string()),
            },
        })
    }

    pub(crate) fn indeterminate(reason: IndeterminateReason) -> Self {
        Self::new(Verification::Indeterminate(reason))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionVerifier for FakeVerifier {
    async fn verify(&self, _txnid: &str) -> Verification {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verification.clone()
    }
}

/// Mailer that records every email and optionally rejects them all.
#[derive(Default)]
pub(crate) struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingMailer {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MailError::Transport("relay refused connection".to_string()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub(crate) fn notifier_with(mailer: &Arc<RecordingMailer>) -> ConfirmationNotifier {
    ConfirmationNotifier::new(mailer.clone())
}

/// Configuration with test gateway credentials and example URLs.
pub(crate) fn test_config() -> Config {
    let vars = HashMap::from([
        ("DATABASE_URL", "sqlite::memory:"),
        ("PAYU_MERCHANT_KEY", "key123"),
        ("PAYU_MERCHANT_SALT", "salt456"),
        ("PAYU_BASE_URL", "https://test.payu.in"),
        ("SMTP_HOST", "mail.example.com"),
        ("SMTP_USERNAME", "admin@example.com"),
        ("SMTP_PASSWORD", "secret"),
        ("EMAIL_FROM", "Retreat <admin@example.com>"),
        ("FRONTEND_BASE_URL", "https://retreat.example.com"),
        ("ADMIN_BASE_URL", "https://api.retreat.example.com"),
    ]);

    Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap()
}
