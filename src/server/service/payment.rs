//! Gateway payment initiation and reconciliation.
//!
//! The gateway is authoritative for settlement; a booking's `payment_status` is a local
//! copy kept in step by re-verifying every callback. Settlements only move bookings out
//! of `pending`, so replayed callbacks and late verifications never rewrite a terminal
//! state or send a second confirmation.

pub mod gateway;
pub mod payu;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::{
        booking::{Booking, PaymentStatus},
        payment::{
            GatewayStatus, IndeterminateReason, InitiatePaymentParams, PaymentStatusReport,
            PayuPaymentRequest, StatusSource, Verification,
        },
    },
    service::{
        booking::load_details,
        notification::ConfirmationNotifier,
        payment::{gateway::TransactionVerifier, payu::PayuGateway},
    },
};

/// Generates the transaction id a payment attempt is sent to the gateway with.
pub fn payment_txn_id() -> String {
    format!("PAYU-{}", Uuid::new_v4())
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a dyn TransactionVerifier,
    notifier: &'a ConfirmationNotifier,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        verifier: &'a dyn TransactionVerifier,
        notifier: &'a ConfirmationNotifier,
    ) -> Self {
        Self {
            db,
            verifier,
            notifier,
        }
    }

    /// Starts a gateway payment for a pending booking.
    ///
    /// Stores a fresh `PAYU-` transaction id on the booking and returns the signed
    /// checkout form.
    ///
    /// # Arguments
    /// - `gateway` - Signs the checkout form
    /// - `params` - Validated payer and amount fields
    ///
    /// # Returns
    /// - `Ok(PayuPaymentRequest)` - Form the payer's browser posts to the gateway
    /// - `Err(AppError::NotFound)` - No pending booking with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn initiate(
        &self,
        gateway: &PayuGateway,
        params: InitiatePaymentParams,
    ) -> Result<PayuPaymentRequest, AppError> {
        let txnid = payment_txn_id();
        let request = gateway.prepare(&txnid, &params);

        let rows = BookingRepository::new(self.db)
            .set_txn_id_for_pending(params.booking_id, &txnid)
            .await?;
        if rows == 0 {
            return Err(AppError::NotFound("Pending booking not found".to_string()));
        }

        tracing::info!(
            booking_id = params.booking_id,
            txn_id = %txnid,
            amount = %request.amount,
            "Payment initiated"
        );

        Ok(request)
    }

    /// Handles the gateway's callback for a transaction.
    ///
    /// Never fails: any error is logged and reported as `failed` so the payer is always
    /// redirected somewhere.
    ///
    /// # Arguments
    /// - `txnid` - Transaction id from the callback URL
    ///
    /// # Returns
    /// - `PaymentStatus` - Status to show the payer
    pub async fn reconcile_callback(&self, txnid: &str) -> PaymentStatus {
        match self.try_reconcile(txnid).await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(txn_id = txnid, "Payment reconciliation failed: {}", e);
                PaymentStatus::Failed
            }
        }
    }

    async fn try_reconcile(&self, txnid: &str) -> Result<PaymentStatus, AppError> {
        let repo = BookingRepository::new(self.db);

        let status = match self.verifier.verify(txnid).await {
            Verification::Indeterminate(IndeterminateReason::MissingDetails) => {
                // Gateway has no record yet; report what we already know.
                match repo.find_by_txn_id(txnid).await? {
                    Some(booking) => booking.payment_status,
                    None => PaymentStatus::Failed,
                }
            }
            Verification::Indeterminate(reason) => {
                tracing::warn!(
                    txn_id = txnid,
                    %reason,
                    "Could not verify callback, booking left unchanged"
                );
                PaymentStatus::Failed
            }
            Verification::Confirmed { status, .. } => {
                // A callback is only sent once the payer is done, so anything short of
                // success is a failed attempt.
                let target = match status {
                    GatewayStatus::Success => PaymentStatus::Success,
                    GatewayStatus::Failed | GatewayStatus::Pending => PaymentStatus::Failed,
                };
                self.settle(txnid, target).await?
            }
        };

        tracing::info!(txn_id = txnid, status = %status, "Payment callback reconciled");

        Ok(status)
    }

    /// Applies a confirmed settlement and returns the booking's resulting status.
    async fn settle(&self, txnid: &str, target: PaymentStatus) -> Result<PaymentStatus, AppError> {
        let repo = BookingRepository::new(self.db);

        let rows = repo.transition_from_pending(txnid, target).await?;
        if rows > 0 {
            tracing::info!(
                txn_id = txnid,
                from = %PaymentStatus::Pending,
                to = %target,
                "Booking payment status updated"
            );
            if target == PaymentStatus::Success {
                if let Some(booking) = repo.find_by_txn_id(txnid).await? {
                    self.notify(booking).await;
                }
            }
            return Ok(target);
        }

        let Some(booking) = repo.find_by_txn_id(txnid).await? else {
            tracing::warn!(txn_id = txnid, "Settlement for unknown transaction");
            return Ok(PaymentStatus::Failed);
        };

        if booking.payment_status != target {
            tracing::warn!(
                txn_id = txnid,
                booking_id = booking.id,
                stored = %booking.payment_status,
                gateway = %target,
                "Gateway settlement disagrees with terminal booking status, manual override required"
            );
        }

        Ok(booking.payment_status)
    }

    /// Sends the confirmation email for a booking, logging instead of failing.
    async fn notify(&self, booking: Booking) {
        let booking_id = booking.id;

        let details = match load_details(self.db, booking).await {
            Ok(details) => details,
            Err(e) => {
                tracing::error!(
                    booking_id,
                    "Failed to load booking confirmation details: {}",
                    e
                );
                return;
            }
        };

        if let Err(e) = self.notifier.send_confirmation(&details).await {
            tracing::error!(booking_id, "Failed to send booking confirmation: {}", e);
        }
    }

    /// Reports a transaction's payment status, checking with the gateway when useful.
    ///
    /// Settled bookings are answered from the database unless `force_gateway` is set.
    /// Otherwise the gateway is asked; a confirmed settlement of a pending booking is
    /// applied, and an indeterminate answer leaves the booking as is with a warning.
    ///
    /// # Arguments
    /// - `txnid` - Transaction id to report on
    /// - `force_gateway` - Ask the gateway even for settled bookings
    ///
    /// # Returns
    /// - `Ok(PaymentStatusReport)` - Current status and gateway details
    /// - `Err(AppError::NotFound)` - No booking carries this transaction id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn check_status(
        &self,
        txnid: &str,
        force_gateway: bool,
    ) -> Result<PaymentStatusReport, AppError> {
        let repo = BookingRepository::new(self.db);
        let booking = repo
            .find_by_txn_id(txnid)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
        let original = booking.payment_status;

        let mut report = PaymentStatusReport {
            txnid: txnid.to_string(),
            status: original,
            source: StatusSource::Database,
            booking_id: booking.id,
            amount: if booking.advance_amount > 0.0 {
                booking.advance_amount
            } else {
                booking.total_amount
            },
            transaction: None,
            status_updated: false,
            original_db_status: original,
            warning: None,
        };

        if original == PaymentStatus::Success && !force_gateway {
            return Ok(report);
        }

        match self.verifier.verify(txnid).await {
            Verification::Indeterminate(reason) => {
                report.warning = Some(format!(
                    "Could not verify with payment gateway ({}); showing stored status",
                    reason
                ));
            }
            Verification::Confirmed {
                status,
                transaction,
            } => {
                report.source = StatusSource::Gateway;
                report.transaction = Some(transaction);

                let gateway_status = status.payment_status();
                if original == PaymentStatus::Pending && gateway_status != PaymentStatus::Pending
                {
                    report.status = self.settle(txnid, gateway_status).await?;
                    report.status_updated = report.status != original;
                } else if original != gateway_status {
                    report.warning = Some(format!(
                        "Gateway reports {} but booking is {}; use a manual override to correct it",
                        gateway_status, original
                    ));
                }
            }
        }

        Ok(report)
    }
}
