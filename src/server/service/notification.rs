//! Booking confirmation emails.
//!
//! The notifier is best-effort: callers log its errors and never let them change the
//! outcome of the booking or payment that triggered it.

pub mod mailer;
pub mod template;

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::server::{
    error::mail::MailError,
    model::booking::BookingDetails,
    service::notification::{
        mailer::{Mailer, OutgoingEmail},
        template::{render_confirmation, CONFIRMATION_SUBJECT},
    },
};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Result of a confirmation attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The relay accepted the email for this address.
    Sent { to: String },
    /// The guest has no usable email address; nothing was sent.
    Skipped,
}

/// Sends booking confirmation emails to guests.
#[derive(Clone)]
pub struct ConfirmationNotifier {
    mailer: Arc<dyn Mailer>,
}

impl ConfirmationNotifier {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Emails a confirmation for a booking to its guest.
    ///
    /// A missing or syntactically invalid guest address is logged and skipped rather than
    /// reported as an error.
    ///
    /// # Arguments
    /// - `details` - Booking with its accommodation and owner contact
    ///
    /// # Returns
    /// - `Ok(NotificationOutcome::Sent)` - Email handed to the relay
    /// - `Ok(NotificationOutcome::Skipped)` - No valid recipient
    /// - `Err(MailError)` - Building or delivering the email failed
    pub async fn send_confirmation(
        &self,
        details: &BookingDetails,
    ) -> Result<NotificationOutcome, MailError> {
        let booking = &details.booking;

        let Some(recipient) = booking
            .guest_email
            .as_deref()
            .map(str::trim)
            .filter(|email| EMAIL.is_match(email))
        else {
            tracing::warn!(
                booking_id = booking.id,
                email = ?booking.guest_email,
                "Invalid or missing guest email, skipping booking confirmation"
            );
            return Ok(NotificationOutcome::Skipped);
        };

        self.mailer
            .send(OutgoingEmail {
                to: recipient.to_string(),
                subject: CONFIRMATION_SUBJECT.to_string(),
                html_body: render_confirmation(details),
            })
            .await?;

        tracing::info!(
            booking_id = booking.id,
            txn_id = %booking.payment_txn_id,
            to = recipient,
            "Booking confirmation sent"
        );

        Ok(NotificationOutcome::Sent {
            to: recipient.to_string(),
        })
    }
}
