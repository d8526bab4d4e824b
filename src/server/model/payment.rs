//! Payment domain models.
//!
//! Covers the validated payment initiation request, the signed checkout request handed to
//! the payer's browser, and the structured outcome of a gateway verification call.

use std::fmt;

use crate::{
    model::payment::{InitiatePaymentDto, PaymentStatusDto, PayuPaymentDataDto, StatusSourceDto},
    server::{error::AppError, model::booking::PaymentStatus},
};

/// Gateway field length limits for the checkout form.
pub const MAX_PRODUCTINFO_LEN: usize = 100;
pub const MAX_FIRSTNAME_LEN: usize = 60;
pub const MAX_EMAIL_LEN: usize = 50;
/// Number of phone digits forwarded to the gateway.
pub const PHONE_DIGITS: usize = 10;

/// Validated request to start a gateway payment for a pending booking.
///
/// Text fields are already truncated to the gateway's limits and the phone number is
/// reduced to its first ten digits.
#[derive(Debug, Clone, PartialEq)]
pub struct InitiatePaymentParams {
    pub booking_id: i32,
    pub amount: f64,
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub productinfo: String,
}

impl InitiatePaymentParams {
    /// Validates and normalizes an initiation request body.
    ///
    /// # Arguments
    /// - `dto` - Request body as received
    ///
    /// # Returns
    /// - `Ok(InitiatePaymentParams)` - Normalized parameters
    /// - `Err(AppError::BadRequest)` - A field is missing, the amount is not positive, or
    ///   the phone number has fewer than ten digits
    pub fn from_dto(dto: InitiatePaymentDto) -> Result<Self, AppError> {
        let (Some(amount), Some(firstname), Some(email), Some(booking_id), Some(productinfo)) = (
            dto.amount,
            non_empty(dto.firstname),
            non_empty(dto.email),
            dto.booking_id,
            non_empty(dto.productinfo),
        ) else {
            return Err(AppError::BadRequest(
                "Missing required payment parameters".to_string(),
            ));
        };

        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::BadRequest("Invalid amount".to_string()));
        }

        let digits: String = dto
            .phone
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.len() < PHONE_DIGITS {
            return Err(AppError::BadRequest(
                "Valid 10-digit phone required".to_string(),
            ));
        }

        Ok(Self {
            booking_id,
            amount,
            firstname: truncate_chars(&firstname, MAX_FIRSTNAME_LEN),
            email: truncate_chars(&email, MAX_EMAIL_LEN),
            phone: digits[..PHONE_DIGITS].to_string(),
            productinfo: truncate_chars(&productinfo, MAX_PRODUCTINFO_LEN),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Signed checkout form the payer's browser posts to the hosted payment page.
#[derive(Debug, Clone, PartialEq)]
pub struct PayuPaymentRequest {
    /// Hosted payment page endpoint.
    pub payu_url: String,
    pub key: String,
    pub txnid: String,
    /// Amount with two decimals, exactly as hashed.
    pub amount: String,
    pub productinfo: String,
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub surl: String,
    pub furl: String,
    pub hash: String,
    pub currency: &'static str,
}

impl PayuPaymentRequest {
    pub fn into_dto(self) -> PayuPaymentDataDto {
        PayuPaymentDataDto {
            key: self.key,
            txnid: self.txnid,
            amount: self.amount,
            productinfo: self.productinfo,
            firstname: self.firstname,
            email: self.email,
            phone: self.phone,
            surl: self.surl,
            furl: self.furl,
            hash: self.hash,
            currency: self.currency.to_string(),
        }
    }
}

/// Settlement status reported by the gateway, normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayStatus {
    Success,
    Failed,
    Pending,
}

impl GatewayStatus {
    /// Normalizes a raw gateway status string.
    ///
    /// `success` maps to success, `failure` and `failed` to failed, anything else is
    /// still in flight.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => GatewayStatus::Success,
            "failure" | "failed" => GatewayStatus::Failed,
            _ => GatewayStatus::Pending,
        }
    }

    /// Local payment status this settlement moves a pending booking to.
    pub fn payment_status(&self) -> PaymentStatus {
        match self {
            GatewayStatus::Success => PaymentStatus::Success,
            GatewayStatus::Failed => PaymentStatus::Failed,
            GatewayStatus::Pending => PaymentStatus::Pending,
        }
    }
}

/// Transaction details returned by the gateway for one transaction id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GatewayTransaction {
    /// Raw status string as sent by the gateway.
    pub raw_status: String,
    /// Gateway-side payment id (`mihpayid`).
    pub payment_id: Option<String>,
    pub payment_mode: Option<String>,
    pub bank_ref_num: Option<String>,
    pub amount: Option<String>,
}

/// Why a verification produced no usable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndeterminateReason {
    /// The gateway answered but had no details for the transaction id.
    MissingDetails,
    /// The response could not be interpreted.
    Malformed(String),
    /// Network or HTTP failure reaching the gateway.
    Unreachable(String),
    /// The call did not finish within the configured bound.
    TimedOut,
}

impl fmt::Display for IndeterminateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndeterminateReason::MissingDetails => {
                f.write_str("gateway returned no details for this transaction")
            }
            IndeterminateReason::Malformed(reason) => {
                write!(f, "malformed gateway response: {}", reason)
            }
            IndeterminateReason::Unreachable(reason) => {
                write!(f, "gateway unreachable: {}", reason)
            }
            IndeterminateReason::TimedOut => f.write_str("gateway verification timed out"),
        }
    }
}

/// Outcome of asking the gateway for a transaction's settlement status.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    Confirmed {
        status: GatewayStatus,
        transaction: GatewayTransaction,
    },
    Indeterminate(IndeterminateReason),
}

/// Where a reported payment status came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSource {
    Database,
    Gateway,
}

/// Answer to a direct payment-status query.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatusReport {
    pub txnid: String,
    pub status: PaymentStatus,
    pub source: StatusSource,
    pub booking_id: i32,
    pub amount: f64,
    pub transaction: Option<GatewayTransaction>,
    pub status_updated: bool,
    pub original_db_status: PaymentStatus,
    pub warning: Option<String>,
}

impl PaymentStatusReport {
    pub fn into_dto(self) -> PaymentStatusDto {
        let transaction = self.transaction.unwrap_or_default();
        let gateway_status =
            (!transaction.raw_status.is_empty()).then_some(transaction.raw_status);

        PaymentStatusDto {
            txnid: self.txnid,
            status: self.status.to_string(),
            source: match self.source {
                StatusSource::Database => StatusSourceDto::Database,
                StatusSource::Gateway => StatusSourceDto::Gateway,
            },
            booking_id: self.booking_id,
            amount: self.amount,
            payment_id: transaction.payment_id,
            payment_mode: transaction.payment_mode,
            bank_ref_num: transaction.bank_ref_num,
            gateway_status,
            status_updated: self.status_updated,
            original_db_status: self.original_db_status.to_string(),
            warning: self.warning,
        }
    }
}
