//! PayU hosted checkout and transaction verification.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sha2::{Digest, Sha512};

use crate::server::{
    config::Config,
    model::payment::{
        GatewayStatus, GatewayTransaction, IndeterminateReason, InitiatePaymentParams,
        PayuPaymentRequest, Verification,
    },
    service::payment::gateway::TransactionVerifier,
};

const CURRENCY: &str = "INR";
const VERIFY_COMMAND: &str = "verify_payment";

/// Placeholder the gateway puts in fields of transactions it does not know.
const NOT_FOUND: &str = "Not Found";

fn sha512_hex(input: &str) -> String {
    hex::encode(Sha512::digest(input.as_bytes()))
}

/// Signature of a checkout request.
///
/// Hashes `key|txnid|amount|productinfo|firstname|email|udf1..udf5||||||salt` with all
/// user-defined fields empty.
pub fn payment_hash(
    key: &str,
    txnid: &str,
    amount: &str,
    productinfo: &str,
    firstname: &str,
    email: &str,
    salt: &str,
) -> String {
    let udf = "|".repeat(5);
    sha512_hex(&format!(
        "{key}|{txnid}|{amount}|{productinfo}|{firstname}|{email}{udf}||||||{salt}"
    ))
}

/// Signature of a `verify_payment` call: `key|verify_payment|txnid|salt`.
pub fn verify_hash(key: &str, txnid: &str, salt: &str) -> String {
    sha512_hex(&format!("{key}|{VERIFY_COMMAND}|{txnid}|{salt}"))
}

/// Formats an amount the way it is both hashed and posted.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Reads a detail field that the gateway may send as a string or a number.
fn detail(entry: &Value, name: &str) -> Option<String> {
    let value = match entry.get(name)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    (!value.is_empty() && value != NOT_FOUND).then_some(value)
}

/// Interprets a `verify_payment` response body for one transaction id.
///
/// # Returns
/// - `Verification::Confirmed` - The gateway reported a status for `txnid`
/// - `Verification::Indeterminate(MissingDetails)` - No entry for `txnid`, or the
///   gateway's "Not Found" placeholder
/// - `Verification::Indeterminate(Malformed)` - The body does not have the expected shape
pub fn parse_verification(txnid: &str, body: &Value) -> Verification {
    let Some(details) = body.get("transaction_details") else {
        return Verification::Indeterminate(IndeterminateReason::Malformed(
            "missing transaction_details".to_string(),
        ));
    };
    if !details.is_object() {
        return Verification::Indeterminate(IndeterminateReason::MissingDetails);
    }

    let Some(entry) = details.get(txnid) else {
        return Verification::Indeterminate(IndeterminateReason::MissingDetails);
    };

    let Some(raw_status) = entry.get("status").and_then(Value::as_str) else {
        return Verification::Indeterminate(IndeterminateReason::Malformed(format!(
            "transaction {txnid} has no status"
        )));
    };
    if raw_status.trim().eq_ignore_ascii_case(NOT_FOUND) {
        return Verification::Indeterminate(IndeterminateReason::MissingDetails);
    }

    Verification::Confirmed {
        status: GatewayStatus::from_raw(raw_status),
        transaction: GatewayTransaction {
            raw_status: raw_status.to_string(),
            payment_id: detail(entry, "mihpayid"),
            payment_mode: detail(entry, "mode"),
            bank_ref_num: detail(entry, "bank_ref_num"),
            amount: detail(entry, "amt"),
        },
    }
}

/// Client for the PayU merchant API.
#[derive(Clone)]
pub struct PayuGateway {
    http_client: reqwest::Client,
    merchant_key: String,
    merchant_salt: String,
    base_url: String,
    verify_url: String,
    admin_base_url: String,
    timeout: Duration,
}

impl PayuGateway {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            merchant_key: config.payu.merchant_key.clone(),
            merchant_salt: config.payu.merchant_salt.clone(),
            base_url: config.payu.base_url.clone(),
            verify_url: config.payu.verify_url.clone(),
            admin_base_url: config.admin_base_url.clone(),
            timeout: config.payu.timeout,
        }
    }

    /// Hosted payment page the checkout form posts to.
    pub fn checkout_url(&self) -> String {
        format!("{}/_payment", self.base_url)
    }

    /// URL the gateway calls back, for both success and failure, after payment.
    pub fn callback_url(&self, txnid: &str) -> String {
        format!("{}/admin/bookings/verify/{}", self.admin_base_url, txnid)
    }

    /// Builds the signed checkout form for a transaction.
    ///
    /// # Arguments
    /// - `txnid` - Freshly generated transaction id
    /// - `params` - Validated payer and amount fields
    pub fn prepare(&self, txnid: &str, params: &InitiatePaymentParams) -> PayuPaymentRequest {
        let amount = format_amount(params.amount);
        let hash = payment_hash(
            &self.merchant_key,
            txnid,
            &amount,
            &params.productinfo,
            &params.firstname,
            &params.email,
            &self.merchant_salt,
        );
        let callback = self.callback_url(txnid);

        PayuPaymentRequest {
            payu_url: self.checkout_url(),
            key: self.merchant_key.clone(),
            txnid: txnid.to_string(),
            amount,
            productinfo: params.productinfo.clone(),
            firstname: params.firstname.clone(),
            email: params.email.clone(),
            phone: params.phone.clone(),
            surl: callback.clone(),
            furl: callback,
            hash,
            currency: CURRENCY,
        }
    }

    async fn request_verification(&self, txnid: &str) -> Verification {
        let hash = verify_hash(&self.merchant_key, txnid, &self.merchant_salt);
        let form = [
            ("key", self.merchant_key.as_str()),
            ("command", VERIFY_COMMAND),
            ("var1", txnid),
            ("hash", hash.as_str()),
        ];

        let response = match self
            .http_client
            .post(&self.verify_url)
            .form(&form)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(e) => {
                return Verification::Indeterminate(IndeterminateReason::Unreachable(
                    e.to_string(),
                ))
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Verification::Indeterminate(IndeterminateReason::Unreachable(
                    e.to_string(),
                ))
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(json) => parse_verification(txnid, &json),
            Err(e) => Verification::Indeterminate(IndeterminateReason::Malformed(e.to_string())),
        }
    }
}

#[async_trait]
impl TransactionVerifier for PayuGateway {
    async fn verify(&self, txnid: &str) -> Verification {
        let verification =
            match tokio::time::timeout(self.timeout, self.request_verification(txnid)).await {
                Ok(verification) => verification,
                Err(_) => Verification::Indeterminate(IndeterminateReason::TimedOut),
            };

        match &verification {
            Verification::Confirmed { transaction, .. } => tracing::info!(
                txn_id = txnid,
                gateway_status = %transaction.raw_status,
                "Gateway verification confirmed"
            ),
            Verification::Indeterminate(reason) => tracing::warn!(
                txn_id = txnid,
                %reason,
                "Gateway verification indeterminate"
            ),
        }

        verification
    }
}
