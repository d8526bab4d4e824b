use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct InitiatePaymentDto {
    pub amount: Option<f64>,
    pub firstname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub booking_id: Option<i32>,
    pub productinfo: Option<String>,
}

/// Form fields the payer's browser posts to the gateway's hosted payment page.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PayuPaymentDataDto {
    pub key: String,
    pub txnid: String,
    pub amount: String,
    pub productinfo: String,
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub surl: String,
    pub furl: String,
    pub hash: String,
    pub currency: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentInitiationDto {
    pub message: String,
    pub payu_url: String,
    pub payment_data: PayuPaymentDataDto,
}

/// Where a reported payment status came from.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusSourceDto {
    Database,
    Gateway,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentStatusDto {
    pub txnid: String,
    pub status: String,
    pub source: StatusSourceDto,
    pub booking_id: i32,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_ref_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_status: Option<String>,
    pub status_updated: bool,
    pub original_db_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
