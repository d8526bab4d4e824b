use serde_json::{json, Value};

/// Creates a verification response containing one transaction with the given raw status.
///
/// # Arguments
/// - `txnid` - Transaction id the entry is keyed by
/// - `status` - Raw gateway status (`"success"`, `"failure"`, `"pending"`, ...)
///
/// # Returns
/// - `Value` - JSON body as returned by the gateway
pub fn verification_response(txnid: &str, status: &str) -> Value {
    json!({
        "status": 1,
        "msg": "1 out of 1 Transactions Fetched Successfully",
        "transaction_details": {
            txnid: {
                "mihpayid": "403993715531077182",
                "request_id": "",
                "bank_ref_num": "87d3b2a1-5a60-4169-8692-649f61923b3d",
                "amt": "1000.00",
                "transaction_amount": "1000.00",
                "txnid": txnid,
                "additional_charges": "0.00",
                "productinfo": "Lakeside Tent",
                "firstname": "Asha",
                "bankcode": "CC",
                "udf1": "",
                "udf2": "",
                "udf3": "",
                "udf4": "",
                "udf5": "",
                "field9": "Transaction Completed Successfully",
                "error_code": "E000",
                "addedon": "2025-06-01 10:15:22",
                "payment_source": "payu",
                "card_type": "VISA",
                "status": status,
                "unmappedstatus": "captured",
                "mode": "CC"
            }
        }
    })
}

/// Creates the placeholder entry the gateway returns for an unknown transaction id.
pub fn not_found_response(txnid: &str) -> Value {
    json!({
        "status": 0,
        "msg": "0 out of 1 Transactions Fetched Successfully",
        "transaction_details": {
            txnid: {
                "mihpayid": "Not Found",
                "status": "Not Found"
            }
        }
    })
}

/// Creates a response whose `transaction_details` lacks the requested id entirely.
pub fn missing_transaction_response() -> Value {
    json!({
        "status": 0,
        "msg": "0 out of 1 Transactions Fetched Successfully",
        "transaction_details": {}
    })
}
