//! Construct receipts from JSON envelopes.
//!
//! Some retailers (SPAR among them) expose the code of a digital receipt
//! through a web endpoint answering `{"code": "_R1-AT0_..."}`. This module
//! unwraps that envelope and hands the inner string to
//! [`parse`](crate::core::parse).
//!
//! # Example
//!
//! ```ignore
//! use rksv::json::from_json;
//!
//! let receipt = from_json(r#"{"code": "_R1-AT0_..."}"#)?;
//! println!("{:?}", receipt.company_vat_id());
//! ```

use serde_json::Value;
use tracing::debug;

use crate::core::{ReceiptCode, RksvError, parse};

/// Name of the field holding the receipt code.
const CODE_FIELD: &str = "code";

/// Parse a receipt from a JSON payload of the form `{"code": "..."}`.
///
/// # Errors
///
/// `RksvError::InvalidPayload` if the payload is not valid JSON, not an
/// object, or has no string `code` field. Errors from [`parse`] are
/// passed through unchanged.
pub fn from_json(payload: &str) -> Result<ReceiptCode, RksvError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| RksvError::InvalidPayload(format!("not valid JSON: {e}")))?;
    from_json_value(&value)
}

/// Parse a receipt from an already decoded JSON value.
pub fn from_json_value(value: &Value) -> Result<ReceiptCode, RksvError> {
    let object = value
        .as_object()
        .ok_or_else(|| RksvError::InvalidPayload("expected a JSON object".into()))?;

    let code = object
        .get(CODE_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            RksvError::InvalidPayload(format!("missing string field '{CODE_FIELD}'"))
        })?;

    debug!(len = code.len(), "unwrapped receipt code from JSON envelope");
    parse(code)
}
