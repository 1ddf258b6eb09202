//! Tokenizer and positional field mapper for the RKSV machine-readable code.
//!
//! The code printed (usually as a QR code) on every Austrian register
//! receipt looks like
//!
//! ```text
//! _R1-AT0_0003111_0003111001000202404157928_2024-04-15T16:28:54_0,00_13,80_0,00_0,00_0,00_4jJVnlBGlgw=_U:ATU59193205-001_xg2ik+BDjGE=_MRuO...==
//! ```
//!
//! Fields are identified purely by position. Index 0 is the empty token in
//! front of the leading underscore.

use std::str::FromStr;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::amount::normalize_amount;
use super::company::extract_company_vat_id;
use super::error::RksvError;
use super::types::ReceiptCode;

/// Number of `_`-separated tokens a code must have, including the empty leader.
pub const TOKEN_COUNT: usize = 14;

/// Format of the Beleg-Datum-Uhrzeit field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Split a raw code into its first [`TOKEN_COUNT`] tokens.
///
/// Empty tokens are preserved and nothing is trimmed. Tokens past the
/// last known field are ignored.
pub fn tokenize(raw: &str) -> Result<[&str; TOKEN_COUNT], RksvError> {
    let tokens: Vec<&str> = raw.split('_').collect();
    let found = tokens.len();

    tokens
        .get(..TOKEN_COUNT)
        .and_then(|head| <[&str; TOKEN_COUNT]>::try_from(head).ok())
        .ok_or(RksvError::MalformedCode {
            expected: TOKEN_COUNT,
            found,
        })
}

/// Parse a raw RKSV receipt code.
///
/// # Errors
///
/// Returns `RksvError::MalformedCode` if fewer than [`TOKEN_COUNT`] tokens
/// are present and `RksvError::InvalidTimestamp` if the timestamp field is
/// not `YYYY-MM-DDTHH:MM:SS`. Unparsable amounts are read as zero.
pub fn parse(raw: &str) -> Result<ReceiptCode, RksvError> {
    let [
        _,
        algorithm_identifier,
        cash_register_id,
        receipt_number,
        timestamp,
        gross_normal,
        gross_reduced1,
        gross_reduced2,
        gross_zero,
        gross_special,
        turnover_counter,
        certificate_serial,
        previous_receipt_signature,
        signature_value,
    ] = tokenize(raw)?;

    let receipt = ReceiptCode {
        algorithm_identifier: algorithm_identifier.to_string(),
        cash_register_id: cash_register_id.to_string(),
        receipt_number: receipt_number.to_string(),
        receipt_timestamp: parse_timestamp(timestamp)?,
        gross_normal: normalize_amount(gross_normal),
        gross_reduced1: normalize_amount(gross_reduced1),
        gross_reduced2: normalize_amount(gross_reduced2),
        gross_zero: normalize_amount(gross_zero),
        gross_special: normalize_amount(gross_special),
        turnover_counter: turnover_counter.to_string(),
        certificate_serial: certificate_serial.to_string(),
        company_vat_id: extract_company_vat_id(certificate_serial),
        previous_receipt_signature: previous_receipt_signature.to_string(),
        signature_value: signature_value.to_string(),
    };

    debug!(
        cash_register_id = %receipt.cash_register_id,
        receipt_number = %receipt.receipt_number,
        "parsed receipt code"
    );

    Ok(receipt)
}

/// Parse the Beleg-Datum-Uhrzeit field.
///
/// Only the zero-padded, offset-free form is accepted; chrono alone would
/// also take unpadded components.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, RksvError> {
    let well_shaped = raw.len() == 19
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        });

    let parsed = if well_shaped {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
    } else {
        None
    };

    parsed.ok_or_else(|| {
        warn!(raw, "rejecting receipt timestamp");
        RksvError::InvalidTimestamp(raw.to_string())
    })
}

impl ReceiptCode {
    /// Parse a raw RKSV receipt code. See [`parse`].
    pub fn parse(raw: &str) -> Result<Self, RksvError> {
        parse(raw)
    }
}

impl FromStr for ReceiptCode {
    type Err = RksvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for ReceiptCode {
    type Error = RksvError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}
