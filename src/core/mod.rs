//! Receipt code parsing, the parsed record, and VAT back-calculation.
//!
//! This module covers the machine-readable code defined by the Austrian
//! Registrierkassensicherheitsverordnung (RKSV). It never verifies
//! signatures or decrypts the turnover counter.

mod amount;
mod company;
mod error;
mod parser;
mod tax;
mod types;

pub use amount::normalize_amount;
pub use company::extract_company_vat_id;
pub use error::*;
pub use parser::{TIMESTAMP_FORMAT, TOKEN_COUNT, parse, tokenize};
pub use tax::*;
pub use types::*;
