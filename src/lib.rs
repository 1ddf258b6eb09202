//! # rksv
//!
//! Parser for the machine-readable code printed on Austrian cash-register
//! receipts (Registrierkassensicherheitsverordnung, RKSV). Turns the
//! `_`-delimited code into a typed record and derives the VAT contained
//! in each bracket's gross amount.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Signatures and the encrypted turnover counter are exposed as opaque
//! strings; nothing is verified or decrypted.
//!
//! ## Quick Start
//!
//! ```rust
//! use rksv::core::*;
//! use rust_decimal_macros::dec;
//!
//! let code = "_R1-AT0_0003111_0003111001000202404157928_2024-04-15T16:28:54_\
//!             0,00_13,80_0,00_0,00_0,00_4jJVnlBGlgw=_U:ATU59193205-001_\
//!             xg2ik+BDjGE=_MRuODBrEHpIbqWbi+JbMg3A8jaCrind4hTi07PpeqwN9i+Anww4pEjrFXQ1+sQ7vi1M6d5a0aN+X0+EMbHt2HA==";
//!
//! let receipt = parse(code).unwrap();
//! assert_eq!(receipt.cash_register_id(), "0003111");
//! assert_eq!(receipt.gross_reduced1(), dec!(13.80));
//! assert_eq!(receipt.tax_reduced1(), dec!(1.25));
//! assert_eq!(receipt.company_vat_id(), Some("ATU59193205"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Code parser, receipt record, VAT back-calculation |
//! | `json` | Construct receipts from `{"code": "..."}` JSON payloads |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
