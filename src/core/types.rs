use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::tax::{BracketAmounts, TaxBracket, derived_tax_amount};

/// A parsed RKSV machine-readable receipt code.
///
/// Built only by [`parse`](super::parse); read-only afterwards. The
/// company VAT ID is derived from the certificate serial during parsing
/// and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptCode {
    pub(crate) algorithm_identifier: String,
    pub(crate) cash_register_id: String,
    pub(crate) receipt_number: String,
    pub(crate) receipt_timestamp: NaiveDateTime,
    pub(crate) gross_normal: Decimal,
    pub(crate) gross_reduced1: Decimal,
    pub(crate) gross_reduced2: Decimal,
    pub(crate) gross_zero: Decimal,
    pub(crate) gross_special: Decimal,
    pub(crate) turnover_counter: String,
    pub(crate) certificate_serial: String,
    pub(crate) company_vat_id: Option<String>,
    pub(crate) previous_receipt_signature: String,
    pub(crate) signature_value: String,
}

impl ReceiptCode {
    /// Registrierkassenalgorithmuskennzeichen, e.g. `R1-AT0`.
    pub fn algorithm_identifier(&self) -> &str {
        &self.algorithm_identifier
    }

    /// Kassen-ID.
    pub fn cash_register_id(&self) -> &str {
        &self.cash_register_id
    }

    /// Belegnummer.
    pub fn receipt_number(&self) -> &str {
        &self.receipt_number
    }

    /// Beleg-Datum-Uhrzeit (local time, no offset).
    pub fn receipt_timestamp(&self) -> NaiveDateTime {
        self.receipt_timestamp
    }

    /// Gross amount at the normal rate (20%).
    pub fn gross_normal(&self) -> Decimal {
        self.gross_normal
    }

    /// Gross amount at reduced rate 1 (10%).
    pub fn gross_reduced1(&self) -> Decimal {
        self.gross_reduced1
    }

    /// Gross amount at reduced rate 2 (13%).
    pub fn gross_reduced2(&self) -> Decimal {
        self.gross_reduced2
    }

    /// Gross amount at the zero rate.
    pub fn gross_zero(&self) -> Decimal {
        self.gross_zero
    }

    /// Gross amount in the special bracket. No tax is derived for it.
    pub fn gross_special(&self) -> Decimal {
        self.gross_special
    }

    /// Encrypted turnover counter (AES-256-ICM, base64). Not decrypted.
    pub fn turnover_counter(&self) -> &str {
        &self.turnover_counter
    }

    /// Raw Zertifikat-Seriennummer token.
    pub fn certificate_serial(&self) -> &str {
        &self.certificate_serial
    }

    /// Austrian VAT ID (`ATU…`) derived from the certificate serial, if any.
    pub fn company_vat_id(&self) -> Option<&str> {
        self.company_vat_id.as_deref()
    }

    /// Signature of the previous receipt in the chain.
    pub fn previous_receipt_signature(&self) -> &str {
        &self.previous_receipt_signature
    }

    /// Signature of this receipt.
    pub fn signature_value(&self) -> &str {
        &self.signature_value
    }

    // --- Derived amounts ---

    /// Gross amount of `bracket`.
    pub fn gross(&self, bracket: TaxBracket) -> Decimal {
        match bracket {
            TaxBracket::Normal => self.gross_normal,
            TaxBracket::Reduced1 => self.gross_reduced1,
            TaxBracket::Reduced2 => self.gross_reduced2,
            TaxBracket::Zero => self.gross_zero,
            TaxBracket::Special => self.gross_special,
        }
    }

    /// Tax contained in the gross amount of `bracket`.
    ///
    /// `None` for [`TaxBracket::Special`], whose rate is not part of the code.
    pub fn tax_amount(&self, bracket: TaxBracket) -> Option<Decimal> {
        bracket
            .rate()
            .map(|rate| derived_tax_amount(self.gross(bracket), rate))
    }

    /// Net amount (gross minus derived tax) of `bracket`.
    pub fn net_amount(&self, bracket: TaxBracket) -> Option<Decimal> {
        self.tax_amount(bracket).map(|tax| self.gross(bracket) - tax)
    }

    /// Tax contained in the normal-rate amount.
    pub fn tax_normal(&self) -> Decimal {
        derived_tax_amount(self.gross_normal, super::TAX_RATE_NORMAL)
    }

    /// Tax contained in the reduced-rate-1 amount.
    pub fn tax_reduced1(&self) -> Decimal {
        derived_tax_amount(self.gross_reduced1, super::TAX_RATE_REDUCED_1)
    }

    /// Tax contained in the reduced-rate-2 amount.
    pub fn tax_reduced2(&self) -> Decimal {
        derived_tax_amount(self.gross_reduced2, super::TAX_RATE_REDUCED_2)
    }

    /// Tax contained in the zero-rate amount (always zero).
    pub fn tax_zero(&self) -> Decimal {
        derived_tax_amount(self.gross_zero, super::TAX_RATE_ZERO)
    }

    /// Sum of all five gross amounts.
    ///
    /// Saturates at `Decimal::MAX`/`MIN` for codes carrying out-of-range
    /// amounts instead of overflowing.
    pub fn total_including_tax(&self) -> Decimal {
        TaxBracket::ALL
            .iter()
            .map(|&b| self.gross(b))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of the derived tax over the four rated brackets.
    pub fn total_tax(&self) -> Decimal {
        TaxBracket::ALL
            .iter()
            .filter_map(|&b| self.tax_amount(b))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Gross, tax and net figures for every bracket, in wire order.
    pub fn tax_breakdown(&self) -> Vec<BracketAmounts> {
        TaxBracket::ALL
            .iter()
            .map(|&b| BracketAmounts::new(b, self.gross(b)))
            .collect()
    }

    // --- Field names as printed in the RKSV regulation ---

    /// Alias for [`cash_register_id`](Self::cash_register_id).
    pub fn kassen_id(&self) -> &str {
        self.cash_register_id()
    }

    /// Alias for [`receipt_number`](Self::receipt_number).
    pub fn belegnummer(&self) -> &str {
        self.receipt_number()
    }

    /// Alias for [`receipt_timestamp`](Self::receipt_timestamp).
    pub fn beleg_datum_uhrzeit(&self) -> NaiveDateTime {
        self.receipt_timestamp()
    }

    /// Alias for [`gross_normal`](Self::gross_normal).
    pub fn betrag_satz_normal(&self) -> Decimal {
        self.gross_normal()
    }

    /// Alias for [`gross_reduced1`](Self::gross_reduced1).
    pub fn betrag_satz_ermaessigt1(&self) -> Decimal {
        self.gross_reduced1()
    }

    /// Alias for [`gross_reduced2`](Self::gross_reduced2).
    pub fn betrag_satz_ermaessigt2(&self) -> Decimal {
        self.gross_reduced2()
    }

    /// Alias for [`gross_zero`](Self::gross_zero).
    pub fn betrag_satz_null(&self) -> Decimal {
        self.gross_zero()
    }

    /// Alias for [`gross_special`](Self::gross_special).
    pub fn betrag_satz_besonders(&self) -> Decimal {
        self.gross_special()
    }

    /// Alias for [`turnover_counter`](Self::turnover_counter).
    pub fn stand_umsatz_zaehler_aes256_icm(&self) -> &str {
        self.turnover_counter()
    }

    /// Alias for [`previous_receipt_signature`](Self::previous_receipt_signature).
    pub fn sig_voriger_beleg(&self) -> &str {
        self.previous_receipt_signature()
    }

    /// Alias for [`signature_value`](Self::signature_value).
    pub fn sig_wert(&self) -> &str {
        self.signature_value()
    }
}
