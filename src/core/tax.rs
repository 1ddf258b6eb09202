//! Austrian VAT brackets and reverse tax extraction from gross amounts.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Normaler Steuersatz (20%).
pub const TAX_RATE_NORMAL: Decimal = dec!(20);

/// Ermäßigter Steuersatz 1 (10%).
pub const TAX_RATE_REDUCED_1: Decimal = dec!(10);

/// Ermäßigter Steuersatz 2 (13%).
pub const TAX_RATE_REDUCED_2: Decimal = dec!(13);

/// Nullsteuersatz (0%).
pub const TAX_RATE_ZERO: Decimal = dec!(0);

/// One of the five VAT brackets a receipt's turnover is split into.
///
/// Variants are listed in the order their amounts appear in the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxBracket {
    /// Betrag-Satz-Normal, 20%.
    Normal,
    /// Betrag-Satz-Ermaessigt-1, 10%.
    Reduced1,
    /// Betrag-Satz-Ermaessigt-2, 13%.
    Reduced2,
    /// Betrag-Satz-Null, 0%.
    Zero,
    /// Betrag-Satz-Besonders. The rate is not encoded in the receipt.
    Special,
}

impl TaxBracket {
    /// All brackets in wire order.
    pub const ALL: [TaxBracket; 5] = [
        Self::Normal,
        Self::Reduced1,
        Self::Reduced2,
        Self::Zero,
        Self::Special,
    ];

    /// Tax rate in percent, or `None` for the special bracket.
    pub fn rate(&self) -> Option<Decimal> {
        match self {
            Self::Normal => Some(TAX_RATE_NORMAL),
            Self::Reduced1 => Some(TAX_RATE_REDUCED_1),
            Self::Reduced2 => Some(TAX_RATE_REDUCED_2),
            Self::Zero => Some(TAX_RATE_ZERO),
            Self::Special => None,
        }
    }

    /// Field name as used in the RKSV regulation.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Normal => "Betrag-Satz-Normal",
            Self::Reduced1 => "Betrag-Satz-Ermaessigt-1",
            Self::Reduced2 => "Betrag-Satz-Ermaessigt-2",
            Self::Zero => "Betrag-Satz-Null",
            Self::Special => "Betrag-Satz-Besonders",
        }
    }
}

impl fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.field_name();
        f.write_str(name.strip_prefix("Betrag-").unwrap_or(name))
    }
}

/// Gross, tax and net figures for one bracket of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketAmounts {
    /// The bracket these figures belong to.
    pub bracket: TaxBracket,
    /// Rate in percent (`None` for the special bracket).
    pub rate: Option<Decimal>,
    /// Gross amount including tax, as printed on the receipt.
    pub gross: Decimal,
    /// Derived tax amount (`None` when the rate is unknown).
    pub tax: Option<Decimal>,
    /// Gross minus tax (`None` when the rate is unknown).
    pub net: Option<Decimal>,
}

impl BracketAmounts {
    /// Compute the figures for `gross` in `bracket`.
    pub fn new(bracket: TaxBracket, gross: Decimal) -> Self {
        let rate = bracket.rate();
        let tax = rate.map(|r| derived_tax_amount(gross, r));
        Self {
            bracket,
            rate,
            gross,
            tax,
            net: tax.map(|t| gross - t),
        }
    }
}

/// Extract the tax contained in a gross amount.
///
/// `round(gross - gross / (1 + rate/100), 2)`, rounding half away from zero.
///
/// # Panics
///
/// Panics if `rate_percent` is `-100`, which makes the divisor zero. The
/// bracket rates never are.
pub fn derived_tax_amount(gross: Decimal, rate_percent: Decimal) -> Decimal {
    let divisor = Decimal::ONE + rate_percent / dec!(100);
    round_half_up(gross - gross / divisor, 2)
}

/// Round a Decimal to `dp` decimal places, midpoints away from zero
/// (commercial rounding; `-0.025` becomes `-0.03`).
fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
