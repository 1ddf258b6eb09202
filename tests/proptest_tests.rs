//! Property-based tests for the receipt code parser.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rksv::core::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate an amount in cents (0.00 to 99999.99).
fn arb_cents() -> impl Strategy<Value = i64> {
    0i64..10_000_000i64
}

/// Format cents the way registers print them, e.g. `1234,50`.
fn register_amount(cents: i64) -> String {
    format!("{},{:02}", cents / 100, cents % 100)
}

/// Free-form field content without the `_` delimiter.
fn arb_field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+/=:.-]{1,24}"
}

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2016i32..2040, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

#[derive(Debug, Clone)]
struct Fields {
    algorithm: String,
    register: String,
    number: String,
    timestamp: NaiveDateTime,
    cents: [i64; 5],
    counter: String,
    serial: String,
    prev_sig: String,
    sig: String,
}

fn arb_fields() -> impl Strategy<Value = Fields> {
    (
        (arb_field(), arb_field(), arb_field(), arb_timestamp()),
        prop::array::uniform5(arb_cents()),
        (arb_field(), arb_field(), arb_field(), arb_field()),
    )
        .prop_map(
            |((algorithm, register, number, timestamp), cents, (counter, serial, prev_sig, sig))| {
                Fields {
                    algorithm,
                    register,
                    number,
                    timestamp,
                    cents,
                    counter,
                    serial,
                    prev_sig,
                    sig,
                }
            },
        )
}

fn render(f: &Fields) -> String {
    let amounts: Vec<String> = f.cents.iter().map(|&c| register_amount(c)).collect();
    format!(
        "_{}_{}_{}_{}_{}_{}_{}_{}",
        f.algorithm,
        f.register,
        f.number,
        f.timestamp.format(TIMESTAMP_FORMAT),
        amounts.join("_"),
        f.counter,
        f.serial,
        [f.prev_sig.as_str(), f.sig.as_str()].join("_"),
    )
}

/// Touch every accessor, including the derived ones.
fn read_everything(r: &ReceiptCode) {
    let _ = (
        r.algorithm_identifier(),
        r.cash_register_id(),
        r.receipt_number(),
        r.receipt_timestamp(),
        r.turnover_counter(),
        r.certificate_serial(),
        r.company_vat_id(),
        r.previous_receipt_signature(),
        r.signature_value(),
    );
    for bracket in TaxBracket::ALL {
        let _ = (r.gross(bracket), r.tax_amount(bracket), r.net_amount(bracket));
    }
    let _ = (r.tax_normal(), r.tax_reduced1(), r.tax_reduced2(), r.tax_zero());
    let _ = (r.total_including_tax(), r.total_tax(), r.tax_breakdown());
}

/// Amount tokens biased toward the edges of the decimal range.
fn arb_amount_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{0,32}([.,][0-9]{0,32})?([eE][+-]?[0-9]{0,4})?",
        Just(Decimal::MAX.to_string()),
        Just(Decimal::MIN.to_string()),
        "\\PC{0,12}",
    ]
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_never_panics(s in "\\PC*") {
        if let Ok(r) = parse(&s) {
            read_everything(&r);
        }
    }

    #[test]
    fn extreme_amounts_never_panic(amounts in prop::array::uniform5(arb_amount_token())) {
        let raw = format!(
            "_R1-AT0_K1_1_2024-01-02T03:04:05_{}_C_S_P_V",
            amounts.join("_")
        );
        // Amount tokens containing '_' shift the fields; either outcome is fine.
        if let Ok(r) = parse(&raw) {
            read_everything(&r);
        }
    }

    #[test]
    fn short_codes_are_malformed(tokens in prop::collection::vec("[^_]*", 1..14)) {
        let raw = tokens.join("_");
        let result = parse(&raw);
        let is_malformed = matches!(result, Err(RksvError::MalformedCode { .. }));
        prop_assert!(is_malformed);
    }

    #[test]
    fn fields_map_by_position(f in arb_fields()) {
        let r = parse(&render(&f)).unwrap();
        prop_assert_eq!(r.algorithm_identifier(), f.algorithm.as_str());
        prop_assert_eq!(r.cash_register_id(), f.register.as_str());
        prop_assert_eq!(r.receipt_number(), f.number.as_str());
        prop_assert_eq!(r.receipt_timestamp(), f.timestamp);
        prop_assert_eq!(r.turnover_counter(), f.counter.as_str());
        prop_assert_eq!(r.certificate_serial(), f.serial.as_str());
        prop_assert_eq!(r.previous_receipt_signature(), f.prev_sig.as_str());
        prop_assert_eq!(r.signature_value(), f.sig.as_str());
        for (bracket, cents) in TaxBracket::ALL.iter().zip(f.cents) {
            prop_assert_eq!(r.gross(*bracket), Decimal::new(cents, 2));
        }
    }

    #[test]
    fn total_is_exact_sum(f in arb_fields()) {
        let r = parse(&render(&f)).unwrap();
        let expected: i64 = f.cents.iter().sum();
        prop_assert_eq!(r.total_including_tax(), Decimal::new(expected, 2));
    }

    #[test]
    fn amount_normalization_exact(cents in arb_cents()) {
        prop_assert_eq!(normalize_amount(&register_amount(cents)), Decimal::new(cents, 2));
    }

    #[test]
    fn tax_plus_net_is_gross(cents in arb_cents()) {
        let gross = Decimal::new(cents, 2);
        for bracket in TaxBracket::ALL {
            let amounts = BracketAmounts::new(bracket, gross);
            if let (Some(tax), Some(net)) = (amounts.tax, amounts.net) {
                prop_assert_eq!(tax + net, gross);
                prop_assert!(tax >= Decimal::ZERO);
                prop_assert!(tax <= gross);
            }
        }
    }

    #[test]
    fn company_vat_id_depends_only_on_serial(serial in arb_field(), f in arb_fields()) {
        let f = Fields { serial: serial.clone(), ..f };
        let r = parse(&render(&f)).unwrap();
        let expected = extract_company_vat_id(&serial);
        prop_assert_eq!(r.company_vat_id(), expected.as_deref());
    }
}
