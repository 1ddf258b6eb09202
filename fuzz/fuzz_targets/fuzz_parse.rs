#![no_main]

use libfuzzer_sys::fuzz_target;
use rksv::{ReceiptCode, TaxBracket};

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

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine.
        if let Ok(receipt) = rksv::parse(s) {
            read_everything(&receipt);
        }
        let _ = rksv::normalize_amount(s);
    }
});
