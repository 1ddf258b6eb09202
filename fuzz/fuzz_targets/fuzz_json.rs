#![no_main]

use libfuzzer_sys::fuzz_target;
use rksv::TaxBracket;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(receipt) = rksv::json::from_json(s) {
            let _ = (receipt.receipt_timestamp(), receipt.company_vat_id());
            for bracket in TaxBracket::ALL {
                let _ = (receipt.tax_amount(bracket), receipt.net_amount(bracket));
            }
            let _ = (receipt.total_including_tax(), receipt.total_tax());
            let _ = receipt.tax_breakdown();
        }
    }
});
