use rksv::json::from_json;

fn main() {
    // Shape of the response served for SPAR digital receipts
    let response = r#"{
        "code": "_R1-AT0_0003111_0003111001000202404157928_2024-04-15T16:28:54_0,00_13,80_0,00_0,00_0,00_4jJVnlBGlgw=_U:ATU59193205-001_xg2ik+BDjGE=_MRuODBrEHpIbqWbi+JbMg3A8jaCrind4hTi07PpeqwN9i+Anww4pEjrFXQ1+sQ7vi1M6d5a0aN+X0+EMbHt2HA=="
    }"#;

    match from_json(response) {
        Ok(receipt) => {
            println!(
                "Receipt {} from register {}",
                receipt.receipt_number(),
                receipt.cash_register_id()
            );
            println!("  Issued:  {}", receipt.receipt_timestamp());
            println!("  Company: {}", receipt.company_vat_id().unwrap_or("—"));
            println!(
                "  Total:   {} (tax {})",
                receipt.total_including_tax(),
                receipt.total_tax()
            );
        }
        Err(e) => println!("INVALID: {e}"),
    }

    for payload in ["invalid json", r#"{"receipt": "_R1-AT0"}"#] {
        match from_json(payload) {
            Ok(_) => println!("{payload} => unexpectedly valid"),
            Err(e) => println!("{payload} => {e}"),
        }
    }
}
