use rksv::core::*;

fn main() {
    let codes = [
        "_R1-AT0_633/029_003-2024-04-13T08:54:54MSR7520_2024-04-13T08:54:54_5,20_22,98_11,37_0,00_0,00_H7tLtJNt8y4=_U:ATU78172745-2_iUIdqDTkZTA=_RVYFIO0aQa1myJC5VPlFQPZv0xz+T4Sf2PkxGG46r0c+Xn6p7OLG36/IUY9we2c4S3NkVJuEPGBqs4QBzoqjaQ==",
        "_R1-AT1_KASSE-01_815_2023-12-31T23:59:59_1,20_0,00_0,00_2,00_0,50_Q09VTlRFUg==_6e638f48_UFJFVg==_U0lH",
        "_R1-AT0_too_short",
    ];

    for code in &codes {
        println!("=== Receipt Code ===\n");
        let receipt = match parse(code) {
            Ok(r) => r,
            Err(e) => {
                println!("  INVALID: {e}\n");
                continue;
            }
        };

        println!("  Algorithm:     {}", receipt.algorithm_identifier());
        println!("  Kassen-ID:     {}", receipt.cash_register_id());
        println!("  Belegnummer:   {}", receipt.receipt_number());
        println!("  Zeitpunkt:     {}", receipt.receipt_timestamp());
        println!("  UID:           {}", receipt.company_vat_id().unwrap_or("—"));
        println!();

        for amounts in receipt.tax_breakdown() {
            let rate = amounts
                .rate
                .map(|r| format!("{r}%"))
                .unwrap_or_else(|| "?".into());
            let tax = amounts
                .tax
                .map(|t| t.to_string())
                .unwrap_or_else(|| "—".into());
            println!(
                "  {:<18} {:>4}  gross={:>8}  tax={:>6}",
                amounts.bracket.to_string(),
                rate,
                amounts.gross,
                tax
            );
        }

        println!();
        println!("  Total incl. tax: {}", receipt.total_including_tax());
        println!("  Total tax:       {}\n", receipt.total_tax());
    }
}
