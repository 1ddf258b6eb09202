#![cfg(feature = "json")]

use rksv::core::*;
use rksv::json::*;
use rust_decimal_macros::dec;

const CODE: &str = "_R1-AT0_633/029_003-2024-04-13T08:54:54MSR7520_2024-04-13T08:54:54_5,20_22,98_11,37_0,00_0,00_H7tLtJNt8y4=_U:ATU78172745-2_iUIdqDTkZTA=_RVYFIO0aQa1myJC5VPlFQPZv0xz+T4Sf2PkxGG46r0c+Xn6p7OLG36/IUY9we2c4S3NkVJuEPGBqs4QBzoqjaQ==";

fn envelope(code: &str) -> String {
    serde_json::json!({ "code": code }).to_string()
}

#[test]
fn invalid_json_rejected() {
    let err = from_json("invalid json").unwrap_err();
    assert!(matches!(err, RksvError::InvalidPayload(_)));
    assert!(err.to_string().starts_with("invalid payload: not valid JSON"));
}

#[test]
fn empty_payload_rejected() {
    assert!(matches!(from_json(""), Err(RksvError::InvalidPayload(_))));
}

#[test]
fn scalar_payload_rejected() {
    assert!(matches!(
        from_json(r#""_R1-AT0_...""#),
        Err(RksvError::InvalidPayload(_))
    ));
}

#[test]
fn null_code_rejected() {
    assert!(matches!(
        from_json(r#"{"code": null}"#),
        Err(RksvError::InvalidPayload(_))
    ));
}

#[test]
fn envelope_parses_like_raw_code() {
    let wrapped = from_json(&envelope(CODE)).unwrap();
    let direct = parse(CODE).unwrap();
    assert_eq!(wrapped, direct);
    assert_eq!(wrapped.total_including_tax(), dec!(39.55));
}

#[test]
fn extra_fields_ignored() {
    let payload = format!(r#"{{"code": "{CODE}", "storeId": 4711, "valid": true}}"#);
    assert_eq!(from_json(&payload).unwrap().cash_register_id(), "633/029");
}

#[test]
fn malformed_inner_code() {
    assert!(matches!(
        from_json(&envelope("_R1-AT0_only_four")),
        Err(RksvError::MalformedCode { .. })
    ));
}

#[test]
fn invalid_inner_timestamp() {
    let bad = CODE.replace("_2024-04-13T08:54:54_", "_yesterday_");
    assert!(matches!(
        from_json(&envelope(&bad)),
        Err(RksvError::InvalidTimestamp(_))
    ));
}
