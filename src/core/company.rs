//! Company VAT ID derivation from the certificate serial field.

/// Marker of an Austrian EU VAT identifier.
const AT_VAT_MARKER: &str = "ATU";

/// Derive the company VAT ID from a raw Zertifikat-Seriennummer token.
///
/// Registers whose signing certificate is bound to a UID carry serials
/// like `U:ATU59193205-001`. Everything from the first `-` is dropped,
/// then a leading `U:` is stripped. Returns `None` when the remainder
/// does not contain `ATU` (plain hex serials, legacy or foreign registers).
pub fn extract_company_vat_id(certificate_serial: &str) -> Option<String> {
    let head = certificate_serial
        .split_once('-')
        .map_or(certificate_serial, |(head, _)| head);
    let cleaned = head.strip_prefix("U:").unwrap_or(head);

    cleaned
        .contains(AT_VAT_MARKER)
        .then(|| cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_bound_serial() {
        assert_eq!(
            extract_company_vat_id("U:ATU59193205-001").as_deref(),
            Some("ATU59193205")
        );
    }

    #[test]
    fn short_suffix() {
        assert_eq!(
            extract_company_vat_id("U:ATU78172745-2").as_deref(),
            Some("ATU78172745")
        );
    }

    #[test]
    fn hex_serial_has_no_vat_id() {
        assert_eq!(extract_company_vat_id("6e638f48"), None);
    }

    #[test]
    fn without_prefix_or_suffix() {
        assert_eq!(
            extract_company_vat_id("ATU12345678").as_deref(),
            Some("ATU12345678")
        );
    }

    #[test]
    fn marker_after_dash_is_ignored() {
        assert_eq!(extract_company_vat_id("U:1234-ATU12345678"), None);
    }

    #[test]
    fn only_leading_prefix_stripped() {
        assert_eq!(
            extract_company_vat_id("XU:ATU1").as_deref(),
            Some("XU:ATU1")
        );
    }

    #[test]
    fn empty_serial() {
        assert_eq!(extract_company_vat_id(""), None);
    }
}
