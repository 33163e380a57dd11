//! Static field and action tables for the Direct Link API.

/// Generic content name to ePDQ field name.
pub const FIELD_MAP: &[(&str, &str)] = &[
    ("pspid", "PSPID"),
    ("login", "USERID"),
    ("password", "PSWD"),
    ("action", "OPERATION"),
    ("amount", "AMOUNT"),
    ("currency", "CURRENCY"),
    ("card_number", "CARDNO"),
    ("expiration", "ED"),
    ("cvv2", "CVC"),
    ("invoice_number", "ORDERID"),
    ("description", "COM"),
    ("name", "CN"),
    ("email", "EMAIL"),
    ("address", "OWNERADDRESS"),
    ("zip", "OWNERZIP"),
    ("city", "OWNERTOWN"),
    ("country", "OWNERCTY"),
    ("phone", "OWNERTELNO"),
    ("customer_ip", "REMOTE_ADDR"),
    ("eci", "ECI"),
    ("ship_first_name", "ECOM_SHIPTO_POSTAL_NAME_FIRST"),
    ("ship_last_name", "ECOM_SHIPTO_POSTAL_NAME_LAST"),
    ("ship_address", "ECOM_SHIPTO_POSTAL_STREET_LINE1"),
    ("ship_city", "ECOM_SHIPTO_POSTAL_CITY"),
    ("ship_state", "ECOM_SHIPTO_POSTAL_STATE"),
    ("ship_zip", "ECOM_SHIPTO_POSTAL_POSTALCODE"),
    ("ship_country", "ECOM_SHIPTO_POSTAL_COUNTRYCODE"),
    ("shasign", SHASIGN),
];

/// Every field the adapter is allowed to send.
pub const POST_FIELDS: &[&str] = &[
    "PSPID",
    "USERID",
    "PSWD",
    "OPERATION",
    "AMOUNT",
    "CURRENCY",
    "CARDNO",
    "ED",
    "CVC",
    "ORDERID",
    "COM",
    "CN",
    "EMAIL",
    "OWNERADDRESS",
    "OWNERZIP",
    "OWNERTOWN",
    "OWNERCTY",
    "OWNERTELNO",
    "REMOTE_ADDR",
    "ECI",
    "ECOM_SHIPTO_POSTAL_NAME_FIRST",
    "ECOM_SHIPTO_POSTAL_NAME_LAST",
    "ECOM_SHIPTO_POSTAL_STREET_LINE1",
    "ECOM_SHIPTO_POSTAL_CITY",
    "ECOM_SHIPTO_POSTAL_STATE",
    "ECOM_SHIPTO_POSTAL_POSTALCODE",
    "ECOM_SHIPTO_POSTAL_COUNTRYCODE",
    SHASIGN,
];

/// Content fields that must be present and non-empty, in check order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "pspid",
    "login",
    "password",
    "action",
    "amount",
    "currency",
    "card_number",
    "expiration",
];

/// Human-readable action (lower case) to operation code.
///
/// Only `SAL` is supported end-to-end.
pub const ACTION_MAP: &[(&str, &str)] = &[
    ("normal authorization", "SAL"),
    ("authorization only", "RES"),
    ("credit", "RFD"),
];

/// Signature field; carries the secret in content and the digest on the wire.
pub const SHASIGN: &str = "SHASIGN";

/// Operation code for an action. Unknown actions are passed through as given.
pub fn resolve_action(action: &str) -> &str {
    let lowered = action.to_lowercase();
    ACTION_MAP
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, code)| *code)
        .unwrap_or(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mapped_field_is_whitelisted() {
        for (generic, gateway) in FIELD_MAP {
            assert!(
                POST_FIELDS.contains(gateway),
                "{} -> {} is not in POST_FIELDS",
                generic,
                gateway
            );
        }
    }

    #[test]
    fn every_required_field_is_mapped() {
        for required in REQUIRED_FIELDS {
            assert!(FIELD_MAP.iter().any(|(generic, _)| generic == required));
        }
    }

    #[test]
    fn actions_resolve_case_insensitively() {
        assert_eq!(resolve_action("Normal Authorization"), "SAL");
        assert_eq!(resolve_action("normal authorization"), "SAL");
        assert_eq!(resolve_action("AUTHORIZATION ONLY"), "RES");
        assert_eq!(resolve_action("Credit"), "RFD");
    }

    #[test]
    fn unknown_action_passes_through_unchanged() {
        assert_eq!(resolve_action("Post Authorization"), "Post Authorization");
        assert_eq!(resolve_action("SAL"), "SAL");
    }
}
