//! Direct Link XML response parsing.
//!
//! The gateway answers with a single `ncresponse` element whose attributes
//! carry the result:
//!
//! ```xml
//! <ncresponse orderID="42" PAYID="98765" NCERROR="0" ACCEPTANCE="1234"
//!             STATUS="9" NCERRORPLUS="!"/>
//! ```
//!
//! Values are also accepted as direct child elements of the root, which win
//! over attributes of the same name.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::GatewayError;

/// `STATUS` value of an authorized payment.
pub const STATUS_AUTHORIZED: &str = "9";

/// `NCERROR` value when no error occurred.
pub const NO_ERROR: &str = "0";

/// Parsed gateway response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayResponse {
    fields: HashMap<String, String>,
}

impl GatewayResponse {
    /// Parse a response body. Anything that is not a single well-formed XML
    /// element is rejected.
    pub fn parse(body: &str) -> Result<Self, GatewayError> {
        let mut reader = Reader::from_str(body);
        reader.config_mut().trim_text(true);

        let mut fields = HashMap::new();
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut child: Option<String> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| GatewayError::malformed(e.to_string()))?;

            match event {
                Event::Start(element) => {
                    match depth {
                        0 => {
                            open_root(&mut seen_root)?;
                            read_attributes(&element, &mut fields)?;
                        }
                        1 => {
                            let name = element_name(&element);
                            fields.entry(name.clone()).or_insert_with(String::new);
                            child = Some(name);
                        }
                        _ => {}
                    }
                    depth += 1;
                }
                Event::Empty(element) => match depth {
                    0 => {
                        open_root(&mut seen_root)?;
                        read_attributes(&element, &mut fields)?;
                    }
                    1 => {
                        fields.insert(element_name(&element), String::new());
                    }
                    _ => {}
                },
                Event::End(_) => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| GatewayError::malformed("unexpected closing tag"))?;
                    if depth <= 1 {
                        child = None;
                    }
                }
                Event::Text(text) => {
                    if depth == 0 {
                        return Err(GatewayError::malformed("text outside of root element"));
                    }
                    if depth == 2 {
                        if let Some(name) = &child {
                            let value = text
                                .unescape()
                                .map_err(|e| GatewayError::malformed(e.to_string()))?;
                            fields.insert(name.clone(), value.trim().to_string());
                        }
                    }
                }
                Event::CData(data) => {
                    if depth == 2 {
                        if let Some(name) = &child {
                            let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                            fields.insert(name.clone(), value);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(GatewayError::malformed("no root element"));
        }
        if depth != 0 {
            return Err(GatewayError::malformed("unclosed element"));
        }

        Ok(Self { fields })
    }

    /// Raw value of any response field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.get("STATUS")
    }

    pub fn nc_error(&self) -> Option<&str> {
        self.get("NCERROR")
    }

    pub fn nc_error_plus(&self) -> Option<&str> {
        self.get("NCERRORPLUS")
    }

    pub fn acceptance(&self) -> Option<&str> {
        self.get("ACCEPTANCE")
    }

    pub fn pay_id(&self) -> Option<&str> {
        self.get("PAYID")
    }

    /// Authorized iff `STATUS` is exactly `"9"` and `NCERROR` exactly `"0"`.
    pub fn is_authorized(&self) -> bool {
        self.status() == Some(STATUS_AUTHORIZED) && self.nc_error() == Some(NO_ERROR)
    }

    /// Failure description in the host's expected format.
    pub fn failure_message(&self) -> String {
        format!(
            "Failed: Status: {}, Error: {}, Message:{}",
            self.status().unwrap_or_default(),
            self.nc_error().unwrap_or_default(),
            self.nc_error_plus().unwrap_or_default(),
        )
    }
}

fn open_root(seen_root: &mut bool) -> Result<(), GatewayError> {
    if *seen_root {
        return Err(GatewayError::malformed("multiple root elements"));
    }
    *seen_root = true;
    Ok(())
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn read_attributes(
    element: &BytesStart<'_>,
    fields: &mut HashMap<String, String>,
) -> Result<(), GatewayError> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| GatewayError::malformed(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| GatewayError::malformed(e.to_string()))?;
        fields.insert(key, value.into_owned());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPROVED: &str = r#"<?xml version="1.0"?>
<ncresponse orderID="42" PAYID="98765" NCSTATUS="0" NCERROR="0" ACCEPTANCE="1234"
 STATUS="9" amount="49.95" currency="GBP" PM="CreditCard" BRAND="VISA" NCERRORPLUS="!">
</ncresponse>"#;

    #[test]
    fn parses_attribute_response() {
        let response = GatewayResponse::parse(APPROVED).unwrap();
        assert_eq!(response.status(), Some("9"));
        assert_eq!(response.nc_error(), Some("0"));
        assert_eq!(response.acceptance(), Some("1234"));
        assert_eq!(response.pay_id(), Some("98765"));
        assert_eq!(response.get("BRAND"), Some("VISA"));
        assert!(response.is_authorized());
    }

    #[test]
    fn parses_self_closing_root() {
        let body = r#"<ncresponse STATUS="9" NCERROR="0" PAYID="1" ACCEPTANCE="A"/>"#;
        let response = GatewayResponse::parse(body).unwrap();
        assert!(response.is_authorized());
    }

    #[test]
    fn parses_child_element_response() {
        let body = "<ncresponse>\
            <STATUS>0</STATUS>\
            <NCERROR>50001113</NCERROR>\
            <NCERRORPLUS>Not enough money</NCERRORPLUS>\
            </ncresponse>";
        let response = GatewayResponse::parse(body).unwrap();

        assert_eq!(response.status(), Some("0"));
        assert_eq!(response.nc_error(), Some("50001113"));
        assert!(!response.is_authorized());
        assert_eq!(
            response.failure_message(),
            "Failed: Status: 0, Error: 50001113, Message:Not enough money"
        );
    }

    #[test]
    fn unescapes_entities() {
        let body = r#"<ncresponse STATUS="0" NCERROR="1" NCERRORPLUS="Card &amp; CVC invalid"/>"#;
        let response = GatewayResponse::parse(body).unwrap();
        assert_eq!(response.nc_error_plus(), Some("Card & CVC invalid"));
    }

    #[test]
    fn status_comparison_is_exact() {
        let body = r#"<ncresponse STATUS="09" NCERROR="0"/>"#;
        assert!(!GatewayResponse::parse(body).unwrap().is_authorized());

        let body = r#"<ncresponse STATUS="9" NCERROR="00"/>"#;
        assert!(!GatewayResponse::parse(body).unwrap().is_authorized());
    }

    #[test]
    fn missing_fields_render_empty_in_message() {
        let response = GatewayResponse::parse("<ncresponse/>").unwrap();
        assert!(!response.is_authorized());
        assert_eq!(response.failure_message(), "Failed: Status: , Error: , Message:");
    }

    #[test]
    fn rejects_non_xml() {
        for body in ["", "garbage", "Internal Server Error"] {
            assert!(
                matches!(
                    GatewayResponse::parse(body),
                    Err(GatewayError::MalformedResponse(_))
                ),
                "expected rejection for {:?}",
                body
            );
        }
    }

    #[test]
    fn rejects_mismatched_and_unclosed_tags() {
        assert!(GatewayResponse::parse("<ncresponse><STATUS>9</NCERROR></ncresponse>").is_err());
        assert!(GatewayResponse::parse("<ncresponse><STATUS>9</STATUS>").is_err());
    }

    #[test]
    fn rejects_multiple_roots() {
        assert!(GatewayResponse::parse("<a/><b/>").is_err());
    }
}
