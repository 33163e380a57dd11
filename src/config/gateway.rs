//! Gateway configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::FieldStore;

/// Upper bound for the transport timeout.
const MAX_TIMEOUT_SECS: u64 = 300;

fn default_timeout_secs() -> u64 {
    30
}

/// ePDQ merchant credentials and connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Merchant identifier issued by the gateway
    pub pspid: String,

    /// API user name
    pub login: String,

    /// API user password
    pub password: SecretString,

    /// SHA-IN passphrase; requests are signed when set
    #[serde(default)]
    pub sha_passphrase: Option<SecretString>,

    /// Use the test environment instead of production
    #[serde(default)]
    pub test_mode: bool,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Transport timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fill merchant credentials into `content` where the caller left them
    /// absent or empty.
    pub fn apply_to<S: FieldStore + ?Sized>(&self, content: &mut S) {
        fill(content, "pspid", &self.pspid);
        fill(content, "login", &self.login);
        fill(content, "password", self.password.expose_secret());
        if let Some(passphrase) = &self.sha_passphrase {
            fill(content, "shasign", passphrase.expose_secret());
        }
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pspid.is_empty() {
            return Err(ValidationError::MissingRequired("PSPID"));
        }
        if self.login.is_empty() {
            return Err(ValidationError::MissingRequired("LOGIN"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PASSWORD"));
        }
        if let Some(passphrase) = &self.sha_passphrase {
            if passphrase.expose_secret().is_empty() {
                return Err(ValidationError::EmptyShaPassphrase);
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn fill<S: FieldStore + ?Sized>(content: &mut S, name: &str, value: &str) {
    if content.non_empty_field(name).is_none() {
        content.set_field(name, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionContent;

    fn valid_config() -> GatewayConfig {
        GatewayConfig {
            pspid: "MERCHANT".to_string(),
            login: "api_user".to_string(),
            password: SecretString::new("s3cret".to_string()),
            sha_passphrase: Some(SecretString::new("sha-in-pass".to_string())),
            test_mode: true,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_pspid() {
        let config = GatewayConfig {
            pspid: String::new(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("PSPID"))
        ));
    }

    #[test]
    fn test_validation_missing_password() {
        let config = GatewayConfig {
            password: SecretString::new(String::new()),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_passphrase() {
        let config = GatewayConfig {
            sha_passphrase: Some(SecretString::new(String::new())),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyShaPassphrase)
        ));
    }

    #[test]
    fn test_validation_timeout_bounds() {
        let zero = GatewayConfig {
            timeout_secs: 0,
            ..valid_config()
        };
        let huge = GatewayConfig {
            timeout_secs: 301,
            ..valid_config()
        };
        assert!(zero.validate().is_err());
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_apply_fills_missing_credentials() {
        let mut content = TransactionContent::new().with("login", "");
        valid_config().apply_to(&mut content);

        assert_eq!(content.field("pspid"), Some("MERCHANT"));
        assert_eq!(content.field("login"), Some("api_user"));
        assert_eq!(content.field("password"), Some("s3cret"));
        assert_eq!(content.field("shasign"), Some("sha-in-pass"));
    }

    #[test]
    fn test_apply_keeps_caller_values() {
        let mut content = TransactionContent::new().with("pspid", "OTHER");
        valid_config().apply_to(&mut content);
        assert_eq!(content.field("pspid"), Some("OTHER"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", valid_config());
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("sha-in-pass"));
    }
}
