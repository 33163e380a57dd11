//! Fixed Direct Link endpoints.

use crate::ports::Endpoint;

pub const PRODUCTION_HOST: &str = "payments.epdq.co.uk";
pub const PRODUCTION_PATH: &str = "/ncol/prod/orderdirect.asp";
pub const TEST_HOST: &str = "mdepayments.epdq.co.uk";
pub const TEST_PATH: &str = "/ncol/test/orderdirect.asp";

/// Which gateway environment requests go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayEnvironment {
    #[default]
    Production,
    Test,
}

impl GatewayEnvironment {
    pub fn from_test_flag(use_test_environment: bool) -> Self {
        if use_test_environment {
            GatewayEnvironment::Test
        } else {
            GatewayEnvironment::Production
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            GatewayEnvironment::Production => Endpoint::https(PRODUCTION_HOST, PRODUCTION_PATH),
            GatewayEnvironment::Test => Endpoint::https(TEST_HOST, TEST_PATH),
        }
    }
}
