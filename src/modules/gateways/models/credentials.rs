use std::fmt;

use serde::Deserialize;

/// Merchant account credentials for the payment gateway
///
/// Loaded once at startup and injected into the gateway client. Both
/// fields are redacted in `Debug` output.
#[derive(Clone, Deserialize)]
pub struct MerchantCredentials {
    pub login_id: String,
    pub transaction_key: String,
}

impl MerchantCredentials {
    pub fn new(login_id: impl Into<String>, transaction_key: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            transaction_key: transaction_key.into(),
        }
    }
}

impl fmt::Debug for MerchantCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantCredentials")
            .field("login_id", &"<redacted>")
            .field("transaction_key", &"<redacted>")
            .finish()
    }
}
