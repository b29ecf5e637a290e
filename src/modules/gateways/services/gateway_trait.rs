use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Payment gateway trait for hosted payment page token issuance
#[async_trait]
pub trait HostedPageGateway: Send + Sync {
    /// Request a hosted payment page token from the gateway.
    ///
    /// The returned future is awaited exactly once per incoming request.
    /// Implementations make a single attempt: no retry, no timeout, no
    /// cancellation.
    async fn create_hosted_page_token(
        &self,
        request: HostedPageRequest,
    ) -> Result<HostedPageToken>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Validated payment form data handed to the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedPageRequest {
    /// Transaction amount
    pub amount: Decimal,

    /// Billing first name
    pub first_name: String,

    /// Billing last name
    pub last_name: String,

    /// Billing ZIP code (optional)
    pub zip: Option<String>,

    /// Memo attached as a custom field, defaulted upstream
    pub memo: String,
}

/// Token referencing the gateway-hosted payment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedPageToken {
    pub token: String,
}
