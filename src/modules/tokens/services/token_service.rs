use std::sync::Arc;

use tracing::{error, info};

use crate::core::Result;
use crate::modules::gateways::services::{HostedPageGateway, HostedPageRequest, HostedPageToken};

/// Service for issuing hosted payment page tokens
pub struct TokenService {
    gateway: Arc<dyn HostedPageGateway>,
}

impl TokenService {
    /// Create a new TokenService backed by the given gateway
    pub fn new(gateway: Arc<dyn HostedPageGateway>) -> Self {
        Self { gateway }
    }

    /// Forward a validated request to the gateway.
    ///
    /// The gateway call is awaited exactly once; failures are returned to
    /// the caller without retry.
    pub async fn issue_token(&self, request: HostedPageRequest) -> Result<HostedPageToken> {
        info!(
            gateway = %self.gateway.name(),
            amount = %request.amount,
            "Requesting hosted payment page token"
        );

        match self.gateway.create_hosted_page_token(request).await {
            Ok(token) => {
                info!(
                    gateway = %self.gateway.name(),
                    "Hosted payment page token issued"
                );
                Ok(token)
            }
            Err(e) => {
                error!(
                    gateway = %self.gateway.name(),
                    error = %e,
                    "Failed to obtain hosted payment page token"
                );
                Err(e)
            }
        }
    }
}
