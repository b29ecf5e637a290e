use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::gateway_trait::{HostedPageGateway, HostedPageRequest, HostedPageToken};
use crate::core::{AppError, Result};
use crate::modules::gateways::models::MerchantCredentials;

/// Billing country sent with every request, regardless of input
const BILLING_COUNTRY: &str = "USA";

/// Name of the custom field carrying the memo
const MEMO_FIELD_NAME: &str = "Memo";

/// Hosted page display settings, identical for every request
const HOSTED_PAYMENT_SETTINGS: [(&str, &str); 4] = [
    ("hostedPaymentButtonOptions", r#"{"text": "Pay"}"#),
    ("hostedPaymentOrderOptions", r#"{"show": false}"#),
    ("hostedPaymentBillingAddressOptions", r#"{"show": true}"#),
    ("hostedPaymentShippingAddressOptions", r#"{"show": false}"#),
];

/// Authorize.Net payment gateway client
///
/// Implements HostedPageGateway against the getHostedPaymentPageRequest API.
/// API Documentation: https://developer.authorize.net/api/reference/
pub struct AuthorizeNetClient {
    client: Client,
    credentials: MerchantCredentials,
    base_url: String,
}

impl AuthorizeNetClient {
    /// Create a new Authorize.Net client
    ///
    /// # Arguments
    /// * `credentials` - merchant login ID and transaction key
    /// * `base_url` - API base URL (defaults to sandbox)
    pub fn new(credentials: MerchantCredentials, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: base_url.unwrap_or_else(|| "https://apitest.authorize.net".to_string()),
        }
    }
}

#[async_trait]
impl HostedPageGateway for AuthorizeNetClient {
    async fn create_hosted_page_token(
        &self,
        request: HostedPageRequest,
    ) -> Result<HostedPageToken> {
        let url = format!("{}/xml/v1/request.api", self.base_url);
        let payload = build_hosted_page_request(&request, &self.credentials);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Authorize.Net request did not complete");
                AppError::NullResponse
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read Authorize.Net response body");
            AppError::NullResponse
        })?;

        tracing::debug!(status = %status, "Authorize.Net responded");

        // Authorize.Net prefixes response bodies with a UTF-8 BOM
        let body = body.trim_start_matches('\u{feff}');

        let parsed: HostedPaymentPageResponse = serde_json::from_str(body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse Authorize.Net response");
            AppError::NullResponse
        })?;

        map_response(parsed)
    }

    fn name(&self) -> &str {
        "authorizenet"
    }
}

/// Map a structured gateway response to a token or an error.
///
/// Only the first gateway message is surfaced on failure; additional
/// messages are logged at debug and dropped.
fn map_response(response: HostedPaymentPageResponse) -> Result<HostedPageToken> {
    match response.messages.result_code {
        ResultCode::Ok => match response.token {
            Some(token) if !token.is_empty() => Ok(HostedPageToken { token }),
            _ => {
                tracing::warn!("Authorize.Net reported Ok without a token");
                Err(AppError::NullResponse)
            }
        },
        ResultCode::Error => {
            let mut messages = response.messages.message.into_iter();
            match messages.next() {
                Some(first) => {
                    for extra in messages {
                        tracing::debug!(
                            code = %extra.code,
                            text = %extra.text,
                            "Dropping additional gateway message"
                        );
                    }
                    tracing::warn!(
                        code = %first.code,
                        text = %first.text,
                        "Authorize.Net rejected hosted page request"
                    );
                    Err(AppError::Gateway(first.text))
                }
                None => {
                    tracing::warn!("Authorize.Net error response carried no messages");
                    Err(AppError::NullResponse)
                }
            }
        }
    }
}

/// Build the getHostedPaymentPageRequest payload.
///
/// Pure data mapping: transaction type, billing country, memo field, and
/// the four display settings are fixed here and nowhere else.
pub fn build_hosted_page_request(
    request: &HostedPageRequest,
    credentials: &MerchantCredentials,
) -> GetHostedPaymentPageRequest {
    GetHostedPaymentPageRequest {
        get_hosted_payment_page_request: HostedPaymentPageRequest {
            merchant_authentication: MerchantAuthentication {
                name: credentials.login_id.clone(),
                transaction_key: credentials.transaction_key.clone(),
            },
            transaction_request: TransactionRequest {
                transaction_type: TransactionType::AuthCapture,
                amount: request.amount,
                bill_to: BillTo {
                    first_name: request.first_name.clone(),
                    last_name: request.last_name.clone(),
                    zip: request.zip.clone(),
                    country: BILLING_COUNTRY.to_string(),
                },
                user_fields: UserFields {
                    user_field: vec![UserField {
                        name: MEMO_FIELD_NAME.to_string(),
                        value: request.memo.clone(),
                    }],
                },
            },
            hosted_payment_settings: HostedPaymentSettings {
                setting: HOSTED_PAYMENT_SETTINGS
                    .iter()
                    .map(|(name, value)| Setting {
                        setting_name: name.to_string(),
                        setting_value: value.to_string(),
                    })
                    .collect(),
            },
        },
    }
}

// Authorize.Net API request structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHostedPaymentPageRequest {
    get_hosted_payment_page_request: HostedPaymentPageRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HostedPaymentPageRequest {
    merchant_authentication: MerchantAuthentication,
    transaction_request: TransactionRequest,
    hosted_payment_settings: HostedPaymentSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MerchantAuthentication {
    name: String,
    transaction_key: String,
}

#[derive(Debug, Serialize)]
enum TransactionType {
    #[serde(rename = "authCaptureTransaction")]
    AuthCapture,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRequest {
    transaction_type: TransactionType,
    amount: Decimal,
    bill_to: BillTo,
    user_fields: UserFields,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BillTo {
    first_name: String,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip: Option<String>,
    country: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserFields {
    user_field: Vec<UserField>,
}

#[derive(Debug, Serialize)]
struct UserField {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct HostedPaymentSettings {
    setting: Vec<Setting>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Setting {
    setting_name: String,
    setting_value: String,
}

// Authorize.Net API response structures

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostedPaymentPageResponse {
    token: Option<String>,
    messages: ResponseMessages,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseMessages {
    result_code: ResultCode,
    #[serde(default)]
    message: Vec<ResponseMessage>,
}

#[derive(Debug, Deserialize, PartialEq)]
enum ResultCode {
    Ok,
    Error,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    code: String,
    text: String,
}
