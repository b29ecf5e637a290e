use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::core::{AppError, Result};
use crate::modules::gateways::services::HostedPageRequest;

/// Static validation failure message for the required fields
pub const REQUIRED_FIELDS_MESSAGE: &str = "Amount, first name, and last name are required.";

/// Memo value used when the client omits the field or sends an empty string
const DEFAULT_MEMO: &str = "none";

/// Payment form data posted to /get-token
///
/// `amount` accepts a JSON number or a numeric string; an empty string
/// counts as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenRequest {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub zip: Option<String>,

    #[serde(default)]
    pub memo: Option<String>,
}

impl GetTokenRequest {
    /// Validate the required fields and produce the gateway request.
    ///
    /// Amount must be present and non-zero; first and last name must be
    /// present and non-empty. Any miss yields the single static message.
    pub fn into_hosted_page_request(self) -> Result<HostedPageRequest> {
        let amount = match self.amount {
            Some(amount) if !amount.is_zero() => amount,
            _ => return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE)),
        };

        let first_name = match self.first_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE)),
        };

        let last_name = match self.last_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE)),
        };

        let memo = match self.memo {
            Some(memo) if !memo.is_empty() => memo,
            _ => DEFAULT_MEMO.to_string(),
        };

        Ok(HostedPageRequest {
            amount,
            first_name,
            last_name,
            zip: self.zip,
            memo,
        })
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use std::str::FromStr;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => Decimal::from_str(&number.to_string())
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid amount: {}", number))),
        Some(serde_json::Value::String(text)) => {
            if text.trim().is_empty() {
                Ok(None)
            } else {
                Decimal::from_str(text.trim())
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("invalid amount: {:?}", text)))
            }
        }
        Some(other) => Err(D::Error::custom(format!("invalid amount: {}", other))),
    }
}
