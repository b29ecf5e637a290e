mod token_request;
mod token_response;

pub use token_request::{GetTokenRequest, REQUIRED_FIELDS_MESSAGE};
pub use token_response::TokenResponse;
