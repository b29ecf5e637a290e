pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{GetTokenRequest, TokenResponse, REQUIRED_FIELDS_MESSAGE};
pub use services::TokenService;
