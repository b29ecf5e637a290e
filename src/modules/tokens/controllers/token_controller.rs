use std::sync::Arc;

use actix_web::{error::InternalError, web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::tokens::models::{GetTokenRequest, TokenResponse};
use crate::modules::tokens::services::token_service::TokenService;

/// Issue a hosted payment page token
/// POST /get-token
pub async fn get_token(
    service: web::Data<Arc<TokenService>>,
    request: web::Json<GetTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().into_hosted_page_request()?;
    let token = service.issue_token(request).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::new(token.token)))
}

/// JSON extractor configuration rendering malformed bodies in the
/// standard `{success: false, message}` envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "message": message,
        }));

        InternalError::from_response(err, response).into()
    })
}

/// Configure token issuance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/get-token", web::post().to(get_token));
}
