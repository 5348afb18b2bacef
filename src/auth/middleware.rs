use actix_web::error::{ErrorForbidden, ErrorUnauthorized};
use actix_web::{Error, HttpRequest};

use super::jwt::validate_token;
use super::model::Claims;

/// Extract token from Authorization header
fn extract_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Validate token from HttpRequest and return claims
pub fn validate_request_token(req: &HttpRequest) -> Result<Claims, Error> {
    let token =
        extract_token(req).ok_or_else(|| ErrorUnauthorized("Missing authorization token"))?;

    let claims = validate_token(&token).map_err(|e| {
        log::warn!("Token validation failed: {:?}", e);
        ErrorUnauthorized("Invalid or expired token")
    })?;

    if claims.token_type != "access" {
        return Err(ErrorUnauthorized("Invalid token type"));
    }

    Ok(claims)
}

/// Validate token and additionally require the admin role.
pub fn require_admin(req: &HttpRequest) -> Result<Claims, Error> {
    let claims = validate_request_token(req)?;
    if !claims.es_admin() {
        return Err(ErrorForbidden("Admin role required"));
    }
    Ok(claims)
}

/// Claims when a valid bearer token is present, `None` otherwise. Used by
/// endpoints that work anonymously but key per-user state off the identity
/// when one is available.
pub fn claims_opcionales(req: &HttpRequest) -> Option<Claims> {
    validate_request_token(req).ok()
}
