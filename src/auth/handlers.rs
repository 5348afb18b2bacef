use actix_web::{web, HttpRequest, HttpResponse, Responder};
use bcrypt::verify;

use super::jwt::{generate_access_token, generate_refresh_token, get_access_token_expiry, validate_token};
use super::middleware::validate_request_token;
use super::model::{LoginRequest, RefreshRequest, TokenResponse};
use crate::db::AppState;

/// Login endpoint
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    let admin = match state.get_admin_by_username(&body.username).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Usuario o contraseña incorrectos",
            ));
        }
        Err(e) => {
            log::error!("Database error during login: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Login failed"));
        }
    };

    let password_valid = verify(&body.password, &admin.password_hash).unwrap_or(false);
    if !password_valid {
        return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
            "Unauthorized",
            "Usuario o contraseña incorrectos",
        ));
    }

    let account_id = admin.id.to_string();
    let access_token = match generate_access_token(&account_id, &admin.username, &admin.role) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to generate access token: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to generate token",
            ));
        }
    };

    let refresh_token = match generate_refresh_token(&account_id, &admin.username, &admin.role) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to generate refresh token: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to generate token",
            ));
        }
    };

    // Store refresh token in database (invalidates any previous session)
    if let Err(e) = state
        .update_admin_refresh_token(&admin.id, &refresh_token)
        .await
    {
        log::error!("Failed to store refresh token: {:?}", e);
        // Continue anyway, token is still valid
    }

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: get_access_token_expiry(),
    })
}

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Token refreshed", body = TokenResponse),
        (status = 401, description = "Invalid refresh token")
    )
)]
pub async fn refresh_token(
    state: web::Data<AppState>,
    body: web::Json<RefreshRequest>,
) -> impl Responder {
    let claims = match validate_token(&body.refresh_token) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Invalid refresh token: {:?}", e);
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Invalid or expired refresh token",
            ));
        }
    };

    if claims.token_type != "refresh" {
        return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
            "Unauthorized",
            "Invalid token type",
        ));
    }

    // Check if this refresh token matches what's in database (single device session)
    let admin = match state.get_admin_by_refresh_token(&body.refresh_token).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Session expired. Please login again.",
            ));
        }
        Err(e) => {
            log::error!("Database error during refresh: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Refresh failed"));
        }
    };

    // Generate new access token only (keep same refresh token)
    let account_id = admin.id.to_string();
    let access_token = match generate_access_token(&account_id, &admin.username, &admin.role) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to generate access token: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to generate token",
            ));
        }
    };

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token: body.refresh_token.clone(),
        token_type: "Bearer".to_string(),
        expires_in: get_access_token_expiry(),
    })
}

/// Logout: invalidate the stored refresh token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return HttpResponse::from_error(e),
    };

    if let Ok(admin_id) = uuid::Uuid::parse_str(&claims.sub) {
        if let Err(e) = state.clear_admin_refresh_token(&admin_id).await {
            log::error!("Failed to clear refresh token: {:?}", e);
        }
    }

    HttpResponse::NoContent().finish()
}

/// Configure auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/login").route(web::post().to(login)))
        .service(web::resource("/auth/refresh").route(web::post().to(refresh_token)))
        .service(web::resource("/auth/logout").route(web::post().to(logout)));
}
