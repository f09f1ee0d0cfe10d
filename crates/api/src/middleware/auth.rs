//! Bearer-token auth gate for mutating catalog routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use motorhub_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried a valid access token.
///
/// Add as a handler parameter to gate the route:
///
/// ```ignore
/// async fn create(_auth: RequireAuth, ...) -> AppResult<...> { ... }
/// ```
///
/// Rejects with 401 before the handler body (and so the store) runs.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    /// Token subject, kept for log context.
    pub subject: String,
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(RequireAuth {
            subject: claims.sub,
        })
    }
}
