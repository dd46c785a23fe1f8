//! Trusted-header identity extractors.
//!
//! CineSeat sits behind a gateway that authenticates callers and forwards
//! their identity as `X-User-ID` / `X-User-Email` headers. This core trusts
//! those headers; the only decision made here is the admin role grant based
//! on the configured administrator email.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cineseat_core::error::AppError;
use cineseat_core::types::{Role, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted caller identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's ID, as supplied by the gateway.
    pub user_id: UserId,
    /// Derived role.
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Missing X-User-ID header")))?;

        let email = parts
            .headers
            .get("x-user-email")
            .and_then(|v| v.to_str().ok());

        let role = match (&state.config.auth.admin_email, email) {
            (Some(admin_email), Some(email)) if admin_email == email => Role::Admin,
            _ => Role::User,
        };

        Ok(AuthUser {
            user_id: UserId::new(user_id),
            role,
        })
    }
}

/// Identity extractor that additionally requires the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.role.is_admin() {
            return Err(AppError::forbidden("Admin access required").into());
        }
        Ok(AdminUser(user))
    }
}
