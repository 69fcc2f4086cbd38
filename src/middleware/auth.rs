use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use nomad_auth::{Claims, UserRole, verify_token};
use nomad_core::AppError;

use crate::state::AppState;

pub const NO_TOKEN: &str = "No token provided!";
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// The authenticated principal, resolved from a verified session token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.sub
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.0.role)
    }
}

/// Finds the session token: `x-access-token` first, then `Authorization`
/// with or without a `Bearer ` prefix.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    header_value(ACCESS_TOKEN_HEADER).or_else(|| {
        header_value(axum::http::header::AUTHORIZATION.as_str()).map(|value| {
            value
                .strip_prefix("Bearer ")
                .map(str::trim)
                .unwrap_or(value)
        })
    })
}

fn resolve(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, AppError> {
    let token = extract_token(headers).ok_or_else(|| AppError::unauthorized(NO_TOKEN))?;
    let claims = verify_token(token, &state.jwt_config)?;
    Ok(AuthUser(claims))
}

/// Middleware that rejects requests without a valid session token and
/// attaches the [`AuthUser`] to the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = resolve(req.headers(), &state).inspect_err(|e| {
        tracing::debug!(reason = %e.error, "Authentication rejected");
    })?;

    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        resolve(&parts.headers, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_extract_token_prefers_access_token_header() {
        let map = headers(&[("x-access-token", "abc"), ("authorization", "Bearer xyz")]);
        assert_eq!(extract_token(&map), Some("abc"));
    }

    #[test]
    fn test_extract_token_from_authorization() {
        assert_eq!(
            extract_token(&headers(&[("authorization", "Bearer xyz")])),
            Some("xyz")
        );
        assert_eq!(extract_token(&headers(&[("authorization", "xyz")])), Some("xyz"));
    }

    #[test]
    fn test_extract_token_missing() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        assert_eq!(extract_token(&headers(&[("x-access-token", "  ")])), None);
    }

    #[test]
    fn test_auth_user_roles() {
        let auth_user = AuthUser(Claims {
            sub: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            role: UserRole::Manager,
            exp: 9999999999,
            iat: 1234567890,
        });
        assert!(auth_user.has_any_role(&[UserRole::TravelAdmin, UserRole::Manager]));
        assert!(!auth_user.has_any_role(&[UserRole::SuperAdmin]));
        assert_eq!(auth_user.email(), "a@b.com");
    }
}
