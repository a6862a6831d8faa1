use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::{JsonApiError, MSG_MISSING_TOKEN};
use crate::state::ServerState;

/// Token of an `Authorization: Bearer <token>` header; the scheme is case-insensitive.
fn bearer_token(req: &Request) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// 校验 Authorization: Bearer <token>，通过后将 Claims 注入请求扩展
/// 缺失或格式错误、非法或过期均返回 401
pub async fn require_bearer(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = bearer_token(&req) else {
        warn!(%path, event = "auth_missing_token", "missing or malformed Authorization header");
        return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, MSG_MISSING_TOKEN));
    };

    match state.auth.verify_token(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(%path, event = "auth_invalid_token", error = %e, "token validation failed");
            Err(JsonApiError::from_auth(e, &state.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn with_auth(value: &str) -> Request {
        Request::builder().header(AUTHORIZATION, value).body(Body::empty()).unwrap()
    }

    #[test]
    fn scheme_matches_case_insensitively() {
        for header in ["Bearer abc.def", "bearer abc.def", "BEARER  abc.def "] {
            assert_eq!(bearer_token(&with_auth(header)).as_deref(), Some("abc.def"), "{header}");
        }
    }

    #[test]
    fn other_schemes_and_empty_tokens_are_ignored() {
        for header in ["Basic dXNlcjpwdw==", "Bearer", "Bearer   ", "abc.def"] {
            assert!(bearer_token(&with_auth(header)).is_none(), "{header}");
        }
    }
}
