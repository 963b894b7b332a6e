use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api;
use crate::handlers::helpers::current_session_from_jar;
use crate::models::{AppState, Session};

/// Gate for the protected routes. Cookie sessions are checked against the
/// in-memory store; the `X-Session-Token` header is accepted as a fallback
/// for cookie-less setups, validated against the backend once and then
/// cached in the store under the token itself.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if current_session_from_jar(&state, &jar).is_some() {
        return next.run(request).await;
    }

    let header_token = request
        .headers()
        .get("X-Session-Token")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    if let Some(token) = header_token {
        if let Some(session) = resolve_header_session(&state, &token).await {
            state.sessions.lock().unwrap().insert(token.clone(), session);
            // Downstream extractors read the session id from the cookie
            // header, so mirror the token there.
            if let Ok(value) = HeaderValue::from_str(&format!("session_id={}", token)) {
                request.headers_mut().append(COOKIE, value);
            }
            return next.run(request).await;
        }
    }

    Redirect::to("/login").into_response()
}

async fn resolve_header_session(state: &AppState, token: &str) -> Option<Session> {
    if let Some(existing) = state.session_for(token) {
        return Some(existing);
    }
    match api::check_auth(&state.client, &state.backend_base_url, token).await {
        Ok(Some(user)) => {
            let email = user.get("email").and_then(|v| v.as_str()).unwrap_or_default().to_string();
            let username = user
                .get("username")
                .and_then(|v| v.as_str())
                .unwrap_or(&email)
                .to_string();
            if email.is_empty() {
                return None;
            }
            Some(Session { email, username, token: Some(token.to_string()) })
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(%e, "Header-token validation failed");
            None
        }
    }
}
