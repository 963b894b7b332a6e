use serde_json::{json, Value};

use super::client::BackendError;

/// Result of a successful login/signup exchange: the user object the
/// backend returned plus the session token it issued (header first, body
/// as fallback).
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: Value,
    pub token: Option<String>,
    pub message: String,
}

fn extract_user(payload: &Value) -> Option<Value> {
    payload
        .get("returneddata")
        .and_then(|d| d.get("user"))
        .or_else(|| payload.get("user"))
        .cloned()
}

async fn credential_exchange(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &str,
    body: Value,
) -> Result<AuthOutcome, BackendError> {
    let url = format!("{}{}", base_url, endpoint);
    let resp = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;

    let status = resp.status();
    let header_token = resp
        .headers()
        .get("X-Session-Token")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let payload: Value = resp.json().await.map_err(|_| BackendError::Parse)?;

    if !status.is_success() {
        let message = payload
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Login failed")
            .to_string();
        return Err(BackendError::Http { status: status.as_u16(), message });
    }

    let user = extract_user(&payload).ok_or(BackendError::Parse)?;
    let token = header_token.or_else(|| {
        payload
            .get("token")
            .and_then(|t| t.as_str())
            .map(|s| s.to_string())
    });
    let message = payload
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or_default()
        .to_string();
    Ok(AuthOutcome { user, token, message })
}

pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, BackendError> {
    credential_exchange(
        client,
        base_url,
        "/login",
        json!({ "email": email, "password": password }),
    )
    .await
}

pub async fn signup(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, BackendError> {
    credential_exchange(
        client,
        base_url,
        "/signup",
        json!({ "username": username, "email": email, "password": password }),
    )
    .await
}

/// Invalidate the backend-side session. Best effort: the local session is
/// dropped regardless of the outcome.
pub async fn logout(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<(), BackendError> {
    super::client::backend_call(client, base_url, token, "POST", "/logout", None, None).await?;
    Ok(())
}

/// Re-validate a stored session token. `Ok(Some(user))` means the backend
/// still honors it; `Ok(None)` means it was rejected.
pub async fn check_auth(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<Option<Value>, BackendError> {
    match super::client::backend_call(client, base_url, Some(token), "GET", "/check-auth", None, None)
        .await
    {
        Ok(payload) => Ok(payload.get("user").cloned()),
        Err(BackendError::Http { status: 401, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
