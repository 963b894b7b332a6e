use super::client::{backend_call, BackendError};

/// Store the user's cloud-provider credential. The key is validated by the
/// caller before it gets anywhere near the wire.
pub async fn update_provider(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    user_email: &str,
    provider_key: &str,
) -> Result<String, BackendError> {
    let body = serde_json::json!({
        "user_email": user_email,
        "provider_key": provider_key,
    });
    let payload = backend_call(client, base_url, token, "POST", "/settings", Some(body), None).await?;
    Ok(payload
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Provider configured successfully")
        .to_string())
}
