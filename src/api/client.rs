use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response")]
    Parse,
}

/// Core HTTP client function for talking to the provisioning/auth backend.
/// Credentials ride along both as a `session_id` cookie and as the
/// `X-Session-Token` header, so cookie-less setups keep working.
pub async fn backend_call(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    params: Option<Vec<(String, String)>>,
) -> Result<Value, BackendError> {
    // --- Curl Logging ---
    let mut url_for_log = format!("{}{}", base_url, endpoint);
    if let Some(ref p) = params {
        if !p.is_empty() {
            let query_string = p
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }
    }

    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));

    if token.is_some() {
        // Never echo the session token itself.
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'X-Session-Token: <session>'").fg(yansi::Color::Magenta)
        ));
    }
    if body.is_some() {
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
    }

    if let Some(ref d) = body {
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace("'", "'\\''");
        parts.push(format!(
            "{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
    // --------------------

    let url = format!("{}{}", base_url, endpoint);
    let mut req = match method {
        "GET" => client.get(&url),
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };

    if let Some(tok) = token {
        req = req
            .header("Cookie", format!("session_id={}", tok))
            .header("X-Session-Token", tok);
    }

    if let Some(ref p) = params {
        req = req.query(p);
    }

    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = req
        .send()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;
    let status = resp.status();
    let payload: Value = resp.json().await.map_err(|_| {
        if status.is_success() {
            BackendError::Parse
        } else {
            BackendError::Http {
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
            }
        }
    })?;

    if !status.is_success() {
        let message = payload
            .get("message")
            .or_else(|| payload.get("error"))
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
        return Err(BackendError::Http { status: status.as_u16(), message });
    }

    // Colorize the response JSON for readability; generated key material
    // must never reach the log.
    let mut loggable = payload.clone();
    if let Some(obj) = loggable.as_object_mut() {
        if obj.contains_key("generatedKey") {
            obj.insert("generatedKey".into(), Value::String("<redacted>".into()));
        }
    }
    let json_str = serde_json::to_string(&loggable).unwrap_or_else(|_| format!("{:?}", loggable));
    let response_str = Paint::new(json_str).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));

    Ok(payload)
}
