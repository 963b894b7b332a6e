use serde_json::Value;

use super::client::{backend_call, BackendError};
use crate::models::{ApiResponse, DeploymentRequest, DeploymentStats, DeploymentView};

/// Submit one deployment to the backend. Exactly one exchange; callers
/// decide what a resubmission means.
pub async fn submit_deployment(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    request: &DeploymentRequest,
) -> Result<ApiResponse, BackendError> {
    let body = serde_json::to_value(request).map_err(|_| BackendError::Parse)?;
    let payload = backend_call(client, base_url, token, "POST", "/deploy", Some(body), None).await?;
    serde_json::from_value(payload).map_err(|_| BackendError::Parse)
}

/// Load the deployment records for one user. The backend has returned both
/// a bare array and an object wrapper; accept either.
pub async fn load_deployments(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    email: &str,
) -> Result<Vec<DeploymentView>, BackendError> {
    let params = vec![("email".to_string(), email.to_string())];
    let payload = backend_call(client, base_url, token, "GET", "/deployments", None, Some(params)).await?;
    let records = match &payload {
        Value::Array(arr) => arr.clone(),
        Value::Object(obj) => obj
            .get("deployments")
            .or_else(|| obj.get("data"))
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    Ok(records.iter().filter_map(DeploymentView::from_value).collect())
}

/// Aggregate counters for the dashboard tiles (the email-less form of the
/// deployments endpoint).
pub async fn load_stats(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<DeploymentStats, BackendError> {
    let payload = backend_call(client, base_url, token, "GET", "/deployments", None, None).await?;
    serde_json::from_value(payload).map_err(|_| BackendError::Parse)
}

/// Tear down a previously created deployment.
pub async fn undeploy(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    email: &str,
    project_id: &str,
    project_name: &str,
) -> Result<ApiResponse, BackendError> {
    let body = serde_json::json!({
        "user_email": email,
        "project_id": project_id,
        "project_name": project_name,
    });
    let payload = backend_call(client, base_url, token, "POST", "/undeploy", Some(body), None).await?;
    serde_json::from_value(payload).map_err(|_| BackendError::Parse)
}
