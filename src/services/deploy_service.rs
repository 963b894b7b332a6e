use async_trait::async_trait;

use crate::api::client::BackendError;
use crate::api::deployments::submit_deployment;
use crate::config::{SELECTED_SERVER_SKU, TERRAFORM_TEMPLATE};
use crate::models::{ApiResponse, DeploymentConfig, DeploymentRequest, FieldErrors, SshKeyOption};
use crate::services::validation::validate_config;

/// One request/response exchange with the provisioning backend. A trait so
/// tests can count calls without a network.
#[async_trait]
pub trait DeployTransport: Send + Sync {
    async fn send(&self, request: &DeploymentRequest) -> Result<ApiResponse, BackendError>;
}

/// Production transport: `POST {backend}/deploy` credentialed with the
/// session's backend token.
pub struct HttpTransport {
    pub client: reqwest::Client,
    pub backend_base_url: String,
    pub token: Option<String>,
}

#[async_trait]
impl DeployTransport for HttpTransport {
    async fn send(&self, request: &DeploymentRequest) -> Result<ApiResponse, BackendError> {
        submit_deployment(&self.client, &self.backend_base_url, self.token.as_deref(), request).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("you must be logged in to deploy")]
    Unauthenticated,

    #[error("form validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    Backend(#[from] BackendError),
}

/// Flatten a valid configuration into the backend payload. The key text is
/// only forwarded when the user chose an existing key.
pub fn build_request(config: &DeploymentConfig, user_email: &str) -> DeploymentRequest {
    DeploymentRequest {
        project_name: config.project_name.clone(),
        selected_service: config
            .cloud_provider
            .map(|p| p.as_str().to_string())
            .unwrap_or_default(),
        selected_server: SELECTED_SERVER_SKU.to_string(),
        region: config.region.clone(),
        volume_size: config.volume_size,
        ip_option: config
            .ip_option
            .map(|o| o.as_str().to_string())
            .unwrap_or_default(),
        ssh_key_option: config
            .ssh_key_option
            .map(|o| o.as_str().to_string())
            .unwrap_or_default(),
        ssh_key: (config.ssh_key_option == Some(SshKeyOption::Existing))
            .then(|| config.ssh_key.clone()),
        terraform_template: TERRAFORM_TEMPLATE.to_string(),
        user_email: user_email.to_string(),
    }
}

/// The submission pipeline: guard the session, re-validate the whole
/// configuration, then perform exactly one exchange. No retries and no
/// idempotency key; a resubmission is a brand-new request.
pub async fn submit(
    transport: &dyn DeployTransport,
    config: &DeploymentConfig,
    authenticated_email: &str,
) -> Result<ApiResponse, SubmitError> {
    if authenticated_email.trim().is_empty() {
        return Err(SubmitError::Unauthenticated);
    }

    let errors = validate_config(config);
    if !errors.is_empty() {
        return Err(SubmitError::Validation(errors));
    }

    let request = build_request(config, authenticated_email);
    let response = transport.send(&request).await?;
    Ok(response)
}
