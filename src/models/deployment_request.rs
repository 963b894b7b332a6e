use serde::{Deserialize, Serialize};

/// Backend-facing payload for `POST /deploy`. Field names are part of the
/// backend contract and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub project_name: String,
    pub selected_service: String,
    pub selected_server: String,
    pub region: String,
    pub volume_size: i64,
    pub ip_option: String,
    pub ssh_key_option: String,
    pub ssh_key: Option<String>,
    pub terraform_template: String,
    pub user_email: String,
}
