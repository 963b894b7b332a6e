use askama::Template;

use crate::models::CurrentUser;
use crate::templates::BaseTemplate;

#[derive(Template)]
#[template(path = "deploy_result.html")]
pub struct DeployResultTemplate {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub status_label: String,
    pub message: String,
    /// Present only when the backend generated a key pair for this
    /// deployment; rendered once and never stored.
    pub generated_private_key: Option<String>,
    pub generated_public_key: Option<String>,
    pub deployments_url: String,
}

crate::impl_base_template!(DeployResultTemplate);
