use askama::Template;

use crate::models::{CurrentUser, DeploymentView};
use crate::templates::BaseTemplate;

#[derive(Template)]
#[template(path = "deployments.html")]
pub struct DeploymentsTemplate {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub deployments: Vec<DeploymentView>,
    pub error: Option<String>,
    pub new_deployment_url: String,
    pub refresh_url: String,
}

crate::impl_base_template!(DeploymentsTemplate);
