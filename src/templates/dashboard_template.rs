use askama::Template;

use crate::models::{CurrentUser, DeploymentStats, DeploymentView};
use crate::templates::BaseTemplate;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub stats: DeploymentStats,
    pub recent_deployments: Vec<DeploymentView>,
    pub deployments_error: Option<String>,
    pub new_deployment_url: String,
}

crate::impl_base_template!(DashboardTemplate);
