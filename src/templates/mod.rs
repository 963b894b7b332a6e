// Base template trait for inheritance
pub mod base_template;
pub use base_template::BaseTemplate;

// Individual template files
pub mod dashboard_template;
pub mod deploy_result_template;
pub mod deployments_template;
pub mod login_template;
pub mod new_deployment_template;
pub mod settings_template;
pub mod signup_template;

// Re-export all templates
pub use dashboard_template::DashboardTemplate;
pub use deploy_result_template::DeployResultTemplate;
pub use deployments_template::DeploymentsTemplate;
pub use login_template::LoginTemplate;
pub use new_deployment_template::{NewDeploymentTemplate, SelectOption, SummaryEntry};
pub use settings_template::SettingsTemplate;
pub use signup_template::SignupTemplate;
