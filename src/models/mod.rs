pub mod api_response;
pub mod app_state;
pub mod catalog;
pub mod current_user;
pub mod deployment_config;
pub mod deployment_request;
pub mod deployment_stats;
pub mod deployment_view;
pub mod field_errors;
pub mod session;

// Re-export commonly used types
pub use api_response::{ApiResponse, GeneratedKey};
pub use app_state::AppState;
pub use catalog::{application_types, cloud_providers, instance_types, ApplicationOption, InstanceOption, ProviderOption};
pub use current_user::CurrentUser;
pub use deployment_config::{ApplicationType, CloudProvider, DeploymentConfig, Field, InstanceType, IpOption, SshKeyOption};
pub use deployment_request::DeploymentRequest;
pub use deployment_stats::DeploymentStats;
pub use deployment_view::DeploymentView;
pub use field_errors::FieldErrors;
pub use session::Session;
