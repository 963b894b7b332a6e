pub mod auth;
pub mod dashboard;
pub mod deployments;
pub mod helpers;
pub mod middleware;
pub mod new_deployment;
pub mod settings;
