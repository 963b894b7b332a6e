// Atomic API modules
pub mod auth;
pub mod client;
pub mod deployments;
pub mod settings;

// Re-export commonly used functions
pub use auth::{check_auth, login, logout, signup, AuthOutcome};
pub use client::{backend_call, BackendError};
pub use deployments::{load_deployments, load_stats, submit_deployment, undeploy};
pub use settings::update_provider;
