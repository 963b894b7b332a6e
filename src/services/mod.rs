pub mod deploy_service;
pub mod form_state;
pub mod session_service;
pub mod validation;

// Re-export commonly used functions
pub use deploy_service::{build_request, submit, DeployTransport, HttpTransport, SubmitError};
pub use form_state::{FieldValue, FormState};
pub use session_service::random_session_id;
pub use validation::{is_valid_ssh_key, validate_config, validate_field, validate_provider_key};
