use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_BASE_URL: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";

// Fixed values injected into every DeploymentRequest. The broker currently
// provisions one server SKU through one terraform template.
pub const SELECTED_SERVER_SKU: &str = "cx22";
pub const TERRAFORM_TEMPLATE: &str = "hetzner";

// Provider credential keys are exactly 64 alphanumeric characters.
pub const PROVIDER_KEY_LEN: usize = 64;

// Session cookie lifetime, matching the backend's 30-day session window.
pub const SESSION_COOKIE_DAYS: i64 = 30;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_backend_base_url() -> String {
    sanitize_base_url(&env::var("BACKEND_BASE_URL").unwrap_or_else(|_| DEFAULT_BACKEND_BASE_URL.to_string()))
}

pub fn get_public_base_url() -> String {
    let raw = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string());
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "http://localhost:8080".to_string()
    } else {
        trimmed.to_string()
    }
}
