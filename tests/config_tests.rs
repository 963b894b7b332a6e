use std::env;
use tilde::config;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://broker.example.com/api/"),
        "https://broker.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://broker.example.com/api"),
        "https://broker.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://broker.example.com/api///"),
        "https://broker.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://broker.example.com/api/  "),
        "https://broker.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:8080");
}

#[test]
fn test_sanitize_base_url_whitespace_only() {
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8080");
}

#[test]
fn test_get_backend_base_url_with_trailing_slash() {
    env::set_var("BACKEND_BASE_URL", "https://broker.example.com/api/");

    let result = config::get_backend_base_url();

    assert_eq!(result, "https://broker.example.com/api");

    // Clean up
    env::remove_var("BACKEND_BASE_URL");
}

#[test]
fn test_fixed_request_constants() {
    // Wire-format constants the backend expects verbatim.
    assert_eq!(config::SELECTED_SERVER_SKU, "cx22");
    assert_eq!(config::TERRAFORM_TEMPLATE, "hetzner");
}
