pub fn format_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "active" => "Active".to_string(),
        "running" => "Running".to_string(),
        "deploying" => "Deploying".to_string(),
        "pending" => "Pending".to_string(),
        "failed" => "Failed".to_string(),
        "destroyed" => "Destroyed".to_string(),
        _ => status.to_string(),
    }
}

/// CSS chip class for a deployment status badge.
pub fn status_chip_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "running" | "active" => "chip chip-success",
        "deploying" | "pending" => "chip chip-info",
        "failed" => "chip chip-error",
        _ => "chip",
    }
}
