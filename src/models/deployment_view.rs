use serde_json::Value;

/// Row model for the deployments list. The backend has shipped two record
/// shapes over time (`id`/`name`/`provider` and
/// `project_id`/`project_name`/`selected_service`); both are accepted.
#[derive(Debug, Clone)]
pub struct DeploymentView {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub region: String,
    pub status: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub created_display: String,
    pub progress_display: String,
}

impl DeploymentView {
    pub fn from_value(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        let id = obj
            .get("project_id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .or_else(|| obj.get("id").map(value_to_id))?;
        let name = first_str(obj, &["name", "project_name"]).unwrap_or_else(|| "(unnamed)".into());
        let provider = first_str(obj, &["provider", "selected_service"]).unwrap_or_default();
        let region = first_str(obj, &["region"]).unwrap_or_default();
        let status = first_str(obj, &["status"]).unwrap_or_else(|| "unknown".into());
        let created_display = first_str(obj, &["created_at"])
            .map(|raw| format_created_at(&raw))
            .unwrap_or_else(|| "—".into());
        let progress_display = obj
            .get("progress")
            .and_then(|v| v.as_i64())
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "100%".into());
        Some(DeploymentView {
            status_label: crate::utils::format_status(&status),
            status_class: crate::utils::status_chip_class(&status),
            id,
            name,
            provider,
            region,
            status,
            created_display,
            progress_display,
        })
    }
}

fn first_str(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        obj.get(*k)
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

fn value_to_id(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn format_created_at(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
