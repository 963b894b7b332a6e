use askama::Template;

use crate::models::{CurrentUser, DeploymentConfig, FieldErrors, IpOption, SshKeyOption};
use crate::models::{application_types, cloud_providers, instance_types};
use crate::templates::BaseTemplate;

/// One entry of a rendered `<select>`/radio group.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// One line of the configuration summary panel.
pub struct SummaryEntry {
    pub term: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "new_deployment.html")]
pub struct NewDeploymentTemplate {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub project_name: String,
    pub region: String,
    pub volume_size: i64,
    pub ssh_key: String,
    pub providers: Vec<SelectOption>,
    pub instance_options: Vec<SelectOption>,
    pub application_options: Vec<SelectOption>,
    pub ip_reserved_checked: bool,
    pub ip_dynamic_checked: bool,
    pub ssh_generate_checked: bool,
    pub ssh_existing_checked: bool,
    pub errors: FieldErrors,
    pub summary_open: bool,
    pub summary_entries: Vec<SummaryEntry>,
    pub submit_url: String,
    pub validate_url: String,
}

crate::impl_base_template!(NewDeploymentTemplate);

/// Flatten a draft configuration into template fields: option lists with
/// selection flags and the summary panel entries.
pub fn select_options_for(config: &DeploymentConfig) -> (Vec<SelectOption>, Vec<SelectOption>, Vec<SelectOption>) {
    let providers = cloud_providers()
        .iter()
        .map(|opt| SelectOption {
            value: opt.id.as_str().to_string(),
            label: opt.name.to_string(),
            selected: config.cloud_provider == Some(opt.id),
            disabled: false,
        })
        .collect();
    let instances = instance_types()
        .iter()
        .map(|opt| SelectOption {
            value: opt.id.as_str().to_string(),
            label: opt.name.to_string(),
            selected: config.instance_type == Some(opt.id),
            disabled: false,
        })
        .collect();
    let applications = application_types()
        .iter()
        .map(|opt| SelectOption {
            value: opt.id.as_str().to_string(),
            label: opt.name.to_string(),
            selected: config.application_type == Some(opt.id),
            disabled: !opt.available,
        })
        .collect();
    (providers, instances, applications)
}

pub fn summary_entries_for(config: &DeploymentConfig) -> Vec<SummaryEntry> {
    let mut entries = Vec::new();
    if !config.project_name.trim().is_empty() {
        entries.push(SummaryEntry { term: "Project".into(), value: config.project_name.clone() });
    }
    if let Some(provider) = config.cloud_provider {
        entries.push(SummaryEntry { term: "Provider".into(), value: provider.as_str().into() });
    }
    if let Some(instance) = config.instance_type {
        entries.push(SummaryEntry { term: "Instance".into(), value: instance.as_str().into() });
    }
    if let Some(app) = config.application_type {
        entries.push(SummaryEntry { term: "Application".into(), value: app.as_str().into() });
    }
    if !config.region.trim().is_empty() {
        entries.push(SummaryEntry { term: "Region".into(), value: config.region.clone() });
    }
    entries.push(SummaryEntry { term: "Volume".into(), value: format!("{} GiB", config.volume_size) });
    if let Some(ip) = config.ip_option {
        let label = match ip {
            IpOption::Reserved => "Reserved IP",
            IpOption::Dynamic => "Dynamic IP",
        };
        entries.push(SummaryEntry { term: "Networking".into(), value: label.into() });
    }
    if let Some(ssh) = config.ssh_key_option {
        let label = match ssh {
            SshKeyOption::Generate => "Generate a key pair",
            SshKeyOption::Existing => "Use an existing key",
        };
        entries.push(SummaryEntry { term: "SSH access".into(), value: label.into() });
    }
    entries
}
