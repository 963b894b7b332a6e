use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::PROVIDER_KEY_LEN;
use crate::models::{DeploymentConfig, Field, FieldErrors, SshKeyOption};

static SSH_RSA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ssh-rsa [A-Za-z0-9+/=]+ ?[A-Za-z0-9]*$").unwrap());

static PROVIDER_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{64}$").unwrap());

pub fn is_valid_ssh_key(key: &str) -> bool {
    SSH_RSA_RE.is_match(key.trim())
}

/// Aggregate validator over the whole configuration. Runs every field's
/// full rule set without early exit so all problems surface at once; the
/// `ssh_key` rules read `ssh_key_option` from the same snapshot.
pub fn validate_config(config: &DeploymentConfig) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if config.project_name.trim().is_empty() {
        errors.project_name = Some("Project name is required".into());
    } else if config.project_name.chars().count() > 50 {
        errors.project_name = Some("Project name must be less than 50 characters".into());
    }

    if config.cloud_provider.is_none() {
        errors.cloud_provider = Some("Cloud provider is required".into());
    }

    if config.instance_type.is_none() {
        errors.instance_type = Some("Instance type is required".into());
    }

    if config.application_type.is_none() {
        errors.application_type = Some("Application type is required".into());
    }

    if config.region.trim().is_empty() {
        errors.region = Some("Region is required".into());
    }

    if config.volume_size <= 0 {
        errors.volume_size = Some("Volume size must be positive".into());
    } else if config.volume_size > 1000 {
        errors.volume_size = Some("Volume size must be less than 1000 GiB".into());
    }

    if config.ip_option.is_none() {
        errors.ip_option = Some("IP option is required".into());
    }

    if config.ssh_key_option.is_none() {
        errors.ssh_key_option = Some("SSH key option is required".into());
    }

    if config.ssh_key_option == Some(SshKeyOption::Existing) {
        if config.ssh_key.trim().is_empty() {
            errors.ssh_key = Some("SSH key is required".into());
        } else if config.ssh_key.chars().count() > 2000 {
            errors.ssh_key = Some("SSH key is too long".into());
        } else if !is_valid_ssh_key(&config.ssh_key) {
            errors.ssh_key = Some("Must be a valid ssh-rsa key (e.g. 'ssh-rsa AAAAB3Nza...')".into());
        }
    }

    errors
}

/// Single-field rules, run on blur. `ssh_key` depends on the *current*
/// `ssh_key_option`, not the one in effect when the key was typed.
pub fn validate_field(field: Field, config: &DeploymentConfig) -> Option<String> {
    match field {
        Field::ProjectName => {
            if config.project_name.trim().is_empty() {
                return Some("Project name is required".into());
            }
            if config.project_name.chars().count() > 50 {
                return Some("Must be less than 50 characters".into());
            }
            None
        }
        Field::CloudProvider => config
            .cloud_provider
            .is_none()
            .then(|| "Cloud provider is required".into()),
        Field::InstanceType => config
            .instance_type
            .is_none()
            .then(|| "Instance type is required".into()),
        Field::ApplicationType => config
            .application_type
            .is_none()
            .then(|| "Application type is required".into()),
        Field::Region => config
            .region
            .trim()
            .is_empty()
            .then(|| "Region is required".into()),
        Field::VolumeSize => {
            if config.volume_size <= 0 {
                return Some("Volume size must be positive".into());
            }
            if config.volume_size > 1000 {
                return Some("Volume size must be less than 1000 GiB".into());
            }
            None
        }
        Field::IpOption => config.ip_option.is_none().then(|| "IP option is required".into()),
        Field::SshKeyOption => config
            .ssh_key_option
            .is_none()
            .then(|| "SSH key option is required".into()),
        Field::SshKey => {
            if config.ssh_key_option != Some(SshKeyOption::Existing) {
                return None;
            }
            if config.ssh_key.trim().is_empty() {
                return Some("SSH key is required".into());
            }
            if config.ssh_key.chars().count() > 2000 {
                return Some("SSH key is too long".into());
            }
            if !is_valid_ssh_key(&config.ssh_key) {
                return Some("Must be a valid ssh-rsa key (e.g. 'ssh-rsa AAAAB3Nza...')".into());
            }
            None
        }
    }
}

/// Provider credential check used by the settings page before the key is
/// forwarded to the backend.
pub fn validate_provider_key(raw: &str) -> Result<(), String> {
    let key = raw.trim();
    if key.is_empty() {
        return Err("API key is required".into());
    }
    if key.chars().count() != PROVIDER_KEY_LEN {
        return Err(format!(
            "Key must be exactly {} characters (current: {})",
            PROVIDER_KEY_LEN,
            key.chars().count()
        ));
    }
    if !PROVIDER_KEY_RE.is_match(key) {
        return Err("Key must contain only letters and numbers".into());
    }
    Ok(())
}
